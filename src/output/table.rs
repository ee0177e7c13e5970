//! Table output formatter

use std::io::{self, Write};

use comfy_table::{presets::NOTHING, Cell, Color, Table};

use super::row::{Emphasis, Row, Value};

/// Render rows as an ASCII table, headers taken from the first row
pub fn output_table<W: Write>(rows: &[Row], out: &mut W) -> io::Result<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };

    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(first.columns());

    for row in rows {
        table.add_row(row.values().map(cell));
    }

    writeln!(out, "{table}")
}

fn cell(value: &Value) -> Cell {
    match value {
        Value::Styled(text, emphasis) => Cell::new(text).fg(color(*emphasis)),
        other => Cell::new(other.display()),
    }
}

fn color(emphasis: Emphasis) -> Color {
    match emphasis {
        Emphasis::Red => Color::Red,
        Emphasis::Purple => Color::Magenta,
        Emphasis::Green => Color::Green,
    }
}
