//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, count

mod csv;
mod json;
pub mod row;
pub mod style;
mod table;

use std::io::Write;

use crate::cli::Format;

pub use self::csv::escape_csv;
pub use self::row::{Emphasis, Row, Value};

/// Render rows in the selected format
///
/// Empty input produces no output at all, except COUNT which prints `0`.
pub fn render(rows: &[Row], format: Format) {
    let mut out = std::io::stdout().lock();
    let result = match format {
        Format::Table => table::output_table(rows, &mut out),
        Format::Csv => csv::output_csv(rows, &mut out),
        Format::Json => json::output_json(rows, &mut out),
        Format::Count => writeln!(out, "{}", rows.len()),
    };
    if let Err(e) = result {
        log::error!("Failed to write output: {}", e);
    }
}

/// Stable sort of projected rows by one or more columns
///
/// Columns are compared in the given order; integer cells compare
/// numerically. Missing columns sort as equal, so ties keep the order the
/// pipeline produced.
pub fn sort_rows(rows: &mut [Row], columns: &[&str], descending: bool) {
    rows.sort_by(|a, b| {
        let mut ordering = std::cmp::Ordering::Equal;
        for column in columns {
            ordering = match (a.get(column), b.get(column)) {
                (Some(x), Some(y)) => x.compare(y),
                _ => std::cmp::Ordering::Equal,
            };
            if ordering != std::cmp::Ordering::Equal {
                break;
            }
        }
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}
