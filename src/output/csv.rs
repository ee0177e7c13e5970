//! CSV output formatter

use std::io::{self, Write};

use super::row::Row;

/// Render rows as CSV, header derived from the first row's columns
pub fn output_csv<W: Write>(rows: &[Row], out: &mut W) -> io::Result<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };

    writeln!(
        out,
        "{}",
        first
            .columns()
            .iter()
            .map(|c| escape_csv(c))
            .collect::<Vec<_>>()
            .join(",")
    )?;

    for row in rows {
        writeln!(
            out,
            "{}",
            row.values()
                .map(|v| escape_csv(&v.display()))
                .collect::<Vec<_>>()
                .join(",")
        )?;
    }
    Ok(())
}

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(rows: &[Row]) -> String {
        let mut buf = Vec::new();
        output_csv(rows, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_escape_csv_simple() {
        assert_eq!(escape_csv("simple"), "simple");
    }

    #[test]
    fn test_escape_csv_with_comma() {
        assert_eq!(escape_csv("has,comma"), "\"has,comma\"");
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        assert_eq!(escape_csv("has\"quote"), "\"has\"\"quote\"");
    }

    #[test]
    fn test_escape_csv_with_newline() {
        assert_eq!(escape_csv("has\nnewline"), "\"has\nnewline\"");
    }

    #[test]
    fn test_escape_csv_empty() {
        assert_eq!(escape_csv(""), "");
    }

    #[test]
    fn test_csv_header_then_rows() {
        let rows = vec![
            Row::new().push("App", "a").push("Count", 2usize),
            Row::new().push("App", "b").push("Count", 5usize),
        ];
        assert_eq!(render_to_string(&rows), "App,Count\na,2\nb,5\n");
    }

    #[test]
    fn test_csv_quotes_cell_with_comma() {
        let rows = vec![Row::new().push("App", "a").push("Matches", "X, Y")];
        assert_eq!(render_to_string(&rows), "App,Matches\na,\"X, Y\"\n");
    }

    #[test]
    fn test_csv_empty_produces_nothing() {
        assert_eq!(render_to_string(&[]), "");
    }
}
