//! JSON output formatter

use std::io::{self, Write};

use super::row::Row;

/// Render rows as a JSON array of flat objects
///
/// Styled cells serialize as their plain display string; integer cells stay
/// numeric.
pub fn output_json<W: Write>(rows: &[Row], out: &mut W) -> io::Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    match serde_json::to_string(rows) {
        Ok(json) => writeln!(out, "{}", json),
        Err(e) => {
            eprintln!("Error serializing to JSON: {}", e);
            Ok(())
        }
    }
}
