//! Report row model
//!
//! Every report projects its results into a sequence of [`Row`]s sharing one
//! column set; the first row's columns define the header for table and CSV
//! output.

use std::cmp::Ordering;
use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Visual emphasis applied to a styled cell in table output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Red,
    Purple,
    Green,
}

/// A single displayable cell value
///
/// Styled values carry emphasis for table rendering only; CSV and JSON see
/// just the display text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Styled(String, Emphasis),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn styled(s: impl Into<String>, emphasis: Emphasis) -> Self {
        Value::Styled(s.into(), emphasis)
    }

    /// Display string, with any styling stripped
    pub fn display(&self) -> String {
        match self {
            Value::Text(s) | Value::Styled(s, _) => s.clone(),
            Value::Int(n) => n.to_string(),
        }
    }

    /// Ordering used by row sorting: integers compare numerically, everything
    /// else by display string
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            _ => self.display().cmp(&other.display()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) | Value::Styled(s, _) => write!(f, "{}", s),
            Value::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(n as i64)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Text(s) | Value::Styled(s, _) => serializer.serialize_str(s),
        }
    }
}

/// One report line: an ordered mapping from column name to cell value
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: Vec<(&'static str, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Append a column; insertion order defines header order
    pub fn push(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.cells.push((column, value.into()));
        self
    }

    /// Column names in insertion order
    pub fn columns(&self) -> Vec<&'static str> {
        self.cells.iter().map(|(c, _)| *c).collect()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.cells.iter().map(|(_, v)| v)
    }

    /// Look up a cell by column name
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v)
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_preserves_column_order() {
        let row = Row::new()
            .push("App", "a")
            .push("Count", 2usize)
            .push("Plan", "standard-0");
        assert_eq!(row.columns(), vec!["App", "Count", "Plan"]);
    }

    #[test]
    fn test_row_get() {
        let row = Row::new().push("App", "a").push("Count", 2usize);
        assert_eq!(row.get("Count"), Some(&Value::Int(2)));
        assert!(row.get("Missing").is_none());
    }

    #[test]
    fn test_value_display_strips_style() {
        let v = Value::styled("Stopped", Emphasis::Red);
        assert_eq!(v.display(), "Stopped");
        assert_eq!(v.to_string(), "Stopped");
    }

    #[test]
    fn test_value_compare_ints_numerically() {
        assert_eq!(Value::Int(9).compare(&Value::Int(10)), Ordering::Less);
        // String comparison would say "9" > "10"
        assert_eq!(
            Value::text("9").compare(&Value::text("10")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_row_serializes_as_ordered_object() {
        let row = Row::new().push("App", "a").push("Count", 2usize);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"App":"a","Count":2}"#);
    }

    #[test]
    fn test_styled_value_serializes_as_plain_string() {
        let row = Row::new().push("Quantity", Value::styled("Stopped", Emphasis::Red));
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"Quantity":"Stopped"}"#);
    }

    #[test]
    fn test_int_value_stays_numeric_in_json() {
        let json = serde_json::to_string(&Value::Int(0)).unwrap();
        assert_eq!(json, "0");
    }
}
