//! Reshaping of data-API `info` lists
//!
//! The Postgres and Redis detail endpoints both answer with an `info` array
//! of `{"name": ..., "values": [...]}` entries instead of plain fields.

use serde_json::Value;

/// First value of the named `info` entry, rendered as a string
pub(crate) fn info_value(data: &Value, name: &str) -> Option<String> {
    data.get("info")?
        .as_array()?
        .iter()
        .find(|entry| entry.get("name").and_then(Value::as_str) == Some(name))?
        .get("values")?
        .as_array()?
        .first()
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> Value {
        serde_json::json!({
            "info": [
                {"name": "Plan", "values": ["Standard 0"]},
                {"name": "PG Version", "values": ["15.4"]},
                {"name": "Maxmemory", "values": ["noeviction"]},
                {"name": "Empty", "values": []}
            ]
        })
    }

    #[test]
    fn test_info_value_by_name() {
        assert_eq!(info_value(&details(), "PG Version").as_deref(), Some("15.4"));
        assert_eq!(
            info_value(&details(), "Maxmemory").as_deref(),
            Some("noeviction")
        );
    }

    #[test]
    fn test_info_value_missing_entry() {
        assert!(info_value(&details(), "Version").is_none());
    }

    #[test]
    fn test_info_value_empty_values() {
        assert!(info_value(&details(), "Empty").is_none());
    }

    #[test]
    fn test_info_value_non_string_rendered() {
        let data = serde_json::json!({
            "info": [{"name": "Connections", "values": [20]}]
        });
        assert_eq!(info_value(&data, "Connections").as_deref(), Some("20"));
    }

    #[test]
    fn test_info_value_no_info_key() {
        assert!(info_value(&serde_json::json!({}), "PG Version").is_none());
    }
}
