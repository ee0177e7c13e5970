use std::fmt;

/// Custom error type for audit operations
#[derive(Debug)]
pub enum AuditError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// API key not found in any source
    ApiKeyNotFound(String),
    /// Failed to read or parse the netrc file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditError::Http(e) => write!(f, "HTTP request failed: {}", e),
            AuditError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            AuditError::ApiKeyNotFound(msg) => write!(f, "{}", msg),
            AuditError::Credentials(msg) => write!(f, "{}", msg),
            AuditError::Json(msg) => write!(f, "JSON error: {}", msg),
            AuditError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AuditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuditError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuditError {
    fn from(err: reqwest::Error) -> Self {
        AuditError::Http(err)
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        AuditError::Json(err.to_string())
    }
}

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        AuditError::Credentials(err.to_string())
    }
}

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = AuditError::Api {
            status: 404,
            message: "Not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn test_api_key_not_found_display() {
        let err = AuditError::ApiKeyNotFound("set HEROKU_API_KEY".to_string());
        assert!(err.to_string().contains("HEROKU_API_KEY"));
    }

    #[test]
    fn test_config_error_display() {
        let err = AuditError::Config("bad flag".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        // Verify AuditError is Send + Sync for async usage
        assert_send_sync::<AuditError>();
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: AuditError = json_err.into();
        match err {
            AuditError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected AuditError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no netrc");
        let err: AuditError = io_err.into();
        match err {
            AuditError::Credentials(msg) => assert!(msg.contains("no netrc")),
            _ => panic!("Expected AuditError::Credentials"),
        }
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        let err = AuditError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
