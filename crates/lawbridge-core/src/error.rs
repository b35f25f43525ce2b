//! Error types for lawbridge.

use thiserror::Error;

/// Result type alias using lawbridge's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for lawbridge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input (malformed, too short, too long)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rate limit exceeded for a client
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Summary generation failed
    #[error("Generation error: {0}")]
    Generation(String),

    /// Document search failed
    #[error("Search error: {0}")]
    Search(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("question too short".to_string());
        assert_eq!(err.to_string(), "Invalid input: question too short");
    }

    #[test]
    fn test_error_display_rate_limited() {
        let err = Error::RateLimited("client 10.0.0.1".to_string());
        assert_eq!(err.to_string(), "Rate limited: client 10.0.0.1");
    }

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("no documents".to_string());
        assert_eq!(err.to_string(), "Not found: no documents");
    }

    #[test]
    fn test_error_display_generation() {
        let err = Error::Generation("empty completion".to_string());
        assert_eq!(err.to_string(), "Generation error: empty completion");
    }

    #[test]
    fn test_error_display_search() {
        let err = Error::Search("provider unavailable".to_string());
        assert_eq!(err.to_string(), "Search error: provider unavailable");
    }

    #[test]
    fn test_error_display_request() {
        let err = Error::Request("network unreachable".to_string());
        assert_eq!(err.to_string(), "Request error: network unreachable");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("missing API key".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing API key");
    }

    #[test]
    fn test_error_display_internal() {
        let err = Error::Internal("unexpected state".to_string());
        assert_eq!(err.to_string(), "Internal error: unexpected state");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number");
        assert!(json_err.is_err());

        let err: Error = json_err.unwrap_err().into();
        match err {
            Error::Serialization(msg) => {
                assert!(!msg.is_empty());
            }
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        match err {
            Error::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_result_type_ok() {
        fn get_result() -> Result<i32> {
            Ok(42)
        }
        let result = get_result();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);
    }
}
