//! API boundary error handling.
//!
//! Every error is converted to a uniform `{ "error": message }` body with a
//! fixed, human-readable message per category. Internal detail (provider
//! error bodies, transport errors) never reaches the caller.

use axum::{http::StatusCode, response::IntoResponse, Json};

/// Fixed message for a malformed request body.
pub const MSG_INVALID_FORMAT: &str = "Invalid request format.";

/// Fixed message for rate-limited clients.
pub const MSG_RATE_LIMITED: &str = "Too many requests. Please wait a moment and try again.";

/// Fixed message when retrieval produced no documents.
pub const MSG_NO_DOCUMENTS: &str =
    "No relevant legal information found for your question. Please try rephrasing or asking a different question.";

/// Fixed message when generation produced an empty summary.
pub const MSG_GENERATION_FAILED: &str = "Failed to generate a response. Please try again.";

/// Fixed message for any unclassified failure.
pub const MSG_INTERNAL: &str = "An unexpected error occurred. Please try again later.";

/// Fixed message for non-POST requests to the search endpoint.
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed. Use POST to search.";

#[derive(Debug)]
pub enum ApiError {
    /// 400 — the message is user-facing (validation messages are written
    /// for the caller).
    BadRequest(String),
    /// 429
    RateLimited,
    /// 404
    NotFound,
    /// 500 — empty model output
    GenerationFailed,
    /// 500 — anything else
    Internal,
}

impl From<lawbridge_core::Error> for ApiError {
    fn from(err: lawbridge_core::Error) -> Self {
        use lawbridge_core::Error;
        match err {
            // Validator messages are the exact user-facing strings.
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            Error::RateLimited(_) => ApiError::RateLimited,
            Error::NotFound(_) => ApiError::NotFound,
            Error::Generation(_) => ApiError::GenerationFailed,
            _ => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::RateLimited => {
                (StatusCode::TOO_MANY_REQUESTS, MSG_RATE_LIMITED.to_string())
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, MSG_NO_DOCUMENTS.to_string()),
            ApiError::GenerationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                MSG_GENERATION_FAILED.to_string(),
            ),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string()),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawbridge_core::Error;

    #[test]
    fn test_invalid_input_preserves_message() {
        let api_err: ApiError = Error::InvalidInput("too short".to_string()).into();
        match api_err {
            ApiError::BadRequest(msg) => assert_eq!(msg, "too short"),
            other => panic!("Expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_internal_detail_never_leaks() {
        // Provider/internal errors collapse to the fixed generic message.
        for err in [
            Error::Search("provider body with secrets".to_string()),
            Error::Request("connection refused".to_string()),
            Error::Internal("stack trace".to_string()),
            Error::Config("OPENAI_API_KEY".to_string()),
        ] {
            let api_err: ApiError = err.into();
            assert!(matches!(api_err, ApiError::Internal));
        }
    }

    #[test]
    fn test_error_category_mapping() {
        assert!(matches!(
            ApiError::from(Error::RateLimited("k".to_string())),
            ApiError::RateLimited
        ));
        assert!(matches!(
            ApiError::from(Error::NotFound("none".to_string())),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(Error::Generation("empty".to_string())),
            ApiError::GenerationFailed
        ));
    }
}
