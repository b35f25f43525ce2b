//! Input validation for incoming questions.
//!
//! Validation happens before any external call: a rejected question must
//! never reach the retriever.

use crate::error::{Error, Result};

/// Minimum question length after trimming.
pub const MIN_QUESTION_LEN: usize = 5;

/// Maximum question length after trimming.
pub const MAX_QUESTION_LEN: usize = 1000;

/// User-facing message for an absent or non-string question.
pub const MSG_INVALID_QUESTION: &str = "Please provide a valid question.";

/// User-facing message for a question below the minimum length.
pub const MSG_TOO_SHORT: &str = "Question is too short. Please provide more detail.";

/// User-facing message for a question above the maximum length.
pub const MSG_TOO_LONG: &str = "Question is too long. Please keep it under 1000 characters.";

/// Sanitize a raw question: trim whitespace and bounds-check the length.
///
/// The error messages are the exact strings surfaced to the caller, so the
/// API boundary can map them straight into the response body.
pub fn sanitize_question(raw: Option<&str>) -> Result<String> {
    let raw = raw.ok_or_else(|| Error::InvalidInput(MSG_INVALID_QUESTION.to_string()))?;

    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_QUESTION_LEN {
        return Err(Error::InvalidInput(MSG_TOO_SHORT.to_string()));
    }
    if trimmed.chars().count() > MAX_QUESTION_LEN {
        return Err(Error::InvalidInput(MSG_TOO_LONG.to_string()));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<String>) -> String {
        match result.unwrap_err() {
            Error::InvalidInput(msg) => msg,
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_question_rejected() {
        assert_eq!(message(sanitize_question(None)), MSG_INVALID_QUESTION);
    }

    #[test]
    fn test_short_question_rejected() {
        assert_eq!(message(sanitize_question(Some("hi"))), MSG_TOO_SHORT);
    }

    #[test]
    fn test_whitespace_only_rejected() {
        // Trimming happens before the length check.
        assert_eq!(message(sanitize_question(Some("   a   "))), MSG_TOO_SHORT);
    }

    #[test]
    fn test_boundary_lengths() {
        assert!(sanitize_question(Some("12345")).is_ok());
        assert_eq!(message(sanitize_question(Some("1234"))), MSG_TOO_SHORT);

        let max = "a".repeat(MAX_QUESTION_LEN);
        assert!(sanitize_question(Some(&max)).is_ok());

        let over = "a".repeat(MAX_QUESTION_LEN + 1);
        assert_eq!(message(sanitize_question(Some(&over))), MSG_TOO_LONG);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let sanitized = sanitize_question(Some("  What are my rights?  ")).unwrap();
        assert_eq!(sanitized, "What are my rights?");
    }

    #[test]
    fn test_padding_does_not_rescue_long_question() {
        // Length is measured after trimming, so padding cannot push a
        // too-long question under the limit or vice versa.
        let padded = format!("   {}   ", "a".repeat(MAX_QUESTION_LEN));
        assert!(sanitize_question(Some(&padded)).is_ok());
    }
}
