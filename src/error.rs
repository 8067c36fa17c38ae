//! Error types for promptr
//!
//! Centralized error handling using thiserror. Every failure that can reach
//! the user carries a fixed message template rather than whatever text the
//! underlying runtime happened to produce.

use thiserror::Error;

/// All error types that can occur in promptr
#[derive(Debug, Error)]
pub enum PromptrError {
    /// Prompt was empty after trimming; rejected locally, no request sent
    #[error("empty prompt")]
    EmptyPrompt,

    /// A submission is already in flight; rejected locally
    #[error("submission already in flight")]
    Busy,

    /// Transport-level failure (connection, timeout, TLS)
    #[error("{0}")]
    Transport(String),

    /// Server answered with a non-success HTTP status
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not valid JSON
    #[error("server reply is not valid JSON: {0}")]
    InvalidReply(String),

    /// Response JSON lacked a text `response` field
    #[error("server reply is missing a text `response` field")]
    MissingResponse,
}

impl PromptrError {
    /// Whether the error was raised locally, before any request went out
    pub fn is_local(&self) -> bool {
        matches!(self, PromptrError::EmptyPrompt | PromptrError::Busy)
    }
}

/// Result type alias for promptr operations
pub type Result<T> = std::result::Result<T, PromptrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_message() {
        let err = PromptrError::EmptyPrompt;
        assert_eq!(err.to_string(), "empty prompt");
    }

    #[test]
    fn test_busy_message() {
        let err = PromptrError::Busy;
        assert_eq!(err.to_string(), "submission already in flight");
    }

    #[test]
    fn test_transport_message_is_description_only() {
        let err = PromptrError::Transport("timeout".to_string());
        assert_eq!(err.to_string(), "timeout");
    }

    #[test]
    fn test_api_message() {
        let err = PromptrError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "server returned 503: service unavailable");
    }

    #[test]
    fn test_invalid_reply_message() {
        let err = PromptrError::InvalidReply("expected value at line 1".to_string());
        assert_eq!(
            err.to_string(),
            "server reply is not valid JSON: expected value at line 1"
        );
    }

    #[test]
    fn test_missing_response_message() {
        let err = PromptrError::MissingResponse;
        assert_eq!(err.to_string(), "server reply is missing a text `response` field");
    }

    #[test]
    fn test_is_local() {
        assert!(PromptrError::EmptyPrompt.is_local());
        assert!(PromptrError::Busy.is_local());
        assert!(!PromptrError::Transport("x".to_string()).is_local());
        assert!(!PromptrError::MissingResponse.is_local());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(PromptrError::EmptyPrompt)
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
