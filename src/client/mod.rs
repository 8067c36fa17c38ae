//! Prompt client layer - HTTP transport behind a trait.
//!
//! This module provides:
//! - `ServerReply`, the structured reply from the prompt endpoint
//! - The `PromptClient` trait for transport abstraction
//! - `HttpPromptClient`, the reqwest implementation
//! - `MockPromptClient` for tests

pub mod http;
pub mod mock;

pub use http::{HttpClientConfig, HttpPromptClient};
pub use mock::MockPromptClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PromptrError, Result};
use crate::prompt::Prompt;

/// The structured reply from the prompt endpoint.
///
/// The server may send additional fields; only `response` is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerReply {
    pub response: String,
}

impl ServerReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }

    /// Extract the reply from a parsed JSON body.
    ///
    /// A missing or non-string `response` field is `MissingResponse`.
    pub fn from_value(value: &Value) -> Result<Self> {
        value
            .get("response")
            .and_then(Value::as_str)
            .map(Self::new)
            .ok_or(PromptrError::MissingResponse)
    }
}

/// Stateless prompt transport - one request per call, no session.
#[async_trait]
pub trait PromptClient: Send + Sync {
    /// Submit a prompt and return the server's reply.
    async fn submit(&self, prompt: &Prompt) -> Result<ServerReply>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_extracts_response() {
        let body = json!({ "response": "world" });
        let reply = ServerReply::from_value(&body).unwrap();
        assert_eq!(reply.response, "world");
    }

    #[test]
    fn test_from_value_ignores_extra_fields() {
        let body = json!({ "response": "ok", "generations": 42, "score": 7 });
        let reply = ServerReply::from_value(&body).unwrap();
        assert_eq!(reply.response, "ok");
    }

    #[test]
    fn test_from_value_missing_field() {
        let body = json!({ "answer": "nope" });
        assert!(matches!(
            ServerReply::from_value(&body),
            Err(PromptrError::MissingResponse)
        ));
    }

    #[test]
    fn test_from_value_non_string_field() {
        let body = json!({ "response": 42 });
        assert!(matches!(
            ServerReply::from_value(&body),
            Err(PromptrError::MissingResponse)
        ));
    }

    #[test]
    fn test_reply_serialization_roundtrip() {
        let reply = ServerReply::new("hello");
        let encoded = serde_json::to_string(&reply).unwrap();
        let decoded: ServerReply = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, reply);
    }
}
