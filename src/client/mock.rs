//! Mock prompt client for tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::client::{PromptClient, ServerReply};
use crate::error::{PromptrError, Result};
use crate::prompt::Prompt;

/// Scripted prompt client.
///
/// Records every submitted prompt and plays back queued outcomes in order.
/// An empty queue yields an empty reply. An optional delay simulates a slow
/// server for in-flight guard tests.
pub struct MockPromptClient {
    outcomes: Mutex<VecDeque<Result<ServerReply>>>,
    calls: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl MockPromptClient {
    /// Create a mock that plays back the given outcomes in order.
    pub fn new(outcomes: Vec<Result<ServerReply>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Mock that answers every submission with the same reply text.
    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(ServerReply::new(text))])
    }

    /// Mock that fails with a transport error carrying `description`.
    pub fn failing(description: &str) -> Self {
        Self::new(vec![Err(PromptrError::Transport(description.to_string()))])
    }

    /// Sleep for `delay` before answering each submission.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Prompt texts submitted so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of submissions received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PromptClient for MockPromptClient {
    async fn submit(&self, prompt: &Prompt) -> Result<ServerReply> {
        self.calls.lock().unwrap().push(prompt.as_str().to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ServerReply::new("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls() {
        let mock = MockPromptClient::replying("hi");
        let prompt = Prompt::parse("hello").unwrap();

        let reply = mock.submit(&prompt).await.unwrap();

        assert_eq!(reply.response, "hi");
        assert_eq!(mock.calls(), vec!["hello".to_string()]);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_plays_outcomes_in_order() {
        let mock = MockPromptClient::new(vec![
            Ok(ServerReply::new("first")),
            Err(PromptrError::Transport("timeout".to_string())),
        ]);
        let prompt = Prompt::parse("x").unwrap();

        assert_eq!(mock.submit(&prompt).await.unwrap().response, "first");
        assert!(mock.submit(&prompt).await.is_err());
        // Exhausted queue falls back to an empty reply
        assert_eq!(mock.submit(&prompt).await.unwrap().response, "");
    }

    #[tokio::test]
    async fn test_mock_failing() {
        let mock = MockPromptClient::failing("timeout");
        let prompt = Prompt::parse("x").unwrap();

        let err = mock.submit(&prompt).await.unwrap_err();
        assert_eq!(err.to_string(), "timeout");
    }
}
