//! HTTP prompt client implementation.
//!
//! Implements the `PromptClient` trait against the `/prompt` endpoint:
//! one POST per submission, multipart form body with a single `prompt`
//! field, JSON reply.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Client;
use serde_json::Value;

use crate::client::{PromptClient, ServerReply};
use crate::error::{PromptrError, Result};
use crate::prompt::Prompt;

/// Endpoint path, appended to the configured base URL
const PROMPT_PATH: &str = "/prompt";

/// Default server base URL
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the HTTP prompt client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpClientConfig {
    /// Create a config pointing at a specific server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Prompt client backed by reqwest
#[derive(Debug)]
pub struct HttpPromptClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpPromptClient {
    /// Create a new client with the given config.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PromptrError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Full URL of the prompt endpoint.
    fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), PROMPT_PATH)
    }
}

#[async_trait]
impl PromptClient for HttpPromptClient {
    async fn submit(&self, prompt: &Prompt) -> Result<ServerReply> {
        let form = multipart::Form::new().text("prompt", prompt.as_str().to_owned());

        let response = self
            .client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| PromptrError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(PromptrError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| PromptrError::InvalidReply(e.to_string()))?;

        ServerReply::from_value(&body)
    }
}
