//! OpenAI-compatible chat completion backend.
//!
//! The proxy service uses this against Groq by default; any endpoint
//! speaking the same wire format works. The API credential lives here, on
//! the server side, and is never visible to proxy callers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use noteleaf_core::{defaults, CompletionBackend, Error, Result};

use crate::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, UpstreamErrorResponse,
};

/// Configuration for the chat completion backend.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// API key for authentication (optional for local endpoints).
    pub api_key: Option<String>,
    /// Model to use for generation.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::UPSTREAM_URL.to_string(),
            api_key: None,
            model: defaults::UPSTREAM_MODEL.to_string(),
            temperature: defaults::UPSTREAM_TEMPERATURE,
            timeout_seconds: defaults::UPSTREAM_TIMEOUT_SECS,
        }
    }
}

/// Chat completion backend for an OpenAI-compatible endpoint.
pub struct ChatBackend {
    client: Client,
    config: ChatConfig,
}

impl ChatBackend {
    /// Create a new backend with the given configuration.
    pub fn new(config: ChatConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initializing chat completion backend"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    ///
    /// - `UPSTREAM_BASE_URL` (default: Groq)
    /// - `UPSTREAM_API_KEY` (falls back to `GROQ_API_KEY`)
    /// - `UPSTREAM_MODEL`
    /// - `UPSTREAM_TEMPERATURE`
    /// - `UPSTREAM_TIMEOUT` (seconds)
    pub fn from_env() -> Result<Self> {
        let config = ChatConfig {
            base_url: std::env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| defaults::UPSTREAM_URL.to_string()),
            api_key: std::env::var("UPSTREAM_API_KEY")
                .or_else(|_| std::env::var("GROQ_API_KEY"))
                .ok(),
            model: std::env::var("UPSTREAM_MODEL")
                .unwrap_or_else(|_| defaults::UPSTREAM_MODEL.to_string()),
            temperature: std::env::var("UPSTREAM_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::UPSTREAM_TEMPERATURE),
            timeout_seconds: std::env::var("UPSTREAM_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::UPSTREAM_TIMEOUT_SECS),
        };

        Self::new(config)
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Build a request with authentication if configured.
    fn build_request(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let mut req = self.client.post(&url);

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {api_key}"));
        }

        req.header("Content-Type", "application/json")
    }
}

#[async_trait]
impl CompletionBackend for ChatBackend {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String> {
        debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Requesting completion"
        );

        let mut messages = Vec::new();
        if !system.is_empty() {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.to_string(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        });

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: Some(self.config.temperature),
            stream: false,
        };

        let response = self
            .build_request("/chat/completions")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<UpstreamErrorResponse>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Upstream(format!(
                "Completion API returned {status}: {message}"
            )));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to parse response: {e}")))?;

        let content = result
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .unwrap_or_default();

        debug!(response_len = content.len(), "Completion received");
        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChatConfig::default();
        assert_eq!(config.base_url, defaults::UPSTREAM_URL);
        assert_eq!(config.model, defaults::UPSTREAM_MODEL);
        assert!((config.temperature - defaults::UPSTREAM_TEMPERATURE).abs() < f32::EPSILON);
        assert_eq!(config.timeout_seconds, defaults::UPSTREAM_TIMEOUT_SECS);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_backend_creation() {
        let backend = ChatBackend::new(ChatConfig::default());
        assert!(backend.is_ok());
        assert_eq!(backend.unwrap().model_name(), defaults::UPSTREAM_MODEL);
    }

    #[test]
    fn test_custom_config() {
        let config = ChatConfig {
            base_url: "http://localhost:8080/v1".to_string(),
            api_key: Some("test-key".to_string()),
            model: "custom-gen".to_string(),
            temperature: 0.9,
            timeout_seconds: 5,
        };
        let backend = ChatBackend::new(config).unwrap();
        assert_eq!(backend.config().base_url, "http://localhost:8080/v1");
        assert_eq!(backend.model_name(), "custom-gen");
    }
}
