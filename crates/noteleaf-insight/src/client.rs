//! Client-side caller of the AI proxy service.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use noteleaf_core::{defaults, AiInsight, Error, Result};

/// Configuration for the insight client.
#[derive(Debug, Clone)]
pub struct InsightClientConfig {
    /// Base URL of the proxy service.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for InsightClientConfig {
    fn default() -> Self {
        Self {
            base_url: format!("http://127.0.0.1:{}", defaults::SERVER_PORT),
            timeout_seconds: defaults::PROXY_TIMEOUT_SECS,
        }
    }
}

/// Calls the proxy's `/ai-note` endpoint for a note's content.
///
/// Every invocation is a fresh network round trip: no caching, no retries,
/// and results are never persisted. A failed call is terminal for that user
/// action and leaves the note store untouched.
pub struct InsightClient {
    client: Client,
    config: InsightClientConfig,
}

impl InsightClient {
    pub fn new(config: InsightClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Request an insight for `content`.
    ///
    /// Any non-success response or transport failure maps to
    /// [`Error::AiRequest`]; cancellation maps to [`Error::Cancelled`].
    pub async fn request_insight(
        &self,
        content: &str,
        cancel: &CancellationToken,
    ) -> Result<AiInsight> {
        let url = format!("{}/ai-note", self.config.base_url.trim_end_matches('/'));
        debug!(prompt_len = content.len(), "Requesting insight from proxy");

        let request = async {
            let response = self
                .client
                .post(&url)
                .json(&json!({ "content": content }))
                .send()
                .await
                .map_err(|e| Error::AiRequest(format!("Request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(Error::AiRequest(format!(
                    "Proxy returned {}",
                    response.status()
                )));
            }

            response
                .json::<AiInsight>()
                .await
                .map_err(|e| Error::AiRequest(format!("Failed to parse response: {e}")))
        };

        tokio::select! {
            _ = cancel.cancelled() => Err(Error::Cancelled),
            result = request => result,
        }
    }
}
