//! Insight analysis: prompt construction and backend orchestration.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use noteleaf_core::{AiInsight, CompletionBackend, Error, Result};

use crate::normalize::normalize;

/// System instruction sent with every insight request.
const SYSTEM_PROMPT: &str = "You analyze short personal notes and return a concise summary, \
    3-6 tags, and an overall mood (like happy, stressed, neutral, excited, sad). \
    Always respond in strict JSON.";

/// Analyzes note content by prompting the completion backend for a
/// summary/tags/mood object.
///
/// Stateless and request-scoped: every call is an independent round trip,
/// nothing is cached, retried, or persisted.
pub struct NoteAnalyzer {
    backend: Box<dyn CompletionBackend>,
}

impl NoteAnalyzer {
    pub fn new(backend: Box<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Produce an insight for `content`.
    ///
    /// Fails with [`Error::InvalidInput`] on empty content, [`Error::Upstream`]
    /// when the completion API fails, and [`Error::Cancelled`] when `cancel`
    /// fires first. Malformed model output is not an error: it is normalized
    /// into a fallback insight.
    pub async fn analyze(&self, content: &str, cancel: &CancellationToken) -> Result<AiInsight> {
        if content.trim().is_empty() {
            return Err(Error::InvalidInput("note content is empty".to_string()));
        }

        let prompt = build_prompt(content);
        debug!(
            model = %self.backend.model_name(),
            prompt_len = prompt.len(),
            "Analyzing note content"
        );

        let raw = tokio::select! {
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            result = self.backend.generate(SYSTEM_PROMPT, &prompt) => result?,
        };

        Ok(normalize(&raw))
    }
}

/// User prompt wrapping the note content with the expected output shape.
fn build_prompt(content: &str) -> String {
    format!(
        "Note:\n\n{content}\n\nReturn JSON like:\n{{\n  \"summary\": \"...\",\n  \"tags\": [\"tag1\",\"tag2\"],\n  \"mood\": \"happy\"\n}}"
    )
}
