//! Fallback normalization of model output.
//!
//! The model is asked for a strict-JSON object but its output is untrusted
//! and must never crash a handler. [`normalize`] therefore always produces a
//! complete [`AiInsight`]: a parseable reply maps field by field with
//! defaults for anything missing or mistyped, and an unparseable reply falls
//! back to the raw text as the summary with empty tags and an unknown mood.

use serde_json::Value as JsonValue;
use tracing::warn;

use noteleaf_core::defaults::{INSIGHT_EMPTY_SUMMARY, INSIGHT_MAX_TAGS, INSIGHT_UNKNOWN_MOOD};
use noteleaf_core::{AiInsight, Error, Result};

/// Normalize raw model output into a complete insight. Never fails.
pub fn normalize(raw: &str) -> AiInsight {
    match parse_insight(raw) {
        Ok(insight) => insight,
        Err(e) => {
            warn!(error = %e, "Model output was not valid JSON, applying fallback");
            let trimmed = raw.trim();
            AiInsight {
                summary: if trimmed.is_empty() {
                    INSIGHT_EMPTY_SUMMARY.to_string()
                } else {
                    trimmed.to_string()
                },
                tags: Vec::new(),
                mood: INSIGHT_UNKNOWN_MOOD.to_string(),
            }
        }
    }
}

/// Strict parse of the embedded JSON object.
fn parse_insight(raw: &str) -> Result<AiInsight> {
    let text = strip_code_fence(raw.trim());
    let value: JsonValue =
        serde_json::from_str(text).map_err(|e| Error::MalformedOutput(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| Error::MalformedOutput("expected a JSON object".to_string()))?;

    let summary = object
        .get("summary")
        .and_then(JsonValue::as_str)
        .unwrap_or_default()
        .to_string();

    let tags = object
        .get("tags")
        .and_then(JsonValue::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(JsonValue::as_str)
                .map(str::to_string)
                .take(INSIGHT_MAX_TAGS)
                .collect()
        })
        .unwrap_or_default();

    let mood = object
        .get("mood")
        .and_then(JsonValue::as_str)
        .filter(|mood| !mood.is_empty())
        .unwrap_or(INSIGHT_UNKNOWN_MOOD)
        .to_string();

    Ok(AiInsight {
        summary,
        tags,
        mood,
    })
}

/// Strip a surrounding Markdown code fence, which some models add despite
/// the strict-JSON instruction.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening fence line
    let rest = rest
        .split_once('\n')
        .map(|(_, body)| body)
        .unwrap_or(rest);
    rest.strip_suffix("```").map(str::trim).unwrap_or(text)
}
