//! Centralized default constants for noteleaf.
//!
//! **This module is the single source of truth** for shared default values.
//! All crates should reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// STORAGE KEYS
// =============================================================================

/// Key-value store key holding the JSON-encoded note collection.
pub const NOTES_KEY: &str = "smartNotes";

/// Key-value store key holding the JSON-encoded autosave draft.
pub const DRAFT_KEY: &str = "noteDraft";

// =============================================================================
// INSIGHT
// =============================================================================

/// Maximum number of tags kept after normalizing model output.
pub const INSIGHT_MAX_TAGS: usize = 6;

/// Mood value substituted when the model supplies none.
pub const INSIGHT_UNKNOWN_MOOD: &str = "unknown";

/// Summary substituted when the model returns nothing usable at all.
pub const INSIGHT_EMPTY_SUMMARY: &str = "No summary available.";

// =============================================================================
// UPSTREAM COMPLETION API
// =============================================================================

/// Default base URL of the external completion API (Groq, OpenAI-compatible).
pub const UPSTREAM_URL: &str = "https://api.groq.com/openai/v1";

/// Default generation model.
pub const UPSTREAM_MODEL: &str = "llama-3.1-8b-instant";

/// Default sampling temperature for insight generation.
pub const UPSTREAM_TEMPERATURE: f32 = 0.4;

/// Timeout for upstream completion requests in seconds.
pub const UPSTREAM_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// PROXY SERVICE
// =============================================================================

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 3000;

/// Timeout for insight client calls to the proxy in seconds.
pub const PROXY_TIMEOUT_SECS: u64 = 45;

/// Maximum request body size in bytes (64 KB is generous for a note).
pub const MAX_BODY_SIZE_BYTES: usize = 64 * 1024;

// =============================================================================
// STATS
// =============================================================================

/// Window in days for the "recent notes" statistic.
pub const STATS_RECENT_DAYS: i64 = 7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_timeout_covers_upstream_timeout() {
        // The proxy must not give up before its own upstream call can finish.
        const {
            assert!(PROXY_TIMEOUT_SECS > UPSTREAM_TIMEOUT_SECS);
        }
    }

    #[test]
    fn storage_keys_are_distinct() {
        assert_ne!(NOTES_KEY, DRAFT_KEY);
    }
}
