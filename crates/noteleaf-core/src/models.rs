//! Core data models for noteleaf.
//!
//! These types are shared across all noteleaf crates and represent the
//! core domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::NoteId;

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A user-authored note.
///
/// Invariants maintained by the store: `id` is unique, `title` and `content`
/// are never empty after a successful save, and `created_at` is immutable
/// once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Open string value (`work`, `personal`, `ideas`, ...), not a closed set.
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Autosave buffer for a note being composed.
///
/// Persisted under its own key, restored once on the next session and then
/// cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl NoteDraft {
    /// True when there is nothing worth persisting.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

/// Aggregate counts over a note collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteStats {
    /// Total number of notes.
    pub total: usize,
    /// Notes created within the last 7 days.
    pub last_week: usize,
    /// Number of distinct categories in use.
    pub categories: usize,
}

// =============================================================================
// AI INSIGHT TYPES
// =============================================================================

/// Normalized insight produced for a note's content.
///
/// Transient by design: owned by the caller that requested it and never
/// persisted onto the note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiInsight {
    /// Concise summary of the note, empty when unavailable.
    #[serde(default)]
    pub summary: String,
    /// Short topical tags, at most [`crate::defaults::INSIGHT_MAX_TAGS`].
    #[serde(default)]
    pub tags: Vec<String>,
    /// Overall mood word, `"unknown"` when unavailable.
    #[serde(default = "default_mood")]
    pub mood: String,
}

fn default_mood() -> String {
    crate::defaults::INSIGHT_UNKNOWN_MOOD.to_string()
}

impl Default for AiInsight {
    fn default() -> Self {
        Self {
            summary: String::new(),
            tags: Vec::new(),
            mood: default_mood(),
        }
    }
}
