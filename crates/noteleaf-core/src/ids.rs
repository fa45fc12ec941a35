//! Note identifier type and monotonic id generation.
//!
//! The original design assigned ids from the current wall-clock millisecond,
//! which is unique only as long as no two notes are created within the same
//! millisecond. A dedicated counter removes that assumption entirely: ids are
//! strictly increasing within a store and never depend on the clock.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Unique identifier for a note within a store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NoteId {
    fn from(raw: u64) -> Self {
        NoteId(raw)
    }
}

/// Monotonic generator for [`NoteId`]s.
///
/// Thread-safe, though the note store itself is single-owner. A store loaded
/// from persistence seeds the generator past the highest persisted id so ids
/// stay unique across sessions.
#[derive(Debug)]
pub struct NoteIdGenerator {
    next: AtomicU64,
}

impl NoteIdGenerator {
    /// Create a generator starting at id 1.
    pub fn new() -> Self {
        Self::seeded(1)
    }

    /// Create a generator whose next id is `next`.
    pub fn seeded(next: u64) -> Self {
        Self {
            next: AtomicU64::new(next.max(1)),
        }
    }

    /// Create a generator that continues after every id in `existing`.
    pub fn after<'a, I>(existing: I) -> Self
    where
        I: IntoIterator<Item = &'a NoteId>,
    {
        let max = existing.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self::seeded(max + 1)
    }

    /// Allocate the next id.
    pub fn next_id(&self) -> NoteId {
        NoteId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NoteIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let gen = NoteIdGenerator::new();
        let a = gen.next_id();
        let b = gen.next_id();
        let c = gen.next_id();
        assert!(a < b && b < c);
        assert_eq!(a, NoteId(1));
    }

    #[test]
    fn seeded_generator_continues_sequence() {
        let gen = NoteIdGenerator::seeded(100);
        assert_eq!(gen.next_id(), NoteId(100));
        assert_eq!(gen.next_id(), NoteId(101));
    }

    #[test]
    fn seeded_zero_clamps_to_one() {
        let gen = NoteIdGenerator::seeded(0);
        assert_eq!(gen.next_id(), NoteId(1));
    }

    #[test]
    fn after_skips_past_existing_ids() {
        let existing = [NoteId(3), NoteId(17), NoteId(5)];
        let gen = NoteIdGenerator::after(existing.iter());
        assert_eq!(gen.next_id(), NoteId(18));
    }

    #[test]
    fn after_empty_starts_at_one() {
        let gen = NoteIdGenerator::after(std::iter::empty());
        assert_eq!(gen.next_id(), NoteId(1));
    }

    #[test]
    fn note_id_serde_is_transparent() {
        let id = NoteId(12);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "12");

        let back: NoteId = serde_json::from_str("12").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn note_id_display() {
        assert_eq!(NoteId(99).to_string(), "99");
    }
}
