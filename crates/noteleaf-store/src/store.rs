//! The note store: an ordered in-memory collection synchronized to a
//! key-value persistence adapter on every mutation.

use chrono::{Duration, Utc};
use tracing::{debug, info};

use noteleaf_core::defaults::{NOTES_KEY, STATS_RECENT_DAYS};
use noteleaf_core::{Error, KeyValueStore, Note, NoteId, NoteIdGenerator, NoteStats, Result};

/// Ordered collection of notes, newest-created-first.
///
/// The store is the sole owner of its `Note` entities. Every mutation is
/// staged on a copy, written through to the persistence adapter, and only
/// committed to memory when the write succeeds — a failing adapter surfaces
/// its error and leaves the in-memory collection untouched.
pub struct NoteStore {
    notes: Vec<Note>,
    ids: NoteIdGenerator,
    kv: Box<dyn KeyValueStore>,
}

impl NoteStore {
    /// Load the persisted collection from `kv`.
    ///
    /// An absent key yields an empty store. The id generator is seeded past
    /// the highest persisted id so ids stay unique across sessions.
    pub fn load(kv: Box<dyn KeyValueStore>) -> Result<Self> {
        let notes: Vec<Note> = match kv.get(NOTES_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        let ids = NoteIdGenerator::after(notes.iter().map(|note| &note.id));

        debug!(count = notes.len(), "Loaded note collection");

        Ok(Self { notes, ids, kv })
    }

    /// Create a new note at the front of the collection.
    ///
    /// Fails with [`Error::Validation`] when title or content is empty after
    /// trimming. Both timestamps are set to the current time.
    pub fn create(&mut self, title: &str, content: &str, category: &str) -> Result<&Note> {
        let title = required("title", title)?;
        let content = required("content", content)?;

        let now = Utc::now();
        let note = Note {
            id: self.ids.next_id(),
            title,
            content,
            category: category.to_string(),
            created_at: now,
            updated_at: now,
        };

        let mut staged = self.notes.clone();
        staged.insert(0, note);
        self.persist(&staged)?;
        self.notes = staged;

        let created = &self.notes[0];
        info!(note_id = %created.id, category = %created.category, "Created note");
        Ok(created)
    }

    /// Update an existing note in place.
    ///
    /// Preserves `created_at` and the note's position in the collection,
    /// refreshes `updated_at`. Fails with [`Error::NoteNotFound`] when `id`
    /// is absent and [`Error::Validation`] on empty fields.
    pub fn update(
        &mut self,
        id: NoteId,
        title: &str,
        content: &str,
        category: &str,
    ) -> Result<&Note> {
        let title = required("title", title)?;
        let content = required("content", content)?;

        let position = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(Error::NoteNotFound(id))?;

        let mut staged = self.notes.clone();
        let note = &mut staged[position];
        note.title = title;
        note.content = content;
        note.category = category.to_string();
        note.updated_at = Utc::now();

        self.persist(&staged)?;
        self.notes = staged;

        info!(note_id = %id, "Updated note");
        Ok(&self.notes[position])
    }

    /// Remove the note with the given id.
    ///
    /// Returns `true` when an entry was removed. Deleting an absent id is a
    /// no-op returning `false`; the collection is never left in a partial
    /// state.
    pub fn delete(&mut self, id: NoteId) -> Result<bool> {
        let Some(position) = self.notes.iter().position(|note| note.id == id) else {
            debug!(note_id = %id, "Delete requested for absent note");
            return Ok(false);
        };

        let mut staged = self.notes.clone();
        staged.remove(position);
        self.persist(&staged)?;
        self.notes = staged;

        info!(note_id = %id, "Deleted note");
        Ok(true)
    }

    /// The full collection, newest-created-first.
    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    /// Look up a single note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Aggregate counts over the collection.
    pub fn stats(&self) -> NoteStats {
        let cutoff = Utc::now() - Duration::days(STATS_RECENT_DAYS);
        let last_week = self
            .notes
            .iter()
            .filter(|note| note.created_at >= cutoff)
            .count();
        let categories = self
            .notes
            .iter()
            .map(|note| note.category.as_str())
            .collect::<std::collections::HashSet<_>>()
            .len();

        NoteStats {
            total: self.notes.len(),
            last_week,
            categories,
        }
    }

    /// Serialize `notes` and write them through to the adapter.
    fn persist(&mut self, notes: &[Note]) -> Result<()> {
        let raw = serde_json::to_string(notes)?;
        self.kv.set(NOTES_KEY, &raw)
    }
}

/// Trim `value`, rejecting it when nothing remains.
fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
