//! Session controller owning the note store and UI-facing state.
//!
//! Replaces ad-hoc global mutable state (the note list, the id currently
//! being edited, the active filter) with a single owner whose operations
//! keep the pieces consistent: a successful submit clears the edit state,
//! deleting the edited note cancels the edit, and the visible set is always
//! derived from the current filter and query.

use tracing::debug;

use noteleaf_core::{Note, NoteId, NoteStats, Result};
use noteleaf_search::{filter_notes, CategoryFilter};

use crate::store::NoteStore;

/// Single-user editing session over a [`NoteStore`].
pub struct Session {
    store: NoteStore,
    editing: Option<NoteId>,
    filter: CategoryFilter,
    query: String,
}

impl Session {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store,
            editing: None,
            filter: CategoryFilter::All,
            query: String::new(),
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Id of the note currently being edited, if any.
    pub fn editing(&self) -> Option<NoteId> {
        self.editing
    }

    /// Enter edit mode for an existing note, returning it for form
    /// population.
    pub fn begin_edit(&mut self, id: NoteId) -> Result<&Note> {
        let note = self
            .store
            .get(id)
            .ok_or(noteleaf_core::Error::NoteNotFound(id))?;
        self.editing = Some(id);
        debug!(note_id = %id, "Editing note");
        Ok(note)
    }

    /// Leave edit mode without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Save the form: updates the edited note when in edit mode, otherwise
    /// creates a new one. A successful save clears the edit state; a failed
    /// one keeps it so the user can correct the form.
    pub fn submit(&mut self, title: &str, content: &str, category: &str) -> Result<NoteId> {
        let id = match self.editing {
            Some(id) => self.store.update(id, title, content, category)?.id,
            None => self.store.create(title, content, category)?.id,
        };
        self.editing = None;
        Ok(id)
    }

    /// Delete a note. Deleting the note currently being edited also cancels
    /// the edit.
    pub fn delete(&mut self, id: NoteId) -> Result<bool> {
        let removed = self.store.delete(id)?;
        if self.editing == Some(id) {
            self.editing = None;
        }
        Ok(removed)
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The displayed subset of notes under the current filter and query.
    pub fn visible(&self) -> Vec<&Note> {
        filter_notes(self.store.all(), &self.filter, &self.query)
    }

    pub fn stats(&self) -> NoteStats {
        self.store.stats()
    }
}
