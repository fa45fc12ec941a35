//! Autosave buffer for a note being composed.

use tracing::debug;

use noteleaf_core::defaults::DRAFT_KEY;
use noteleaf_core::{KeyValueStore, NoteDraft, Result};

/// Persists an in-progress draft so an interrupted session can offer to
/// restore it.
pub struct DraftBuffer {
    kv: Box<dyn KeyValueStore>,
}

impl DraftBuffer {
    pub fn new(kv: Box<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Persist `draft`. A draft with nothing in it is not written.
    pub fn save(&mut self, draft: &NoteDraft) -> Result<()> {
        if draft.is_empty() {
            return Ok(());
        }
        let raw = serde_json::to_string(draft)?;
        self.kv.set(DRAFT_KEY, &raw)
    }

    /// Restore-and-clear: return the saved draft (if any) and remove it so
    /// it is only offered once.
    pub fn take(&mut self) -> Result<Option<NoteDraft>> {
        let Some(raw) = self.kv.get(DRAFT_KEY)? else {
            return Ok(None);
        };
        let draft: NoteDraft = serde_json::from_str(&raw)?;
        self.kv.remove(DRAFT_KEY)?;

        debug!("Restored autosaved draft");
        Ok(if draft.is_empty() { None } else { Some(draft) })
    }

    /// Discard any saved draft.
    pub fn clear(&mut self) -> Result<()> {
        self.kv.remove(DRAFT_KEY)
    }
}
