//! Core traits for noteleaf abstractions.
//!
//! These traits define the interfaces that concrete implementations must
//! satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;

// =============================================================================
// PERSISTENCE ADAPTER
// =============================================================================

/// A scoped key-value string store.
///
/// The note store treats persistence as opaque: string blobs in, string
/// blobs out. Implementations may be in-memory (tests, ephemeral sessions)
/// or file-backed.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}

// =============================================================================
// COMPLETION BACKEND
// =============================================================================

/// Backend capable of chat-style text generation against a language model.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Generate a completion for `prompt` under the given system instruction.
    ///
    /// An empty `system` omits the system message entirely.
    async fn generate(&self, system: &str, prompt: &str) -> Result<String>;

    /// Model identifier used for generation.
    fn model_name(&self) -> &str;
}
