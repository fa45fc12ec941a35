//! # noteleaf-core
//!
//! Core types, traits, and abstractions for the noteleaf note-taking system.
//!
//! This crate provides the foundational data structures and trait definitions
//! that other noteleaf crates depend on.

pub mod defaults;
pub mod error;
pub mod ids;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use ids::{NoteId, NoteIdGenerator};
pub use models::{AiInsight, Note, NoteDraft, NoteStats};
pub use traits::{CompletionBackend, KeyValueStore};
