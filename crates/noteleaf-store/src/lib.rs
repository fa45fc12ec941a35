//! # noteleaf-store
//!
//! Note lifecycle management for noteleaf.
//!
//! This crate provides:
//! - Key-value persistence adapters (in-memory and file-backed)
//! - The [`NoteStore`], an ordered in-memory collection synchronized to the
//!   adapter on every mutation
//! - The [`DraftBuffer`] autosave buffer for in-progress notes
//! - The [`Session`] controller owning edit/filter/search state

pub mod draft;
pub mod kv;
pub mod session;
pub mod store;

pub use draft::DraftBuffer;
pub use kv::{FileStore, MemoryStore};
pub use session::Session;
pub use store::NoteStore;
