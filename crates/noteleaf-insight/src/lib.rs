//! # noteleaf-insight
//!
//! AI insight generation for noteleaf.
//!
//! This crate provides both halves of the insight pipeline:
//! - [`ChatBackend`], the server-side client for the external
//!   OpenAI-compatible completion API (credential stays server-side)
//! - [`NoteAnalyzer`], which prompts the model for a summary/tags/mood
//!   object and normalizes whatever comes back
//! - [`InsightClient`], the client-side caller of the proxy service
//!
//! Model output is untrusted: malformed replies never fail a request, they
//! fall back to safe defaults (see [`normalize`]).

pub mod analyzer;
pub mod chat;
pub mod client;
pub mod normalize;
pub mod types;

pub use analyzer::NoteAnalyzer;
pub use chat::{ChatBackend, ChatConfig};
pub use client::{InsightClient, InsightClientConfig};
pub use normalize::normalize;
