//! # noteleaf-search
//!
//! Filter/search engine for noteleaf note collections.
//!
//! This crate provides:
//! - Category filtering with an "all" sentinel
//! - Case-insensitive literal substring search over title and content
//! - Highlight segmentation of matched occurrences for display
//!
//! ## Example
//!
//! ```ignore
//! use noteleaf_search::{filter_notes, highlight, CategoryFilter, Segment};
//!
//! let visible = filter_notes(store.all(), &CategoryFilter::All, "coffee");
//! for note in visible {
//!     for segment in highlight(&note.title, "coffee") {
//!         match segment {
//!             Segment::Match(s) => print_highlighted(s),
//!             Segment::Text(s) => print_plain(s),
//!         }
//!     }
//! }
//! ```

pub mod filter;
pub mod highlight;

pub use filter::{filter_notes, CategoryFilter};
pub use highlight::{highlight, Segment};
