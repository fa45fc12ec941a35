//! Category and free-text filtering over note collections.

use tracing::debug;

use noteleaf_core::Note;

/// Category filter applied before the free-text search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Sentinel matching every category.
    All,
    /// Exact category match.
    Category(String),
}

impl CategoryFilter {
    /// Parse a filter value, treating `"all"` as the sentinel.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    /// Whether `note` passes this filter.
    pub fn matches(&self, note: &Note) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => note.category == *category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

/// Derive the displayed subset of `notes` for a category filter and search
/// term.
///
/// Pure function: input order is preserved, so a newest-first collection
/// stays newest-first. The search term matches case-insensitively as a
/// literal substring of the title OR the content; an empty term matches
/// everything. An empty result is a valid terminal state, not an error.
pub fn filter_notes<'a>(
    notes: &'a [Note],
    filter: &CategoryFilter,
    term: &str,
) -> Vec<&'a Note> {
    let needle = term.to_lowercase();

    let visible: Vec<&Note> = notes
        .iter()
        .filter(|note| filter.matches(note))
        .filter(|note| {
            needle.is_empty()
                || note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
        .collect();

    debug!(
        total = notes.len(),
        result_count = visible.len(),
        "Filtered note collection"
    );

    visible
}
