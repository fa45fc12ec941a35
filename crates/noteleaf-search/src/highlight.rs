//! Highlight segmentation for search term occurrences.
//!
//! The search term is a user-supplied literal, so it is escaped before being
//! compiled into a pattern. Terms like `a.b` or `c++` match themselves, never
//! as metacharacters.

use regex::RegexBuilder;

/// One piece of a highlighted text, in original order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Unmatched text between occurrences.
    Text(&'a str),
    /// A case-insensitive occurrence of the search term, in its original
    /// casing from the source text.
    Match(&'a str),
}

/// Split `text` into plain and matched segments for `term`.
///
/// Every case-insensitive occurrence of `term` is marked. An empty term (or
/// one that never occurs) yields the whole text as a single [`Segment::Text`].
pub fn highlight<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }
    if term.is_empty() {
        return vec![Segment::Text(text)];
    }

    let pattern = match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        // An escaped literal always compiles; treat a failure as no match.
        Err(_) => return vec![Segment::Text(text)],
    };

    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::Text(&text[cursor..found.start()]));
        }
        segments.push(Segment::Match(found.as_str()));
        cursor = found.end();
    }

    if cursor < text.len() {
        segments.push(Segment::Text(&text[cursor..]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_every_occurrence() {
        let segments = highlight("tea, coffee, more coffee", "coffee");
        assert_eq!(
            segments,
            vec![
                Segment::Text("tea, "),
                Segment::Match("coffee"),
                Segment::Text(", more "),
                Segment::Match("coffee"),
            ]
        );
    }

    #[test]
    fn matching_is_case_insensitive_and_preserves_source_casing() {
        let segments = highlight("Coffee or COFFEE", "coffee");
        assert_eq!(
            segments,
            vec![
                Segment::Match("Coffee"),
                Segment::Text(" or "),
                Segment::Match("COFFEE"),
            ]
        );
    }

    #[test]
    fn empty_term_yields_single_text_segment() {
        assert_eq!(highlight("anything", ""), vec![Segment::Text("anything")]);
    }

    #[test]
    fn empty_text_yields_no_segments() {
        assert!(highlight("", "term").is_empty());
    }

    #[test]
    fn no_occurrence_yields_single_text_segment() {
        assert_eq!(
            highlight("nothing here", "coffee"),
            vec![Segment::Text("nothing here")]
        );
    }

    #[test]
    fn metacharacters_match_literally() {
        // "a.b" must not match "axb"
        assert_eq!(highlight("axb", "a.b"), vec![Segment::Text("axb")]);

        let segments = highlight("use a.b here", "a.b");
        assert_eq!(
            segments,
            vec![
                Segment::Text("use "),
                Segment::Match("a.b"),
                Segment::Text(" here"),
            ]
        );
    }

    #[test]
    fn repetition_metacharacters_are_escaped() {
        let segments = highlight("learning c++ today", "c++");
        assert_eq!(
            segments,
            vec![
                Segment::Text("learning "),
                Segment::Match("c++"),
                Segment::Text(" today"),
            ]
        );
    }

    #[test]
    fn adjacent_occurrences_produce_no_empty_text_segments() {
        let segments = highlight("ababab", "ab");
        assert_eq!(
            segments,
            vec![
                Segment::Match("ab"),
                Segment::Match("ab"),
                Segment::Match("ab"),
            ]
        );
    }

    #[test]
    fn match_at_start_and_end() {
        let segments = highlight("coffee beans need coffee", "coffee");
        assert_eq!(segments.first(), Some(&Segment::Match("coffee")));
        assert_eq!(segments.last(), Some(&Segment::Match("coffee")));
    }

    #[test]
    fn reassembling_segments_restores_the_text() {
        let text = "Milk, eggs, coffee. More COFFEE.";
        let rebuilt: String = highlight(text, "coffee")
            .iter()
            .map(|segment| match segment {
                Segment::Text(s) | Segment::Match(s) => *s,
            })
            .collect();
        assert_eq!(rebuilt, text);
    }
}
