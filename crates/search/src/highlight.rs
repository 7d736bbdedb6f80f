//! Literal match highlighting.
//!
//! Matches are located with plain substring search over a case-folded copy of
//! the text and mapped back to byte ranges of the original, so queries such
//! as `(v2.0)` or `.*` are never interpreted as patterns.

use crate::relevance::{fold_case, fold_char};
use festival_core::markup::escape_markup;
use std::ops::Range;

/// A run of text that either matched the query or did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Byte ranges of `text` that case-insensitively equal `query`.
///
/// Ranges are non-overlapping, left to right, and always fall on char
/// boundaries of `text`, including when lowercasing changes byte lengths.
pub fn match_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    let query_lower = fold_case(query);
    if query_lower.is_empty() || text.is_empty() {
        return Vec::new();
    }

    // origin[i] = byte offset in `text` of the char that produced lowered byte i
    let mut lowered = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (offset, ch) in text.char_indices() {
        for lower in fold_char(ch) {
            lowered.push(lower);
            origin.resize(lowered.len(), offset);
        }
    }

    let mut ranges: Vec<Range<usize>> = Vec::new();
    for (pos, found) in lowered.match_indices(query_lower.as_str()) {
        let start = origin[pos];
        let last = origin[pos + found.len() - 1];
        let end = last + text[last..].chars().next().map_or(0, char::len_utf8);

        if ranges.last().is_some_and(|prev| start < prev.end) {
            continue;
        }
        ranges.push(start..end);
    }

    ranges
}

/// Split `text` into matched and unmatched segments.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for range in match_ranges(text, query) {
        if range.start > cursor {
            segments.push(Segment {
                text: &text[cursor..range.start],
                matched: false,
            });
        }
        segments.push(Segment {
            text: &text[range.clone()],
            matched: true,
        });
        cursor = range.end;
    }

    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment {
            text: &text[cursor..],
            matched: false,
        });
    }

    segments
}

/// Render `text` as escaped HTML with matches wrapped in `<mark>`.
pub fn highlight_html(text: &str, query: &str) -> String {
    let mut html = String::with_capacity(text.len() + 16);
    for segment in highlight(text, query) {
        if segment.matched {
            html.push_str("<mark>");
            html.push_str(&escape_markup(segment.text));
            html.push_str("</mark>");
        } else {
            html.push_str(&escape_markup(segment.text));
        }
    }
    html
}
