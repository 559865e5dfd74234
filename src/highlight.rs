//! Matched-substring highlighting
//!
//! Splits a suggestion's text into alternating matched/plain fragments
//! using the offsets reported by the Places API, so the default row
//! renderer can style the parts of the text that matched the query.
//!
//! Offsets count characters, not bytes. Malformed spans (out of range,
//! overlapping, zero length) are clamped or dropped rather than rejected;
//! the split always reconstructs the input when concatenated in order.

use crate::places::MatchedSubstring;

/// One fragment of a split suggestion text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub matched: bool,
}

impl Fragment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Split text into alternating matched/plain fragments
///
/// Fragments appear in text order and are never empty. With no usable
/// spans the whole text comes back as one plain fragment (or nothing, for
/// empty text).
pub fn split_spans(text: &str, spans: &[MatchedSubstring]) -> Vec<Fragment> {
    if text.is_empty() {
        return Vec::new();
    }

    let char_count = text.chars().count();
    let ranges = normalize_spans(spans, char_count);
    if ranges.is_empty() {
        return vec![Fragment::plain(text)];
    }

    // Map char offsets to byte offsets for slicing
    let byte_offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut fragments = Vec::new();
    let mut cursor = 0;
    for (start, end) in ranges {
        if start > cursor {
            fragments.push(Fragment::plain(
                &text[byte_offsets[cursor]..byte_offsets[start]],
            ));
        }
        fragments.push(Fragment::matched(
            &text[byte_offsets[start]..byte_offsets[end]],
        ));
        cursor = end;
    }
    if cursor < char_count {
        fragments.push(Fragment::plain(
            &text[byte_offsets[cursor]..byte_offsets[char_count]],
        ));
    }

    fragments
}

/// Clamp spans to the text, drop empty ones, sort, and merge overlaps
///
/// Returns half-open `(start, end)` char ranges in ascending order.
fn normalize_spans(spans: &[MatchedSubstring], char_count: usize) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = spans
        .iter()
        .filter_map(|span| {
            let start = span.offset.min(char_count);
            let end = span.offset.saturating_add(span.length).min(char_count);
            (start < end).then_some((start, end))
        })
        .collect();

    ranges.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some((_, last_end)) if start <= *last_end => {
                *last_end = (*last_end).max(end);
            }
            _ => merged.push((start, end)),
        }
    }
    merged
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
