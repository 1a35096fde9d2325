//! Splits clue text into plain and reference segments.
//!
//! Renderers walk the segments in order and underline or hyperlink the
//! reference ones; concatenating every segment's text gives back the input.

use super::offsets::ByteCursor;
use super::references::ClueReference;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueSegment<'a> {
    Text(&'a str),
    Reference {
        reference: ClueReference,
        text: &'a str,
    },
}

impl<'a> ClueSegment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            ClueSegment::Text(text) => *text,
            ClueSegment::Reference { text, .. } => *text,
        }
    }
}

/// Segments `text` around `refs`, which must come from scanning that text.
///
/// References out of order or overlapping an earlier one are skipped so the
/// segments always cover the input exactly once.
pub fn segment_clue<'a>(text: &'a str, refs: &[ClueReference]) -> Vec<ClueSegment<'a>> {
    let mut segments = Vec::new();
    let mut byte_of = ByteCursor::new(text);
    let mut pos = 0;

    for reference in refs {
        let Some(start) = byte_of.byte_offset(reference.start) else {
            continue;
        };
        let Some(end) = byte_of.byte_offset(reference.end) else {
            continue;
        };
        if end <= start {
            continue;
        }
        if start > pos {
            segments.push(ClueSegment::Text(&text[pos..start]));
        }
        segments.push(ClueSegment::Reference {
            reference: *reference,
            text: &text[start..end],
        });
        pos = end;
    }

    if pos < text.len() {
        segments.push(ClueSegment::Text(&text[pos..]));
    }
    segments
}
