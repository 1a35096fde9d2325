//! # Cross-reference scanning
//!
//! Finds phrases like "19- and 23-Across" or "see 7 Down" in clue text and
//! turns each referenced number into a [`ClueReference`].
//!
//! A phrase is a run of one or more 1-3 digit numbers separated by commas,
//! spaces, hyphens or "and", followed by a direction word. The run must start
//! at the beginning of the text or right after whitespace, `/` or `(`.
//!
//! ```text
//!  "19- and 23-Across"
//!   ^^      ^^^^^^^^^
//!   19      23 (last reference in a phrase also covers the direction word)
//! ```

use std::ops::Range;
use std::sync::LazyLock;

use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::offsets::{OffsetCursor, char_to_byte};

/// Most numbers one phrase may list. A longer run only matches its tail.
pub const MAX_LABELS_PER_PHRASE: usize = 7;

/// Most digits in one label number. "1234 Across" is not a reference.
pub const MAX_LABEL_DIGITS: usize = 3;

static REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(^|\s|/|\()(?P<nums>(?:,? ?(?i-u:and)? ?(?-u:\b)[0-9]{{1,{MAX_LABEL_DIGITS}}}-? ?){{1,{MAX_LABELS_PER_PHRASE}}})(?P<dir>(?i-u:a(?:cross(?:es)?)?|d(?:owns?)?))(?-u:\b)"
    );
    Regex::new(&pattern).expect("reference pattern is valid")
});

static LABEL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("label pattern is valid"));

/// One mention of another clue inside a clue's text.
///
/// `start..end` is a half-open range of char offsets into the scanned text.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClueReference {
    pub direction: Direction,
    /// Number printed in the grid, not yet resolved to an entry.
    pub label_number: u32,
    pub start: usize,
    pub end: usize,
}

impl ClueReference {
    /// Byte range of this reference in `text`, for slicing.
    pub fn byte_range(&self, text: &str) -> Range<usize> {
        char_to_byte(text, self.start)..char_to_byte(text, self.end)
    }

    /// The highlighted part of `text`, e.g. `"19"` or `"23-Across"`.
    pub fn matched_text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.byte_range(text)]
    }

    /// Span length in chars.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Scans `text` for cross-references, left to right.
///
/// Numbers from one phrase share its direction and keep their written order.
/// Each reference spans only its digits, except the last one of a phrase,
/// which extends to the end of the direction word.
pub fn scan_references(text: &str) -> Vec<ClueReference> {
    let mut refs = Vec::new();
    let mut cursor = OffsetCursor::new(text);

    for caps in REFERENCE_PATTERN.captures_iter(text) {
        let phrase = caps.get_match();
        let nums = caps
            .name("nums")
            .expect("reference phrase matched without numbers");
        let dir = caps
            .name("dir")
            .expect("reference phrase matched without a direction word");
        let direction = Direction::from_word(dir.as_str())
            .expect("direction word is in the vocabulary");

        let first = refs.len();
        for number in LABEL_NUMBER.find_iter(nums.as_str()) {
            let start = nums.start() + number.start();
            let end = nums.start() + number.end();
            refs.push(ClueReference {
                direction,
                label_number: parse_label(number.as_str()),
                start: cursor.char_offset(start),
                end: cursor.char_offset(end),
            });
        }
        assert!(refs.len() > first, "reference phrase yielded no numbers");

        if let Some(last) = refs.last_mut() {
            last.end = cursor.char_offset(phrase.end());
        }
        trace!(
            "reference phrase {:?} -> {} label(s) {}",
            phrase.as_str(),
            refs.len() - first,
            direction
        );
    }

    refs
}

/// At most `MAX_LABEL_DIGITS` ASCII digits, so this cannot overflow.
fn parse_label(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |n, b| n * 10 + u32::from(b - b'0'))
}
