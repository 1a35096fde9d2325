//! # Directions
//!
//! The two axes a crossword entry can run along, plus the small vocabulary
//! of words clue writers use to name them ("A", "across", "Downs", ...).

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    #[serde(rename = "across")]
    Across,
    #[serde(rename = "down")]
    Down,
}

/// Every accepted spelling, lowercase. Matching is ASCII case-insensitive.
const VOCABULARY: &[(&str, Direction)] = &[
    ("a", Direction::Across),
    ("across", Direction::Across),
    ("acrosses", Direction::Across),
    ("d", Direction::Down),
    ("down", Direction::Down),
    ("downs", Direction::Down),
];

impl Direction {
    /// Looks up a full direction word or abbreviation.
    ///
    /// Only the exact forms in the vocabulary are accepted; `"ac"` or
    /// `"downward"` return `None`.
    pub fn from_word(word: &str) -> Option<Direction> {
        VOCABULARY
            .iter()
            .find(|(form, _)| form.eq_ignore_ascii_case(word))
            .map(|(_, direction)| *direction)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "Across"),
            Direction::Down => write!(f, "Down"),
        }
    }
}
