//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

/// A clue with the labels and enumeration it should yield.
pub struct SampleClue {
    pub clue: &'static str,
    pub labels: &'static [u32],
    pub enumeration: Option<&'static str>,
}

pub const SAMPLE_CLUES: &[SampleClue] = &[
    SampleClue {
        clue: "Capital of France (5)",
        labels: &[],
        enumeration: Some("(5)"),
    },
    SampleClue {
        clue: "With 23-Across, famous duo (6,3)",
        labels: &[23],
        enumeration: Some("(6,3)"),
    },
    SampleClue {
        clue: "19- and 23-Across",
        labels: &[19, 23],
        enumeration: None,
    },
    SampleClue {
        clue: "Theme of 17-, 24-, 38- and 51-Across (3-4)",
        labels: &[17, 24, 38, 51],
        enumeration: Some("(3-4)"),
    },
    SampleClue {
        clue: "See 7 Down",
        labels: &[7],
        enumeration: None,
    },
    SampleClue {
        clue: "Reversed 4a/5d ()",
        labels: &[4, 5],
        enumeration: Some("()"),
    },
    SampleClue {
        clue: "Route 66 landmark (abc)",
        labels: &[],
        enumeration: None,
    },
];
