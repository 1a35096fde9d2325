//! # Reference resolution
//!
//! Label numbers are what the solver sees printed in the grid; links need the
//! entry behind them. Numbering the grid is someone else's job, so this module
//! only asks an [`EntryLookup`] for each `(direction, label)` pair.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::direction::Direction;
use super::references::ClueReference;

/// Maps a displayed clue label to the index of its grid entry.
pub trait EntryLookup {
    fn entry_index(&self, direction: Direction, label_number: u32) -> Option<usize>;
}

impl EntryLookup for HashMap<(Direction, u32), usize> {
    fn entry_index(&self, direction: Direction, label_number: u32) -> Option<usize> {
        self.get(&(direction, label_number)).copied()
    }
}

impl EntryLookup for BTreeMap<(Direction, u32), usize> {
    fn entry_index(&self, direction: Direction, label_number: u32) -> Option<usize> {
        self.get(&(direction, label_number)).copied()
    }
}

/// A reference paired with the entry it points to.
///
/// `entry` is `None` when the label doesn't exist in the grid, which a
/// renderer can show as a broken link.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedReference {
    #[serde(flatten)]
    pub reference: ClueReference,
    pub entry: Option<usize>,
}

impl ResolvedReference {
    pub fn is_resolved(&self) -> bool {
        self.entry.is_some()
    }
}

/// Resolves every reference, keeping order and unresolved ones.
pub fn resolve_references<L>(refs: &[ClueReference], lookup: &L) -> Vec<ResolvedReference>
where
    L: EntryLookup + ?Sized,
{
    refs.iter()
        .map(|reference| ResolvedReference {
            reference: *reference,
            entry: lookup.entry_index(reference.direction, reference.label_number),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::references::scan_references;

    fn grid_lookup() -> HashMap<(Direction, u32), usize> {
        HashMap::from([
            ((Direction::Across, 19), 4),
            ((Direction::Across, 23), 6),
            ((Direction::Down, 7), 11),
        ])
    }

    #[test]
    fn test_resolves_known_labels() {
        let refs = scan_references("19- and 23-Across");
        let resolved = resolve_references(&refs, &grid_lookup());
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].entry, Some(4));
        assert_eq!(resolved[1].entry, Some(6));
        assert_eq!(resolved[1].reference, refs[1]);
    }

    #[test]
    fn test_unknown_label_kept_unresolved() {
        let refs = scan_references("7 Across and 7 Down");
        let resolved = resolve_references(&refs, &grid_lookup());
        assert_eq!(resolved.len(), 2);
        assert!(!resolved[0].is_resolved());
        assert!(resolved[1].is_resolved());
    }

    #[test]
    fn test_btree_lookup() {
        let refs = scan_references("3 Down");
        let tree = BTreeMap::from([((Direction::Down, 3), 9)]);
        assert_eq!(resolve_references(&refs, &tree)[0].entry, Some(9));
    }

    #[test]
    fn test_serializes_flat() {
        let refs = scan_references("7 Down");
        let resolved = resolve_references(&refs, &grid_lookup());
        let json = serde_json::to_value(resolved[0]).unwrap();
        assert_eq!(json["direction"], "down");
        assert_eq!(json["label_number"], 7);
        assert_eq!(json["entry"], 11);
    }
}
