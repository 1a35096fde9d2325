//! Both scanners over one clue, bundled for callers that want everything.

use serde::Serialize;

use super::enumeration::scan_enumeration;
use super::references::{ClueReference, scan_references};
use super::resolve::{EntryLookup, ResolvedReference, resolve_references};
use super::segments::{ClueSegment, segment_clue};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClueAnalysis<'a> {
    pub clue: &'a str,
    pub references: Vec<ClueReference>,
    pub enumeration: Option<&'a str>,
}

impl<'a> ClueAnalysis<'a> {
    pub fn of(clue: &'a str) -> Self {
        Self {
            clue,
            references: scan_references(clue),
            enumeration: scan_enumeration(clue),
        }
    }

    pub fn segments(&self) -> Vec<ClueSegment<'a>> {
        segment_clue(self.clue, &self.references)
    }

    pub fn resolve<L>(&self, lookup: &L) -> Vec<ResolvedReference>
    where
        L: EntryLookup + ?Sized,
    {
        resolve_references(&self.references, lookup)
    }
}
