//! # Clue Analysis Core
//!
//! Pure functions over clue text. No I/O, no shared mutable state; every
//! call owns its own match cursor, so scanning is safe from any thread.
//!
//! ```text
//!                 clue text
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//!  ┌──────────────┐       ┌──────────────┐
//!  │  references  │       │ enumeration  │
//!  │ "19-Across"  │       │   "(4,3)"    │
//!  └──────┬───────┘       └──────────────┘
//!         │
//!   ┌─────┴──────┐
//!   ▼            ▼
//! resolve    segments
//! (links)    (highlighting)
//! ```
//!
//! ## Modules
//!
//! - [`references`]: `scan_references` and `ClueReference`
//! - [`enumeration`]: `scan_enumeration` and `strip_enumeration`
//! - [`direction`]: `Direction` and the accepted direction words
//! - [`resolve`]: label → grid entry resolution through `EntryLookup`
//! - [`segments`]: splitting clue text for renderers
//! - [`offsets`]: byte/char offset conversion

pub mod analysis;
pub mod direction;
pub mod enumeration;
pub mod offsets;
pub mod references;
pub mod resolve;
pub mod segments;

pub use analysis::ClueAnalysis;
pub use direction::Direction;
pub use enumeration::{scan_enumeration, strip_enumeration};
pub use references::{ClueReference, scan_references};
pub use resolve::{EntryLookup, ResolvedReference, resolve_references};
pub use segments::{ClueSegment, segment_clue};
