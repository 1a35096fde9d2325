//! cluescan: cross-reference and enumeration analysis for crossword clues.
//!
//! ```
//! use cluescan::core::{Direction, scan_enumeration, scan_references};
//!
//! let refs = scan_references("With 19- and 23-Across (4,3)");
//! assert_eq!(refs.len(), 2);
//! assert_eq!(refs[1].direction, Direction::Across);
//! assert_eq!(scan_enumeration("With 19- and 23-Across (4,3)"), Some("(4,3)"));
//! ```

pub mod config;
pub mod core;
pub mod render;

#[cfg(test)]
pub mod test_support;
