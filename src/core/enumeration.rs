//! # Enumeration scanning
//!
//! An enumeration is the parenthesized answer-length hint at the end of a
//! clue: `"(5)"`, `"(4,3)"`, `"(3-4)"`. It is returned verbatim, delimiters
//! included; splitting it into word lengths is left to the caller.

use log::trace;

/// The degenerate enumeration, accepted even though it has no digits.
pub const EMPTY_ENUMERATION: &str = "()";

/// Returns the trailing parenthesized group of `text`, if it is an enumeration.
///
/// The group must be the literal suffix of the trimmed text. Nested groups
/// are kept as written. The result is accepted when it contains an ASCII
/// digit anywhere or is exactly `"()"`.
pub fn scan_enumeration(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    let start = trailing_group_start(trimmed);
    let group = &trimmed[start..];

    let accepted = group.bytes().any(|b| b.is_ascii_digit()) || group == EMPTY_ENUMERATION;
    trace!("trailing group {:?} accepted={}", group, accepted);
    accepted.then_some(group)
}

/// Clue text with an accepted enumeration and surrounding whitespace removed.
///
/// Text without an enumeration is returned trimmed.
pub fn strip_enumeration(text: &str) -> &str {
    let trimmed = text.trim();
    match scan_enumeration(trimmed) {
        Some(group) => trimmed[..trimmed.len() - group.len()].trim_end(),
        None => trimmed,
    }
}

/// Byte index where the trailing balanced group begins, or `text.len()` when
/// the text doesn't end in one.
///
/// Walks backwards with a depth counter: `)` opens, `(` closes. A char is
/// part of the group while depth is positive, or when a `(` brings depth
/// back to exactly zero.
fn trailing_group_start(text: &str) -> usize {
    let mut depth: i32 = 0;
    let mut start = text.len();

    for (idx, ch) in text.char_indices().rev() {
        match ch {
            ')' => depth += 1,
            '(' => depth -= 1,
            _ => {}
        }
        if depth > 0 || (depth == 0 && ch == '(') {
            start = idx;
        } else {
            break;
        }
    }

    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_length() {
        assert_eq!(scan_enumeration("Capital of France (5)"), Some("(5)"));
    }

    #[test]
    fn test_multi_word() {
        assert_eq!(scan_enumeration("Two words (4,3)"), Some("(4,3)"));
        assert_eq!(scan_enumeration("Hyphenated (3-4)"), Some("(3-4)"));
    }

    #[test]
    fn test_no_trailing_group() {
        assert_eq!(scan_enumeration("Nothing here"), None);
        assert_eq!(scan_enumeration("Group (5) not at end"), None);
        assert_eq!(scan_enumeration(""), None);
        assert_eq!(scan_enumeration("   "), None);
    }

    #[test]
    fn test_empty_group_is_accepted() {
        assert_eq!(scan_enumeration("Empty group ()"), Some("()"));
        assert_eq!(scan_enumeration("()"), Some("()"));
    }

    #[test]
    fn test_group_without_digits_rejected() {
        assert_eq!(scan_enumeration("Trailing text (abc)"), None);
        assert_eq!(scan_enumeration("Spaced ( )"), None);
    }

    #[test]
    fn test_nested_groups_kept_verbatim() {
        assert_eq!(
            scan_enumeration("Odd one (a (very) odd 4)"),
            Some("(a (very) odd 4)")
        );
        assert_eq!(scan_enumeration("Deep (((2)))"), Some("(((2)))"));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(scan_enumeration("  Padded (6)  \n"), Some("(6)"));
    }

    #[test]
    fn test_unbalanced_parentheses() {
        // Missing opener: depth never returns to zero on a '('
        assert_eq!(scan_enumeration("Broken 5)"), Some("Broken 5)"));
        assert_eq!(scan_enumeration("Extra ((5)"), Some("(5)"));
        assert_eq!(scan_enumeration("Open (5"), None);
    }

    #[test]
    fn test_adjacent_groups_merge() {
        assert_eq!(scan_enumeration("Odd (a)(5)"), Some("(a)(5)"));
    }

    #[test]
    fn test_non_ascii_digits_do_not_count() {
        assert_eq!(scan_enumeration("Arabic (٥)"), None);
    }

    #[test]
    fn test_strip_enumeration() {
        assert_eq!(strip_enumeration("Capital of France (5)"), "Capital of France");
        assert_eq!(strip_enumeration("Nothing here  "), "Nothing here");
        assert_eq!(strip_enumeration("Trailing text (abc)"), "Trailing text (abc)");
        assert_eq!(strip_enumeration("(4,3)"), "");
    }

    #[test]
    fn test_idempotent() {
        let text = "Odd one (a (very) odd 4)";
        assert_eq!(scan_enumeration(text), scan_enumeration(text));
    }
}
