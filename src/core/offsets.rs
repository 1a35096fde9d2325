//! Byte ↔ character offset conversion.
//!
//! Regex matches come back as UTF-8 byte offsets, but references report
//! character offsets so editors can highlight without knowing the encoding.

/// Converts byte offsets to char offsets for one text.
///
/// Queries are expected in non-decreasing order, which makes a whole scan
/// linear in the text length. A query behind the cursor restarts from zero.
pub struct OffsetCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> OffsetCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// Char offset of `byte`, which must lie on a char boundary.
    pub fn char_offset(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// Converts char offsets back to byte offsets, walking forward only.
///
/// Returns `None` for an offset behind the last answer or past the end of
/// the text, so callers can skip references that don't fit.
pub struct ByteCursor<'a> {
    chars: std::str::Chars<'a>,
    char_pos: usize,
    byte_pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            char_pos: 0,
            byte_pos: 0,
        }
    }

    pub fn byte_offset(&mut self, char_offset: usize) -> Option<usize> {
        if char_offset < self.char_pos {
            return None;
        }
        while self.char_pos < char_offset {
            let ch = self.chars.next()?;
            self.byte_pos += ch.len_utf8();
            self.char_pos += 1;
        }
        Some(self.byte_pos)
    }
}

/// Byte offset of the char at `char_offset`, clamped to `text.len()`.
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Length of `text` in chars, the unit every reported offset uses.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_are_identity() {
        let mut cursor = OffsetCursor::new("7 Down");
        assert_eq!(cursor.char_offset(0), 0);
        assert_eq!(cursor.char_offset(2), 2);
        assert_eq!(cursor.char_offset(6), 6);
    }

    #[test]
    fn test_multibyte_prefix() {
        // "é" is two bytes, "😊" is four
        let text = "é😊 7 Down";
        let mut cursor = OffsetCursor::new(text);
        let byte = text.find('7').unwrap();
        assert_eq!(byte, 7);
        assert_eq!(cursor.char_offset(byte), 3);
        assert_eq!(cursor.char_offset(text.len()), char_len(text));
    }

    #[test]
    fn test_backwards_query_restarts() {
        let text = "ééé";
        let mut cursor = OffsetCursor::new(text);
        assert_eq!(cursor.char_offset(6), 3);
        assert_eq!(cursor.char_offset(2), 1);
    }

    #[test]
    fn test_byte_cursor_walks_forward() {
        let text = "é😊x";
        let mut cursor = ByteCursor::new(text);
        assert_eq!(cursor.byte_offset(0), Some(0));
        assert_eq!(cursor.byte_offset(2), Some(6));
        assert_eq!(cursor.byte_offset(2), Some(6));
        assert_eq!(cursor.byte_offset(1), None);
        assert_eq!(cursor.byte_offset(3), Some(7));
        assert_eq!(cursor.byte_offset(4), None);
    }

    #[test]
    fn test_char_to_byte() {
        let text = "é😊x";
        assert_eq!(char_to_byte(text, 0), 0);
        assert_eq!(char_to_byte(text, 1), 2);
        assert_eq!(char_to_byte(text, 2), 6);
        assert_eq!(char_to_byte(text, 3), 7);
        assert_eq!(char_to_byte(text, 99), 7);
    }
}
