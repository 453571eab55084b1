//! Offset unit handling
//!
//! Span offsets arrive either as Unicode scalar (char) indices or as UTF-16
//! code unit indices (what JavaScript strings use). Rust slices by byte, so
//! every layout call builds an `OffsetIndex` once and translates through it.

use crate::errors::LayoutError;
use serde::{Deserialize, Serialize};

/// Unit in which span and token offsets are expressed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    #[default]
    Char,
    Utf16,
}

/// Maps offsets in an `OffsetUnit` to byte positions of a `&str`
#[derive(Clone, Debug)]
pub struct OffsetIndex {
    /// `bytes[offset]` is the byte position of `offset`, or `None` when the
    /// offset lands inside a surrogate pair. Has `len + 1` entries.
    bytes: Vec<Option<usize>>,
}

impl OffsetIndex {
    pub fn new(text: &str, unit: OffsetUnit) -> Self {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        for (byte, ch) in text.char_indices() {
            bytes.push(Some(byte));
            if unit == OffsetUnit::Utf16 && ch.len_utf16() == 2 {
                bytes.push(None);
            }
        }
        bytes.push(Some(text.len()));
        Self { bytes }
    }

    /// Text length in offset units
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte position of `offset`
    pub fn byte(&self, offset: usize) -> Result<usize, LayoutError> {
        self.bytes
            .get(offset)
            .copied()
            .flatten()
            .ok_or(LayoutError::SplitCodePoint { offset })
    }

    /// Slice `text` between two offsets
    pub fn slice<'t>(&self, text: &'t str, begin: usize, end: usize) -> Result<&'t str, LayoutError> {
        Ok(&text[self.byte(begin)?..self.byte(end)?])
    }

    /// Length of `s` in this index's unit
    pub fn measure(s: &str, unit: OffsetUnit) -> usize {
        match unit {
            OffsetUnit::Char => s.chars().count(),
            OffsetUnit::Utf16 => s.encode_utf16().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_offsets() {
        let index = OffsetIndex::new("héllo", OffsetUnit::Char);
        assert_eq!(index.len(), 5);
        assert_eq!(index.byte(2).unwrap(), 3);
        assert_eq!(index.slice("héllo", 1, 3).unwrap(), "él");
    }

    #[test]
    fn test_utf16_offsets() {
        let text = "a😀b";
        let index = OffsetIndex::new(text, OffsetUnit::Utf16);
        assert_eq!(index.len(), 4);
        assert_eq!(index.slice(text, 1, 3).unwrap(), "😀");
        assert_eq!(index.byte(2), Err(LayoutError::SplitCodePoint { offset: 2 }));
        assert_eq!(OffsetIndex::measure(text, OffsetUnit::Utf16), 4);
        assert_eq!(OffsetIndex::measure(text, OffsetUnit::Char), 3);
    }

    #[test]
    fn test_empty_text() {
        let index = OffsetIndex::new("", OffsetUnit::Char);
        assert!(index.is_empty());
        assert_eq!(index.byte(0).unwrap(), 0);
        assert!(index.byte(1).is_err());
    }
}
