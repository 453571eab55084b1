//! Error types for span layout
//!
//! Any malformed input fails the whole call; there are no partial layouts.

use thiserror::Error;

/// Top-level layout error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Span ends before it begins
    #[error("Invalid span #{index}: begin {begin} > end {end}")]
    InvalidRange { index: usize, begin: usize, end: usize },

    /// Span reaches past the end of the text
    #[error("Span #{index} [{begin}, {end}) out of bounds (text length: {len})")]
    OutOfBounds {
        index: usize,
        begin: usize,
        end: usize,
        len: usize,
    },

    /// Span references a style missing from the style table
    #[error("Span #{index} references unknown style '{style}'")]
    UnknownStyle { index: usize, style: String },

    /// UTF-16 offset falls between the two halves of a surrogate pair
    #[error("Offset {offset} splits a UTF-16 surrogate pair")]
    SplitCodePoint { offset: usize },
}
