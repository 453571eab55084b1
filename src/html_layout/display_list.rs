//! Display List for Span Layout
//!
//! This module defines the output structure returned from the layout engine to JavaScript.
//! The DisplayList contains every token with its pre-computed annotation stack, so the
//! renderer only has to paint boxes and underlines at the given depths.

use crate::models::{Line, TokenData};
use serde::{Deserialize, Serialize};

/// Top-level display list containing all rendering information
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DisplayList {
    /// Rows of tokens, split on newlines
    pub lines: Vec<Line>,

    /// Span ids in processing order (parallel to the sorted span list)
    pub ids: Vec<Option<String>>,
}

impl DisplayList {
    /// Iterate over every token of every line
    pub fn tokens(&self) -> impl Iterator<Item = &TokenData> {
        self.lines.iter().flatten()
    }

    /// Reassemble the text without newlines
    pub fn visible_text(&self) -> String {
        self.tokens().map(TokenData::as_str).collect()
    }
}
