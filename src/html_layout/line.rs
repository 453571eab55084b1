//! Line splitting
//!
//! Flattens annotated chunks into rows of tokens. Newline tokens end a row
//! and are never emitted themselves.

use crate::models::{Line, TextChunk, TokenAnnotation, TokenData};
use crate::utils::offsets::{OffsetIndex, OffsetUnit};
use std::rc::Rc;

/// Computes the line stream for a chunk list
pub struct LineSplitter {
    unit: OffsetUnit,
}

impl LineSplitter {
    pub fn new(unit: OffsetUnit) -> Self {
        Self { unit }
    }

    /// Split chunks into lines
    ///
    /// A trailing newline produces a final empty line.
    pub fn split(&self, chunks: Vec<TextChunk>) -> Vec<Line> {
        let mut lines = Vec::new();
        let mut line: Line = Vec::new();
        let mut offset = chunks.first().map_or(0, |c| c.begin);
        let mut ended_on_newline = false;

        for chunk in chunks {
            let annotations: Rc<[TokenAnnotation]> = Vec::from(chunk.token_annotations).into();
            let last_idx = chunk.tokens.len().saturating_sub(1);

            for (token_idx, token) in chunk.tokens.into_iter().enumerate() {
                let len = OffsetIndex::measure(&token, self.unit);

                if token == "\n" {
                    lines.push(std::mem::take(&mut line));
                    offset += len;
                    ended_on_newline = true;
                    continue;
                }

                let begin = offset;
                offset += len;
                ended_on_newline = false;

                line.push(TokenData {
                    text: token,
                    begin,
                    end: offset,
                    key: format!("{}-{}", begin, offset),
                    is_first_token_of_chunk: token_idx == 0,
                    is_last_token_of_chunk: token_idx == last_idx,
                    token_annotations: Rc::clone(&annotations),
                });
            }
        }

        if !line.is_empty() || ended_on_newline {
            lines.push(line);
        }

        lines
    }
}

/// Split chunks into lines with offsets in `unit`
pub fn split_lines(chunks: Vec<TextChunk>, unit: OffsetUnit) -> Vec<Line> {
    LineSplitter::new(unit).split(chunks)
}
