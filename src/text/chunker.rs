//! Chunker: splits text at every span boundary
//!
//! The resulting chunks exactly partition `[0, len)`; each chunk is further
//! split into display tokens (word runs, space runs, single newlines).

use crate::errors::LayoutError;
use crate::models::{Span, TextChunk};
use crate::utils::offsets::OffsetIndex;

/// Sorted, deduplicated set of `{0, len} ∪ {begin, end of every span}`
pub fn chunk_boundaries(spans: &[Span], len: usize) -> Vec<usize> {
    let mut boundaries = Vec::with_capacity(spans.len() * 2 + 2);
    boundaries.push(0);
    boundaries.push(len);
    for span in spans {
        boundaries.push(span.begin);
        boundaries.push(span.end);
    }
    boundaries.sort_unstable();
    boundaries.dedup();
    boundaries
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Word,
    Space,
}

/// Split a slice into display tokens
///
/// Each `\n` is its own token, spaces and everything else form maximal runs.
/// An empty slice yields a single empty placeholder token.
pub fn split_tokens(slice: &str) -> Vec<String> {
    if slice.is_empty() {
        return vec![String::new()];
    }

    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut run_kind: Option<RunKind> = None;

    for (idx, ch) in slice.char_indices() {
        let kind = match ch {
            '\n' => None,
            ' ' => Some(RunKind::Space),
            _ => Some(RunKind::Word),
        };

        if run_kind.is_some() && kind != run_kind {
            tokens.push(slice[run_start..idx].to_string());
            run_kind = None;
        }

        match kind {
            None => tokens.push("\n".to_string()),
            Some(kind) if run_kind.is_none() => {
                run_start = idx;
                run_kind = Some(kind);
            }
            Some(_) => {}
        }
    }

    if run_kind.is_some() {
        tokens.push(slice[run_start..].to_string());
    }

    tokens
}

/// Partition `text` into chunks aligned on every span boundary
///
/// Spans must already be validated against `index`.
pub fn chunk_text(spans: &[Span], text: &str, index: &OffsetIndex) -> Result<Vec<TextChunk>, LayoutError> {
    let boundaries = chunk_boundaries(spans, index.len());

    boundaries
        .windows(2)
        .map(|pair| {
            let (begin, end) = (pair[0], pair[1]);
            let slice = index.slice(text, begin, end)?;
            Ok(TextChunk::new(begin, end, split_tokens(slice)))
        })
        .collect()
}
