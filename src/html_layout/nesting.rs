//! Nesting depth and z-index assignment
//!
//! Walks spans in processing order and instantiates each one on every chunk
//! it overlaps. The first chunk of a span decides its depth (first free slot
//! among annotations of the same shape family already on that chunk) and its
//! z-index (first free slot among all annotations). Underline depths are
//! then flipped to negative numbers once the cluster of touching spans they
//! belong to is closed.

use crate::errors::LayoutError;
use crate::models::{ShapeCategory, Span, Style, StyleTable, TextChunk, TokenAnnotation};
use std::collections::BTreeSet;

/// Smallest non-negative slot not present in `occupied`
pub fn first_free_slot(occupied: impl IntoIterator<Item = usize>) -> usize {
    let mut taken: Vec<bool> = Vec::new();
    for slot in occupied {
        if slot >= taken.len() {
            taken.resize(slot + 1, false);
        }
        taken[slot] = true;
    }
    taken.iter().position(|t| !t).unwrap_or(taken.len())
}

/// Open run of mutually overlapping/touching spans
#[derive(Debug, Default)]
struct ClusterState {
    /// Chunk indices touched by the run
    members: BTreeSet<usize>,
    /// Deepest underline depth seen in the run
    depth: i32,
    /// Furthest `end` of any span in the run
    right_most: usize,
}

/// Assigns depth/z-index to every span instance on every chunk
pub struct NestingAssigner<'a> {
    styles: &'a StyleTable,
    cluster: ClusterState,
}

impl<'a> NestingAssigner<'a> {
    pub fn new(styles: &'a StyleTable) -> Self {
        Self {
            styles,
            cluster: ClusterState::default(),
        }
    }

    fn style(&self, name: &str, index: usize) -> Result<&'a Style, LayoutError> {
        self.styles.get(name).ok_or_else(|| LayoutError::UnknownStyle {
            index,
            style: name.to_string(),
        })
    }

    /// Process all spans in order, then close the last cluster
    pub fn assign(mut self, chunks: &mut [TextChunk], spans: &[Span]) -> Result<(), LayoutError> {
        for (index, span) in spans.iter().enumerate() {
            self.place_span(chunks, span, index)?;
        }
        self.flush(chunks);
        Ok(())
    }

    fn place_span(&mut self, chunks: &mut [TextChunk], span: &Span, index: usize) -> Result<(), LayoutError> {
        let style = self.style(&span.style, index)?;

        if span.begin >= self.cluster.right_most {
            self.flush(chunks);
            self.cluster.right_most = span.end;
        } else {
            self.cluster.right_most = self.cluster.right_most.max(span.end);
        }

        let nests = !span.mouse_selected && style.auto_nesting_layout;
        let category = style.shape.category();
        let mut placement: Option<(Option<i32>, Option<u32>)> = None;

        for (chunk_idx, chunk) in chunks.iter_mut().enumerate() {
            if !span.overlaps(chunk.begin, chunk.end) {
                continue;
            }

            self.cluster.members.insert(chunk_idx);
            if chunk.begin == span.begin {
                chunk.label = span.label.clone();
            }

            let (depth, z_index) = match placement {
                Some(placed) => placed,
                None => {
                    let placed = if nests {
                        let (depth, z_index) = self.free_slots(chunk, category);
                        (Some(depth), Some(z_index))
                    } else {
                        (None, None)
                    };
                    placement = Some(placed);
                    placed
                }
            };

            chunk
                .token_annotations
                .push_front(TokenAnnotation::for_chunk(span, chunk.begin, chunk.end, depth, z_index));
        }

        if category == ShapeCategory::Underline {
            if let Some((Some(depth), _)) = placement {
                self.cluster.depth = self.cluster.depth.max(depth);
            }
        }

        Ok(())
    }

    /// First free depth for `category` and first free z-index on `chunk`
    fn free_slots(&self, chunk: &TextChunk, category: ShapeCategory) -> (i32, u32) {
        let mut depths = Vec::new();
        let mut z_indices = Vec::new();

        for annotation in chunk.token_annotations.iter().filter(|a| !a.mouse_selected) {
            if let Some(depth) = annotation.depth {
                if self.category_of(&annotation.style) == Some(category) && depth >= 0 {
                    depths.push(depth as usize);
                }
            }
            if let Some(z_index) = annotation.z_index {
                z_indices.push(z_index as usize);
            }
        }

        (first_free_slot(depths) as i32, first_free_slot(z_indices) as u32)
    }

    /// Flip underline depths of the open cluster below zero and reset it
    fn flush(&mut self, chunks: &mut [TextChunk]) {
        let members = std::mem::take(&mut self.cluster.members);
        let cluster_depth = std::mem::take(&mut self.cluster.depth);

        for chunk_idx in members {
            for annotation in chunks[chunk_idx].token_annotations.iter_mut() {
                if self.category_of(&annotation.style) != Some(ShapeCategory::Underline) {
                    continue;
                }
                if let Some(depth) = annotation.depth.as_mut() {
                    *depth = *depth - cluster_depth - 1;
                }
            }
        }
    }

    /// Every annotation comes from a span whose style was already resolved
    fn category_of(&self, style: &str) -> Option<ShapeCategory> {
        self.styles.get(style).map(|s| s.shape.category())
    }
}

/// Annotate `chunks` in place with every span of `spans`
///
/// `spans` must already be in processing order.
pub fn assign_nesting(chunks: &mut [TextChunk], spans: &[Span], styles: &StyleTable) -> Result<(), LayoutError> {
    NestingAssigner::new(styles).assign(chunks, spans)
}
