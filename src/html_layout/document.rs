//! Document-level layout computation
//!
//! This module contains the main entry point for layout calculations,
//! taking spans, text and styles and producing a DisplayList.

use super::display_list::DisplayList;
use super::line::split_lines;
use super::nesting::assign_nesting;
use crate::errors::LayoutError;
use crate::models::{Span, StyleTable, TextChunk};
use crate::text::chunker::chunk_text;
use crate::utils::offsets::{OffsetIndex, OffsetUnit};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// What to do with span offsets past the end of the text
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    /// Fail the whole call
    #[default]
    Reject,
    /// Clip offsets into `[0, len]`
    Clamp,
}

/// Configuration for layout calculations
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Unit of span offsets and of emitted token offsets
    pub offset_unit: OffsetUnit,

    /// Handling of out-of-range span offsets
    pub bounds_policy: BoundsPolicy,
}

/// Processing order: mouse-selected spans first, then by `begin`,
/// outer (longer) spans before inner ones at the same start.
pub fn span_order(a: &Span, b: &Span) -> Ordering {
    b.mouse_selected
        .cmp(&a.mouse_selected)
        .then(a.begin.cmp(&b.begin))
        .then(b.end.cmp(&a.end))
}

/// Stable sort of `spans` into processing order
pub fn sort_spans(spans: &mut [Span]) {
    spans.sort_by(span_order);
}

/// Main layout engine for computing display lists
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create a new layout engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute complete layout for a text and its spans
    ///
    /// This is the main entry point: spans are validated and sorted, the text is
    /// chunked on span boundaries, every span gets a depth and z-index, and the
    /// chunks are split into lines of tokens.
    ///
    /// # Arguments
    /// * `spans` - Annotations over `text`, in any order
    /// * `text` - The text being annotated
    /// * `styles` - Style table; must contain every style named by `spans`
    ///
    /// # Returns
    /// DisplayList with the token lines and the span ids in processing order
    pub fn compute_layout(&self, spans: &[Span], text: &str, styles: &StyleTable) -> Result<DisplayList, LayoutError> {
        let (chunks, ordered) = self.layout_chunks(spans, text, styles)?;
        let ids = ordered.into_iter().map(|span| span.id).collect();
        let lines = split_lines(chunks, self.config.offset_unit);

        log::debug!("span layout: {} spans, {} lines", spans.len(), lines.len());

        Ok(DisplayList { lines, ids })
    }

    /// Compute the annotated chunk list, including per-chunk labels
    pub fn compute_chunks(&self, spans: &[Span], text: &str, styles: &StyleTable) -> Result<Vec<TextChunk>, LayoutError> {
        self.layout_chunks(spans, text, styles).map(|(chunks, _)| chunks)
    }

    fn layout_chunks(
        &self,
        spans: &[Span],
        text: &str,
        styles: &StyleTable,
    ) -> Result<(Vec<TextChunk>, Vec<Span>), LayoutError> {
        let index = OffsetIndex::new(text, self.config.offset_unit);
        let mut ordered = self.prepare_spans(spans, text, &index, styles)?;
        sort_spans(&mut ordered);

        let mut chunks = chunk_text(&ordered, text, &index)?;
        assign_nesting(&mut chunks, &ordered, styles)?;

        log::debug!("span layout: {} chunks over {} offsets", chunks.len(), index.len());

        Ok((chunks, ordered))
    }

    /// Validate, clip and copy the input spans, attaching their text
    fn prepare_spans(
        &self,
        spans: &[Span],
        text: &str,
        index: &OffsetIndex,
        styles: &StyleTable,
    ) -> Result<Vec<Span>, LayoutError> {
        let len = index.len();

        spans
            .iter()
            .enumerate()
            .map(|(i, span)| {
                if span.begin > span.end {
                    return Err(LayoutError::InvalidRange {
                        index: i,
                        begin: span.begin,
                        end: span.end,
                    });
                }
                if !styles.contains_key(&span.style) {
                    return Err(LayoutError::UnknownStyle {
                        index: i,
                        style: span.style.clone(),
                    });
                }

                let mut span = span.clone();
                if span.end > len {
                    match self.config.bounds_policy {
                        BoundsPolicy::Reject => {
                            return Err(LayoutError::OutOfBounds {
                                index: i,
                                begin: span.begin,
                                end: span.end,
                                len,
                            });
                        }
                        BoundsPolicy::Clamp => {
                            log::warn!("span #{} [{}, {}) clamped to text length {}", i, span.begin, span.end, len);
                            span.begin = span.begin.min(len);
                            span.end = len;
                        }
                    }
                }

                span.text = Some(index.slice(text, span.begin, span.end)?.to_string());
                Ok(span)
            })
            .collect()
    }
}

/// Lay out `spans` over `text` with the default configuration
pub fn compute_layout(spans: &[Span], text: &str, styles: &StyleTable) -> Result<DisplayList, LayoutError> {
    LayoutEngine::new().compute_layout(spans, text, styles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_order() {
        let mut spans = vec![
            Span::new(3, 4, "s").with_id("late"),
            Span::new(0, 2, "s").with_id("short"),
            Span::new(0, 5, "s").with_id("long"),
            Span::new(4, 6, "s").with_id("mouse").mouse_selected(),
        ];
        sort_spans(&mut spans);

        let ids: Vec<_> = spans.iter().map(|s| s.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["mouse", "long", "short", "late"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_ranges() {
        let mut spans = vec![Span::new(1, 2, "s").with_id("first"), Span::new(1, 2, "s").with_id("second")];
        sort_spans(&mut spans);
        assert_eq!(spans[0].id.as_deref(), Some("first"));
    }

    #[test]
    fn test_config_from_json() {
        let config: LayoutConfig = serde_json::from_str(r#"{"offsetUnit":"utf16"}"#).unwrap();
        assert_eq!(config.offset_unit, OffsetUnit::Utf16);
        assert_eq!(config.bounds_policy, BoundsPolicy::Reject);

        let engine = LayoutEngine::with_config(config.clone());
        assert_eq!(engine.config(), &config);
        assert_eq!(LayoutEngine::new().config().offset_unit, OffsetUnit::Char);
    }
}
