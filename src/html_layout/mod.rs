//! HTML Layout Engine
//!
//! This module computes span layout for HTML/DOM rendering, generating a DisplayList
//! with every token and its annotation stack, ready for JavaScript to paint.

pub mod display_list;
pub mod document;
pub mod line;
pub mod nesting;

pub use display_list::DisplayList;
pub use document::{compute_layout, sort_spans, span_order, BoundsPolicy, LayoutConfig, LayoutEngine};
pub use line::{split_lines, LineSplitter};
pub use nesting::{assign_nesting, first_free_slot, NestingAssigner};
