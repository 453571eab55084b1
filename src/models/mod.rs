//! Models module for the span layout engine
//!
//! Input spans and styles, the chunks they partition the text into, and the
//! tokens handed to the renderer.

pub mod chunk;
pub mod serde_helpers;
pub mod span;
pub mod token;

// Re-export commonly used types
pub use chunk::{TextChunk, TokenAnnotation};
pub use span::{LabelPosition, Shape, ShapeCategory, Span, Style, StyleTable};
pub use token::{Line, TokenData};
