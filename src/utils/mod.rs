//! Utility modules for the span layout engine

pub mod offsets;

// Re-export commonly used types
pub use offsets::*;
