//! Layer 0: Text chunking
//!
//! Splits the raw text on span boundaries and into display tokens. Nothing
//! here knows about depths or styles.

pub mod chunker;

pub use chunker::{chunk_boundaries, chunk_text, split_tokens};
