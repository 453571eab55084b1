//! Span Layout WASM API
//!
//! This module provides the JavaScript-facing API for the layout engine.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and console logging
//! - `core`: Layout entry points (`computeSpanLayout`, `chunkText`, `computeSpanLayoutJson`)

pub mod helpers;
pub mod core;

pub use self::core::*;
