//! Span Layout WASM Module
//!
//! Lays out free text overlaid with possibly-overlapping labeled spans as
//! stacked, non-colliding boxes and underlines. The text is chunked on span
//! boundaries, every span instance gets a nesting depth and z-index, and the
//! chunks are split into lines of tokens for a JavaScript renderer.

pub mod api;
pub mod errors;
pub mod html_layout;
pub mod models;
pub mod text;
pub mod utils;

// Re-export commonly used types
pub use errors::LayoutError;
pub use html_layout::{compute_layout, BoundsPolicy, DisplayList, LayoutConfig, LayoutEngine};
pub use models::*;
pub use utils::offsets::OffsetUnit;

#[cfg(feature = "console")]
use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[cfg(feature = "console")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        crate::wasm_info!("logger already initialized");
    }

    log::info!("Span layout WASM module initialized");
}
