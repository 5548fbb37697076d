//! Music Transposition WASM Module
//!
//! Transposes pitches and key signatures by a signed number of halftones with
//! conventional enharmonic spelling, for notation renderers that relayout a
//! score after a global transpose.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod transposition;

// Re-export commonly used types
pub use config::{SpellingPreference, TransposeConfig};
pub use error::TransposeError;
pub use models::*;
pub use transposition::{
    transpose_key, transpose_key_from_original, transpose_pitch, transpose_pitch_with,
    transpose_score, HostPitch, ScoreEvent,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("logger already initialized");
    }

    log::info!("Music transposition WASM module initialized");
}
