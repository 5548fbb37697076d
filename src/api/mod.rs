//! Transposition WASM API
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serialization and error conversion
//! - `core`: the exported `transposePitch` / `transposeKey` family

pub mod helpers;
pub mod core;

pub use self::core::*;
