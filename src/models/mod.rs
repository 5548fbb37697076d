//! Value types consumed and produced by the transposition engine
//!
//! All of them are plain `Copy` values; the host builds them per call and
//! gets fresh ones back.

pub mod accidental;
pub mod key_signature;
pub mod letter;
pub mod pitch;

// Re-export commonly used types
pub use accidental::Accidental;
pub use key_signature::{KeyMode, KeySignature};
pub use letter::DiatonicLetter;
pub use pitch::Pitch;
