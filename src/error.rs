//! Error types for transposition
//!
//! Every variant is a caller-input problem: the engine is deterministic, so
//! nothing here is retried or recovered from.

use thiserror::Error;

use crate::models::DiatonicLetter;

/// Top-level transposition error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransposeError {
    /// Key signature outside -7..=7 sharps/flats
    #[error("unsupported key signature: {0} (expected -7..=7 sharps/flats)")]
    UnsupportedKeySignature(i32),

    /// Spelling needs an accidental beyond double-flat/double-sharp
    #[error("unrepresentable accidental: {letter} would need {halftones:+} halftones")]
    UnrepresentableAccidental {
        letter: DiatonicLetter,
        halftones: i32,
    },

    /// Result would land outside the octaves an `i32` can hold
    #[error("transposed octave {0} is out of range")]
    OctaveOutOfRange(i64),

    /// Text pitch could not be parsed (e.g. "H4", "C#")
    #[error("invalid pitch: '{0}'")]
    InvalidPitch(String),

    #[error("invalid diatonic letter: '{0}'")]
    InvalidLetter(String),
}

pub type Result<T> = std::result::Result<T, TransposeError>;
