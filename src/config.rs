//! Transposition options supplied by the host

use serde::{Deserialize, Serialize};

/// How a chromatic (non-diatonic) target pitch class is spelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpellingPreference {
    /// Sharp or sharp-side key: raised lower letter. Flat origin or flat-side key: lowered upper letter.
    KeyAware,
    /// Always the raised lower letter (C#, not Db)
    PreferSharps,
    /// Always the lowered upper letter (Db, not C#)
    PreferFlats,
}

impl Default for SpellingPreference {
    fn default() -> Self {
        SpellingPreference::KeyAware
    }
}

/// Transposition configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransposeConfig {
    /// Enharmonic spelling rule (default: KeyAware)
    pub spelling: SpellingPreference,

    /// Return the input pitch untouched for a shift of 0 (default: true)
    /// Without this, B#4 +0 is respelled C5.
    pub zero_shift_identity: bool,
}

impl Default for TransposeConfig {
    fn default() -> Self {
        Self {
            spelling: SpellingPreference::KeyAware,
            zero_shift_identity: true,
        }
    }
}
