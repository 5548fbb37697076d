/// Key signature as a position on the circle of fifths
///
/// `fifths` counts sharps (positive) or flats (negative), -7..=7.
/// `original_fifths` remembers what the score said before any transposition,
/// and `applied_offset` records the halftones last applied, for display only.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TransposeError};

pub const MIN_FIFTHS: i32 = -7;
pub const MAX_FIFTHS: i32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMode {
    Major,
    Minor,
}

impl Default for KeyMode {
    fn default() -> Self {
        KeyMode::Major
    }
}

impl KeyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyMode::Major => "major",
            KeyMode::Minor => "minor",
        }
    }
}

/// Major tonics indexed by fifths + 7
const MAJOR_TONICS: [&str; 15] = [
    "Cb", "Gb", "Db", "Ab", "Eb", "Bb", "F", "C", "G", "D", "A", "E", "B", "F#", "C#",
];

/// Minor tonics indexed by fifths + 7
const MINOR_TONICS: [&str; 15] = [
    "Ab", "Eb", "Bb", "F", "C", "G", "D", "A", "E", "B", "F#", "C#", "G#", "D#", "A#",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeySignature {
    pub fifths: i32,
    #[serde(default)]
    pub mode: KeyMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_fifths: Option<i32>,
    #[serde(default)]
    pub applied_offset: i32,
}

impl KeySignature {
    /// Major key signature; rejects anything outside -7..=7
    pub fn new(fifths: i32) -> Result<Self> {
        Self::with_mode(fifths, KeyMode::Major)
    }

    pub fn with_mode(fifths: i32, mode: KeyMode) -> Result<Self> {
        let fifths = check_fifths(fifths)?;
        Ok(Self {
            fifths,
            mode,
            original_fifths: None,
            applied_offset: 0,
        })
    }

    /// Signature as written in the score, before any transposition
    pub fn original(&self) -> i32 {
        self.original_fifths.unwrap_or(self.fifths)
    }

    /// Sharp-side keys (including C major / A minor) spell chromatic notes with sharps
    pub fn is_sharp_side(&self) -> bool {
        self.fifths >= 0
    }

    /// Tonic name such as "Eb" or "C#"
    pub fn tonic_name(&self) -> Result<&'static str> {
        let index = (check_fifths(self.fifths)? - MIN_FIFTHS) as usize;
        Ok(match self.mode {
            KeyMode::Major => MAJOR_TONICS[index],
            KeyMode::Minor => MINOR_TONICS[index],
        })
    }
}

impl Default for KeySignature {
    fn default() -> Self {
        Self {
            fifths: 0,
            mode: KeyMode::Major,
            original_fifths: None,
            applied_offset: 0,
        }
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tonic_name() {
            Ok(tonic) => write!(f, "{} {}", tonic, self.mode.as_str()),
            Err(_) => write!(f, "<{} fifths>", self.fifths),
        }
    }
}

pub(crate) fn check_fifths(fifths: i32) -> Result<i32> {
    if (MIN_FIFTHS..=MAX_FIFTHS).contains(&fifths) {
        Ok(fifths)
    } else {
        Err(TransposeError::UnsupportedKeySignature(fifths))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(KeySignature::new(7).is_ok());
        assert!(KeySignature::new(-7).is_ok());
        assert_eq!(KeySignature::new(8), Err(TransposeError::UnsupportedKeySignature(8)));
        assert_eq!(KeySignature::new(-9), Err(TransposeError::UnsupportedKeySignature(-9)));
    }

    #[test]
    fn test_tonic_names() {
        assert_eq!(KeySignature::new(0).unwrap().tonic_name().unwrap(), "C");
        assert_eq!(KeySignature::new(-3).unwrap().tonic_name().unwrap(), "Eb");
        assert_eq!(KeySignature::new(7).unwrap().tonic_name().unwrap(), "C#");
        let minor = KeySignature::with_mode(-3, KeyMode::Minor).unwrap();
        assert_eq!(minor.tonic_name().unwrap(), "C");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", KeySignature::new(1).unwrap()), "G major");
        assert_eq!(format!("{}", KeySignature::with_mode(0, KeyMode::Minor).unwrap()), "A minor");
        let bogus = KeySignature { fifths: 12, ..KeySignature::default() };
        assert_eq!(format!("{}", bogus), "<12 fifths>");
    }

    #[test]
    fn test_original_defaults_to_current() {
        let key = KeySignature::new(2).unwrap();
        assert_eq!(key.original(), 2);
        let transposed = KeySignature { fifths: -3, original_fifths: Some(2), ..key };
        assert_eq!(transposed.original(), 2);
    }

    #[test]
    fn test_deserialize_minimal() {
        let key: KeySignature = serde_json::from_str(r#"{"fifths":-2}"#).unwrap();
        assert_eq!(key, KeySignature::new(-2).unwrap());

        let key: KeySignature =
            serde_json::from_str(r#"{"fifths":3,"mode":"minor","appliedOffset":5}"#).unwrap();
        assert_eq!(key.mode, KeyMode::Minor);
        assert_eq!(key.applied_offset, 5);
    }

    #[test]
    fn test_out_of_range_fifths_deserialize_then_reject() {
        // Range is checked on use, so the caller sees the key-signature error
        // rather than a serde overflow
        let key: KeySignature = serde_json::from_str(r#"{"fifths":300}"#).unwrap();
        assert_eq!(key.fifths, 300);
        assert_eq!(key.tonic_name(), Err(TransposeError::UnsupportedKeySignature(300)));

        let key: KeySignature = serde_json::from_str(r#"{"fifths":-40000}"#).unwrap();
        assert_eq!(key.tonic_name(), Err(TransposeError::UnsupportedKeySignature(-40000)));
    }
}
