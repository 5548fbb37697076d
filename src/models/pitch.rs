//! Spelled pitch: diatonic letter, accidental and octave
//!
//! Two pitches can sound the same and still differ (C#4 vs Db4); equality
//! here is equality of spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TransposeError;
use crate::models::{Accidental, DiatonicLetter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pitch {
    pub letter: DiatonicLetter,
    pub octave: i32,
    #[serde(default)]
    pub accidental: Accidental,
}

impl Pitch {
    pub fn new(letter: DiatonicLetter, octave: i32, accidental: Accidental) -> Self {
        Self { letter, octave, accidental }
    }

    pub fn natural(letter: DiatonicLetter, octave: i32) -> Self {
        Self::new(letter, octave, Accidental::Natural)
    }

    /// Pitch class 0-11, ignoring octave
    pub fn pitch_class(&self) -> i32 {
        (self.letter.natural_value() + self.accidental.halftones()).rem_euclid(12)
    }

    /// Absolute halftone: pitch class + 12 * octave, with B#4 == C5 and Cb4 == B3
    ///
    /// Widened to i64 so extreme octaves cannot overflow.
    pub fn halftone(&self) -> i64 {
        (self.letter.natural_value() + self.accidental.halftones()) as i64 + 12 * self.octave as i64
    }

    /// Same sounding pitch, regardless of spelling
    pub fn is_enharmonic_with(&self, other: &Pitch) -> bool {
        self.halftone() == other.halftone()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.letter, self.accidental.symbol(), self.octave)
    }
}

impl FromStr for Pitch {
    type Err = TransposeError;

    /// Parses "C4", "c#4", "Bb3", "F##5", "Ebb-1"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TransposeError::InvalidPitch(s.to_string());

        let trimmed = s.trim();
        let mut chars = trimmed.char_indices();
        let (_, first) = chars.next().ok_or_else(invalid)?;
        let letter = DiatonicLetter::from_char(first).ok_or_else(invalid)?;

        let rest = &trimmed[first.len_utf8()..];
        let octave_start = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() || *c == '-')
            .map(|(i, _)| i)
            .ok_or_else(invalid)?;

        let accidental = Accidental::from_symbol(&rest[..octave_start]).ok_or_else(invalid)?;
        let octave = rest[octave_start..].parse::<i32>().map_err(|_| invalid())?;

        Ok(Pitch::new(letter, octave, accidental))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_naturals_and_accidentals() {
        assert_eq!("C4".parse::<Pitch>().unwrap(), Pitch::natural(DiatonicLetter::C, 4));
        assert_eq!(
            "c#4".parse::<Pitch>().unwrap(),
            Pitch::new(DiatonicLetter::C, 4, Accidental::Sharp)
        );
        assert_eq!(
            "Bb3".parse::<Pitch>().unwrap(),
            Pitch::new(DiatonicLetter::B, 3, Accidental::Flat)
        );
        assert_eq!(
            "F##5".parse::<Pitch>().unwrap(),
            Pitch::new(DiatonicLetter::F, 5, Accidental::DoubleSharp)
        );
        assert_eq!(
            "Ebb-1".parse::<Pitch>().unwrap(),
            Pitch::new(DiatonicLetter::E, -1, Accidental::DoubleFlat)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<Pitch>().is_err());
        assert!("H4".parse::<Pitch>().is_err());
        assert!("C#".parse::<Pitch>().is_err());
        assert!("C###4".parse::<Pitch>().is_err());
        assert!("C4x".parse::<Pitch>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for text in ["C4", "C#4", "Db4", "F##3", "Bbb2", "G-1"] {
            let pitch: Pitch = text.parse().unwrap();
            assert_eq!(pitch.to_string(), text);
        }
    }

    #[test]
    fn test_halftone_crosses_octave_for_b_sharp_and_c_flat() {
        let b_sharp: Pitch = "B#4".parse().unwrap();
        let c5: Pitch = "C5".parse().unwrap();
        assert!(b_sharp.is_enharmonic_with(&c5));
        assert_ne!(b_sharp, c5);

        let c_flat: Pitch = "Cb4".parse().unwrap();
        assert_eq!(c_flat.halftone(), "B3".parse::<Pitch>().unwrap().halftone());
        assert_eq!(c_flat.pitch_class(), 11);
    }

    #[test]
    fn test_halftone_at_octave_extremes() {
        let top = Pitch::natural(DiatonicLetter::B, i32::MAX);
        assert_eq!(top.halftone(), 11 + 12 * i32::MAX as i64);
        let bottom = Pitch::new(DiatonicLetter::C, i32::MIN, Accidental::DoubleFlat);
        assert_eq!(bottom.halftone(), -2 + 12 * i32::MIN as i64);
    }

    #[test]
    fn test_serde_shape() {
        let pitch = Pitch::new(DiatonicLetter::E, 4, Accidental::Flat);
        let json = serde_json::to_string(&pitch).unwrap();
        assert_eq!(json, r#"{"letter":"E","octave":4,"accidental":-1}"#);

        let parsed: Pitch = serde_json::from_str(r#"{"letter":"G","octave":3}"#).unwrap();
        assert_eq!(parsed, Pitch::natural(DiatonicLetter::G, 3));
    }
}
