/// The seven diatonic letters and their natural pitch classes
///
/// Letters are ordered by natural pitch class (C=0 .. B=11), which is also
/// the order the transposition tables scan them in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TransposeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiatonicLetter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl DiatonicLetter {
    /// Natural pitch class (halftone 0-11)
    pub const fn natural_value(self) -> i32 {
        match self {
            DiatonicLetter::C => 0,
            DiatonicLetter::D => 2,
            DiatonicLetter::E => 4,
            DiatonicLetter::F => 5,
            DiatonicLetter::G => 7,
            DiatonicLetter::A => 9,
            DiatonicLetter::B => 11,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiatonicLetter::C => "C",
            DiatonicLetter::D => "D",
            DiatonicLetter::E => "E",
            DiatonicLetter::F => "F",
            DiatonicLetter::G => "G",
            DiatonicLetter::A => "A",
            DiatonicLetter::B => "B",
        }
    }

    pub fn from_char(c: char) -> Option<DiatonicLetter> {
        match c.to_ascii_uppercase() {
            'C' => Some(DiatonicLetter::C),
            'D' => Some(DiatonicLetter::D),
            'E' => Some(DiatonicLetter::E),
            'F' => Some(DiatonicLetter::F),
            'G' => Some(DiatonicLetter::G),
            'A' => Some(DiatonicLetter::A),
            'B' => Some(DiatonicLetter::B),
            _ => None,
        }
    }
}

impl fmt::Display for DiatonicLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DiatonicLetter {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                DiatonicLetter::from_char(c).ok_or_else(|| TransposeError::InvalidLetter(s.to_string()))
            }
            _ => Err(TransposeError::InvalidLetter(s.to_string())),
        }
    }
}
