//! Accidentals as signed halftone offsets
//!
//! Serialized as the bare integer offset (-2..=2) so a host can pass
//! `{"accidental": -1}` for a flat.

use crate::error::{Result, TransposeError};
use crate::models::DiatonicLetter;

#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum Accidental {
    DoubleFlat = -2,
    Flat = -1,
    Natural = 0,
    Sharp = 1,
    DoubleSharp = 2,
}

impl Default for Accidental {
    fn default() -> Self {
        Accidental::Natural
    }
}

impl Accidental {
    /// Halftone offset from the letter's natural pitch class
    pub const fn halftones(self) -> i32 {
        self as i8 as i32
    }

    /// Accidental for a halftone difference, or an error outside -2..=2.
    ///
    /// `letter` is only used to describe the failure.
    pub fn from_halftones(halftones: i32, letter: DiatonicLetter) -> Result<Accidental> {
        match halftones {
            -2 => Ok(Accidental::DoubleFlat),
            -1 => Ok(Accidental::Flat),
            0 => Ok(Accidental::Natural),
            1 => Ok(Accidental::Sharp),
            2 => Ok(Accidental::DoubleSharp),
            _ => Err(TransposeError::UnrepresentableAccidental { letter, halftones }),
        }
    }

    /// Text symbol, empty for natural
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    /// Parse an accidental symbol ("", "#", "##", "b", "bb" and the unicode forms)
    pub fn from_symbol(symbol: &str) -> Option<Accidental> {
        match symbol {
            "" | "n" | "♮" => Some(Accidental::Natural),
            "#" | "♯" => Some(Accidental::Sharp),
            "##" | "x" | "𝄪" => Some(Accidental::DoubleSharp),
            "b" | "♭" => Some(Accidental::Flat),
            "bb" | "𝄫" => Some(Accidental::DoubleFlat),
            _ => None,
        }
    }
}
