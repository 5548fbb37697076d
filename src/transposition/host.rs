//! The capability a host pitch type must provide to be transposed
//!
//! Renderers keep their own pitch objects with far more on them than the
//! engine needs. Implementing `HostPitch` lets `transpose_pitch` read and
//! build those objects directly without converting through [`Pitch`].

use crate::error::Result;
use crate::models::{Accidental, DiatonicLetter, Pitch};

pub trait HostPitch: Sized {
    fn letter(&self) -> DiatonicLetter;

    fn octave(&self) -> i32;

    /// Halftone offset of the pitch's accidental (pitch class from accidental)
    fn accidental_halftones(&self) -> i32;

    /// Build a pitch from a letter, octave and halftone difference
    /// (accidental from pitch-class difference). Must reject differences the
    /// host cannot notate instead of clamping them.
    fn from_spelling(letter: DiatonicLetter, octave: i32, accidental_halftones: i32) -> Result<Self>;
}

impl HostPitch for Pitch {
    fn letter(&self) -> DiatonicLetter {
        self.letter
    }

    fn octave(&self) -> i32 {
        self.octave
    }

    fn accidental_halftones(&self) -> i32 {
        self.accidental.halftones()
    }

    fn from_spelling(letter: DiatonicLetter, octave: i32, accidental_halftones: i32) -> Result<Self> {
        let accidental = Accidental::from_halftones(accidental_halftones, letter)?;
        Ok(Pitch::new(letter, octave, accidental))
    }
}
