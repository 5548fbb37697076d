/// Halftone transposition of a single pitch with enharmonic spelling
///
/// The target pitch class is found by plain arithmetic. Spelling it is the
/// interesting part:
/// 1. If a letter's natural value hits the target exactly, use it unaltered.
/// 2. Otherwise the target sits between two letters. A sharp origin, or a
///    natural origin in a sharp-side key, takes the lower letter raised (C#);
///    anything else takes the upper letter lowered (Db).
///
/// Example: C4 +1 in C major is C#4, but in Eb major it is Db4.

use crate::config::{SpellingPreference, TransposeConfig};
use crate::error::{Result, TransposeError};
use crate::models::key_signature::check_fifths;
use crate::models::{KeySignature, Pitch};
use crate::transposition::host::HostPitch;
use crate::transposition::tables::LETTERS;

/// Transpose a pitch by `halftones` with the default configuration
pub fn transpose_pitch(pitch: &Pitch, current_key: &KeySignature, halftones: i32) -> Result<Pitch> {
    transpose_pitch_with(pitch, current_key, halftones, &TransposeConfig::default())
}

/// Transpose any host pitch type by `halftones`
///
/// `current_key` only breaks enharmonic ties; it must still be a legal
/// signature (-7..=7).
pub fn transpose_pitch_with<P: HostPitch>(
    pitch: &P,
    current_key: &KeySignature,
    halftones: i32,
    config: &TransposeConfig,
) -> Result<P> {
    check_fifths(current_key.fifths)?;

    let letter = pitch.letter();
    let accidental = pitch.accidental_halftones();

    if halftones == 0 && config.zero_shift_identity {
        return P::from_spelling(letter, pitch.octave(), accidental);
    }

    // Unreduced, so B#4 carries into octave 5 and Cb4 stays in octave 3.
    // i64 holds any i32 shift from any i32 octave.
    let shifted = letter.natural_value() as i64 + accidental as i64 + halftones as i64;
    let mut target_class = shifted.rem_euclid(12) as i32;
    let mut octave_carry = shifted.div_euclid(12);

    if let Some(&natural) = LETTERS.iter().find(|l| l.natural_value() == target_class) {
        log::trace!("transpose {:+}: exact match {}", halftones, natural);
        return P::from_spelling(natural, carried_octave(pitch.octave(), octave_carry)?, 0);
    }

    let mut candidate = LETTERS
        .iter()
        .position(|l| l.natural_value() > target_class)
        .unwrap_or(LETTERS.len()) as i32;

    if prefers_lower_letter(accidental, current_key, config.spelling) {
        candidate -= 1;
    }

    // Keep (letter, target_class, octave) describing the same absolute halftone
    while candidate < 0 {
        candidate += 7;
        target_class += 12;
        octave_carry -= 1;
    }
    while candidate >= 7 {
        candidate -= 7;
        target_class -= 12;
        octave_carry += 1;
    }

    let spelled = LETTERS[candidate as usize];
    let offset = target_class - spelled.natural_value();
    log::trace!("transpose {:+}: spelled {} with offset {:+}", halftones, spelled, offset);

    P::from_spelling(spelled, carried_octave(pitch.octave(), octave_carry)?, offset)
}

fn carried_octave(octave: i32, carry: i64) -> Result<i32> {
    let octave = octave as i64 + carry;
    i32::try_from(octave).map_err(|_| TransposeError::OctaveOutOfRange(octave))
}

fn prefers_lower_letter(accidental: i32, key: &KeySignature, spelling: SpellingPreference) -> bool {
    match spelling {
        SpellingPreference::KeyAware => accidental > 0 || (accidental == 0 && key.is_sharp_side()),
        SpellingPreference::PreferSharps => true,
        SpellingPreference::PreferFlats => false,
    }
}
