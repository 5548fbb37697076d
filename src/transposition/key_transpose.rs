/// Key signature transposition on the circle of fifths
///
/// `CIRCLE_OF_FIFTHS_ORDER[i]` is the signature of C major moved up `i`
/// halftones, so transposing a key is an index shift modulo 12.

use crate::error::Result;
use crate::models::KeySignature;
use crate::transposition::tables::{circle_index, CIRCLE_OF_FIFTHS_ORDER};

/// Transpose the key's current signature by `halftones`
///
/// The result records `halftones` as its applied offset. Whole-octave shifts
/// keep the signature as written, so Cb major +12 stays Cb rather than B.
pub fn transpose_key(key: &KeySignature, halftones: i32) -> Result<KeySignature> {
    let fifths = shift_fifths(key.fifths, halftones)?;
    Ok(KeySignature {
        fifths,
        applied_offset: halftones,
        ..*key
    })
}

/// Transpose from the signature originally written in the score
///
/// Re-applying a new global transposition goes through here so that
/// successive changes do not accumulate: +2 then +3 ends at original +3.
pub fn transpose_key_from_original(key: &KeySignature, halftones: i32) -> Result<KeySignature> {
    let original = key.original();
    let fifths = shift_fifths(original, halftones)?;
    Ok(KeySignature {
        fifths,
        mode: key.mode,
        original_fifths: Some(original),
        applied_offset: halftones,
    })
}

fn shift_fifths(fifths: i32, halftones: i32) -> Result<i32> {
    let index = circle_index(fifths)? as i32;
    let steps = halftones.rem_euclid(12);
    if steps == 0 {
        return Ok(fifths);
    }
    let new_index = (index + steps).rem_euclid(12) as usize;
    Ok(CIRCLE_OF_FIFTHS_ORDER[new_index] as i32)
}
