/// Constant lookup tables shared by the pitch and key transposers
///
/// Both tables are compile-time constants; nothing is initialised at runtime.

use crate::error::{Result, TransposeError};
use crate::models::key_signature::check_fifths;
use crate::models::DiatonicLetter;

/// Letters in ascending order of natural pitch class
pub const LETTERS: [DiatonicLetter; 7] = [
    DiatonicLetter::C,
    DiatonicLetter::D,
    DiatonicLetter::E,
    DiatonicLetter::F,
    DiatonicLetter::G,
    DiatonicLetter::A,
    DiatonicLetter::B,
];

/// Key signature reached by transposing C major up `index` halftones
///
/// Index 1 is Db (-5), index 7 is G (+1), and so on.
pub const CIRCLE_OF_FIFTHS_ORDER: [i8; 12] = [0, -5, 2, -3, 4, -1, 6, 1, -4, 3, -2, 5];

/// Position of a key signature in `CIRCLE_OF_FIFTHS_ORDER`
///
/// The table holds one spelling per pitch class, so -7 (Cb), -6 (Gb) and
/// +7 (C#) resolve through their enharmonic twins B (+5), F# (+6) and Db (-5).
pub fn circle_index(fifths: i32) -> Result<usize> {
    let fifths = check_fifths(fifths)?;
    let lookup = match fifths {
        -7 | 5 => 5,
        -6 | 6 => 6,
        7 => -5,
        other => other,
    };

    CIRCLE_OF_FIFTHS_ORDER
        .iter()
        .position(|&entry| entry as i32 == lookup)
        .ok_or(TransposeError::UnsupportedKeySignature(fifths))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_ascending() {
        for pair in LETTERS.windows(2) {
            assert!(pair[0].natural_value() < pair[1].natural_value());
        }
    }

    #[test]
    fn test_circle_table_distinct_and_complete() {
        assert_eq!(CIRCLE_OF_FIFTHS_ORDER.len(), 12);
        let mut sorted = CIRCLE_OF_FIFTHS_ORDER.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, (-5..=6).collect::<Vec<i8>>());
    }

    #[test]
    fn test_circle_index_every_legal_signature() {
        for fifths in -7..=7 {
            let index = circle_index(fifths).unwrap();
            assert!(index < 12);
        }
        assert_eq!(circle_index(0).unwrap(), 0);
        assert_eq!(circle_index(1).unwrap(), 7);
        assert_eq!(circle_index(7).unwrap(), circle_index(-5).unwrap());
        assert_eq!(circle_index(-6).unwrap(), circle_index(6).unwrap());
        assert_eq!(circle_index(-7).unwrap(), circle_index(5).unwrap());
    }

    #[test]
    fn test_circle_index_rejects_illegal() {
        assert_eq!(circle_index(8), Err(TransposeError::UnsupportedKeySignature(8)));
        assert_eq!(circle_index(-12), Err(TransposeError::UnsupportedKeySignature(-12)));
    }
}
