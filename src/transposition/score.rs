//! Whole-score transposition pass
//!
//! Mirrors what a renderer does on a global transpose: walk the score in
//! order, transpose each key change from its original signature, and spell
//! each note against the transposed key currently in force.

use serde::{Deserialize, Serialize};

use crate::config::TransposeConfig;
use crate::error::Result;
use crate::models::{KeySignature, Pitch};
use crate::transposition::key_transpose::transpose_key_from_original;
use crate::transposition::pitch_transpose::transpose_pitch_with;

/// One item of a score, in reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScoreEvent {
    Key(KeySignature),
    Note(Pitch),
}

/// Transpose every event of a score by `halftones`
///
/// Notes ahead of the first key change are spelled against C major moved by
/// the same amount. The first failing event aborts the pass.
pub fn transpose_score(
    events: &[ScoreEvent],
    halftones: i32,
    config: &TransposeConfig,
) -> Result<Vec<ScoreEvent>> {
    let mut current_key = transpose_key_from_original(&KeySignature::default(), halftones)?;
    let mut transposed = Vec::with_capacity(events.len());
    let mut key_changes = 0usize;

    for event in events {
        match event {
            ScoreEvent::Key(key) => {
                current_key = transpose_key_from_original(key, halftones)?;
                key_changes += 1;
                log::debug!("key change: {} -> {} ({:+})", key, current_key, halftones);
                transposed.push(ScoreEvent::Key(current_key));
            }
            ScoreEvent::Note(pitch) => {
                let note = transpose_pitch_with(pitch, &current_key, halftones, config)?;
                transposed.push(ScoreEvent::Note(note));
            }
        }
    }

    log::debug!(
        "transposed {} events ({} key changes) by {:+} halftones",
        transposed.len(),
        key_changes,
        halftones
    );

    Ok(transposed)
}
