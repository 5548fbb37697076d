//! WASM API for the transposition engine
//!
//! These are the entry points a JavaScript renderer calls during its
//! transpose-and-relayout pass: once per note, once per key change, or once
//! for a whole flattened score.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_or_default, serialize, transpose_error};
use crate::config::TransposeConfig;
use crate::models::{KeySignature, Pitch};
use crate::transposition::{self, ScoreEvent};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Transpose a single pitch
///
/// # Parameters
/// - `pitch_js`: `{ letter: "C", octave: 4, accidental: 0 }`
/// - `key_js`: the key signature in force, `{ fifths: -3 }`
/// - `halftones`: signed shift, may exceed an octave
/// - `config_js`: optional `TransposeConfig`
///
/// # Returns
/// The transposed pitch, or an error string
#[wasm_bindgen(js_name = transposePitch)]
pub fn transpose_pitch(
    pitch_js: JsValue,
    key_js: JsValue,
    halftones: i32,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let pitch: Pitch = deserialize(pitch_js, "Pitch deserialization error")?;
    let key: KeySignature = deserialize(key_js, "Key signature deserialization error")?;
    let config: TransposeConfig = deserialize_or_default(config_js, "Config deserialization error")?;

    let result = transposition::transpose_pitch_with(&pitch, &key, halftones, &config)
        .map_err(transpose_error)?;

    wasm_log!("transposePitch: {} {:+} in {} -> {}", pitch, halftones, key, result);
    serialize(&result, "Pitch serialization error")
}

/// Transpose a key signature relative to its current value
///
/// The returned signature carries `appliedOffset = halftones`.
#[wasm_bindgen(js_name = transposeKey)]
pub fn transpose_key(key_js: JsValue, halftones: i32) -> Result<JsValue, JsValue> {
    let key: KeySignature = deserialize(key_js, "Key signature deserialization error")?;
    let result = transposition::transpose_key(&key, halftones).map_err(transpose_error)?;

    wasm_log!("transposeKey: {} {:+} -> {}", key, halftones, result);
    serialize(&result, "Key signature serialization error")
}

/// Transpose a key signature from the value originally written in the score
#[wasm_bindgen(js_name = transposeKeyFromOriginal)]
pub fn transpose_key_from_original(key_js: JsValue, halftones: i32) -> Result<JsValue, JsValue> {
    let key: KeySignature = deserialize(key_js, "Key signature deserialization error")?;
    let result = transposition::transpose_key_from_original(&key, halftones)
        .map_err(transpose_error)?;

    wasm_log!("transposeKeyFromOriginal: {} {:+} -> {}", key, halftones, result);
    serialize(&result, "Key signature serialization error")
}

/// Transpose a flattened score
///
/// # Parameters
/// - `events_js`: array of `{ type: "key", fifths, ... }` and
///   `{ type: "note", letter, octave, accidental }` in score order
/// - `halftones`: global transposition
/// - `config_js`: optional `TransposeConfig`
///
/// # Returns
/// JavaScript array of transposed events, same length and order
#[wasm_bindgen(js_name = transposeScore)]
pub fn transpose_score(
    events_js: JsValue,
    halftones: i32,
    config_js: JsValue,
) -> Result<js_sys::Array, JsValue> {
    let events: Vec<ScoreEvent> = deserialize(events_js, "Score deserialization error")?;
    let config: TransposeConfig = deserialize_or_default(config_js, "Config deserialization error")?;

    wasm_info!("transposeScore called: {} events, halftones={}", events.len(), halftones);

    let leading_notes = events.iter().take_while(|e| matches!(e, ScoreEvent::Note(_))).count();
    if leading_notes > 0 && leading_notes < events.len() {
        wasm_warn!(
            "transposeScore: {} notes before the first key change are spelled against C major",
            leading_notes
        );
    }

    let transposed = transposition::transpose_score(&events, halftones, &config)
        .map_err(transpose_error)?;

    let result = js_sys::Array::new();
    for event in &transposed {
        result.push(&serialize(event, "Score event serialization error")?);
    }
    Ok(result)
}

/// Display name of a key signature, e.g. "Eb major"
#[wasm_bindgen(js_name = keySignatureName)]
pub fn key_signature_name(key_js: JsValue) -> Result<String, JsValue> {
    let key: KeySignature = deserialize(key_js, "Key signature deserialization error")?;
    let tonic = key.tonic_name().map_err(transpose_error)?;
    Ok(format!("{} {}", tonic, key.mode.as_str()))
}
