pub mod host;
pub mod key_transpose;
pub mod pitch_transpose;
pub mod score;
pub mod tables;

pub use host::HostPitch;
pub use key_transpose::{transpose_key, transpose_key_from_original};
pub use pitch_transpose::{transpose_pitch, transpose_pitch_with};
pub use score::{transpose_score, ScoreEvent};
