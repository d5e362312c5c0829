//! Recording infrastructure module
//!
//! Cross-platform audio capture using cpal, encoded to WAV for the upload
//! endpoint.

mod cpal_recorder;
mod wav_encoder;

pub use cpal_recorder::CpalRecorder;
pub use wav_encoder::{encode_to_wav, TARGET_SAMPLE_RATE};
