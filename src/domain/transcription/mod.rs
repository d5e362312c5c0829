//! Transcription domain types

mod audio_data;

pub use audio_data::{AudioData, AudioMimeType};
