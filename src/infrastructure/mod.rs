//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like cpal and the backend HTTP API.

pub mod audio_cue;
pub mod config;
pub mod http;
pub mod recording;

// Re-export adapters
pub use audio_cue::{NoOpAudioCue, RodioAudioCue};
pub use config::XdgConfigStore;
pub use http::{HttpTaskApi, HttpTranscriber};
pub use recording::CpalRecorder;
