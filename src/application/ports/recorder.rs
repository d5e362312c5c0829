//! Recording port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::AudioData;

/// Recording errors
#[derive(Debug, Clone, Error)]
pub enum RecordingError {
    #[error("Failed to start recording: {0}")]
    StartFailed(String),

    #[error("Recording failed: {0}")]
    RecordingFailed(String),

    #[error("Failed to read captured audio: {0}")]
    ReadFailed(String),

    #[error("No audio device available")]
    NoAudioDevice,
}

/// Port for toggle-paced audio recording.
///
/// A session buffer is reset (not locked) on each start; the toggle is the
/// only entry point, so start and stop never overlap for a well-behaved
/// caller.
#[async_trait]
pub trait AudioRecorder: Send + Sync {
    /// Start a recording session.
    ///
    /// Microphone access may fail here; the caller logs and stays idle.
    async fn start(&self) -> Result<(), RecordingError>;

    /// Stop the session and return the assembled audio payload.
    async fn stop(&self) -> Result<AudioData, RecordingError>;

    /// Discard the session without producing audio.
    async fn cancel(&self) -> Result<(), RecordingError>;

    /// Check if currently recording
    fn is_recording(&self) -> bool;

    /// Get elapsed recording time in milliseconds
    fn elapsed_ms(&self) -> u64;
}
