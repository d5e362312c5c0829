//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::AudioData;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Upload failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse upload response: {0}")]
    ParseError(String),

    #[error("Transcription service error: {0}")]
    ApiError(String),

    /// The response had no `transcription` field, or it was blank.
    /// Not surfaced to the user; the capture flow quietly returns to idle.
    #[error("Empty transcription")]
    EmptyTranscription,
}

/// Port for audio transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an audio payload to text.
    ///
    /// # Returns
    /// The transcribed text or an error
    async fn transcribe(&self, audio: &AudioData) -> Result<String, TranscriptionError>;
}
