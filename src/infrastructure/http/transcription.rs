//! Transcription upload HTTP adapter

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::transcription::AudioData;

/// Response body of the upload endpoint
#[derive(Debug, Deserialize)]
struct UploadResponse {
    transcription: Option<String>,
    error: Option<String>,
}

/// HTTP adapter for the transcription upload endpoint.
///
/// Packages the audio payload as multipart form data under the `file` field,
/// the shape the backend's upload route expects.
pub struct HttpTranscriber {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTranscriber {
    /// Create a new adapter against the given backend origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the upload URL
    fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url)
    }

    /// Build the multipart form for an audio payload
    fn build_form(audio: &AudioData) -> Result<Form, TranscriptionError> {
        let part = Part::bytes(audio.data().to_vec())
            .file_name(audio.file_name())
            .mime_str(audio.mime_type().as_str())
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        Ok(Form::new().part("file", part))
    }

    /// Pull usable text out of a parsed response
    fn extract_text(response: UploadResponse) -> Result<String, TranscriptionError> {
        if let Some(error) = response.error {
            return Err(TranscriptionError::ApiError(error));
        }

        let text = response
            .transcription
            .map(|t| t.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(TranscriptionError::EmptyTranscription);
        }

        Ok(text)
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio: &AudioData) -> Result<String, TranscriptionError> {
        let form = Self::build_form(audio)?;

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<UploadResponse>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or(body);
            return Err(TranscriptionError::ApiError(format!(
                "HTTP {}: {}",
                status,
                message.trim()
            )));
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ParseError(e.to_string()))?;

        Self::extract_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transcription::AudioMimeType;

    #[test]
    fn upload_url_is_rooted_at_base() {
        let transcriber = HttpTranscriber::new("http://127.0.0.1:5000/");
        assert_eq!(transcriber.upload_url(), "http://127.0.0.1:5000/upload");
    }

    #[test]
    fn build_form_accepts_wav_payload() {
        let audio = AudioData::new(vec![1, 2, 3], AudioMimeType::Wav);
        assert!(HttpTranscriber::build_form(&audio).is_ok());
    }

    #[test]
    fn extract_text_trims_transcription() {
        let response = UploadResponse {
            transcription: Some("  buy milk \n".to_string()),
            error: None,
        };
        assert_eq!(
            HttpTranscriber::extract_text(response).unwrap(),
            "buy milk"
        );
    }

    #[test]
    fn extract_text_missing_field_is_empty() {
        let response = UploadResponse {
            transcription: None,
            error: None,
        };
        assert!(matches!(
            HttpTranscriber::extract_text(response),
            Err(TranscriptionError::EmptyTranscription)
        ));
    }

    #[test]
    fn extract_text_blank_field_is_empty() {
        let response = UploadResponse {
            transcription: Some("   ".to_string()),
            error: None,
        };
        assert!(matches!(
            HttpTranscriber::extract_text(response),
            Err(TranscriptionError::EmptyTranscription)
        ));
    }

    #[test]
    fn extract_text_surfaces_backend_error() {
        let response = UploadResponse {
            transcription: None,
            error: Some("Invalid file format".to_string()),
        };
        match HttpTranscriber::extract_text(response) {
            Err(TranscriptionError::ApiError(msg)) => assert!(msg.contains("Invalid file format")),
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }
}
