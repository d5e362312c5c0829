//! Voice capture use case
//!
//! Bridges the microphone to the transcription endpoint and feeds the
//! result into task creation. One toggle entry point drives the two-state
//! session: idle starts a capture, recording stops it, uploads the payload,
//! and creates a task from any non-empty transcription.

use thiserror::Error;

use crate::domain::recording::{InvalidStateTransition, RecordingSession};

use super::ports::{
    AudioCue, AudioCueType, AudioRecorder, RecordingError, TaskApi, Transcriber,
    TranscriptionError,
};
use super::task_view::{TaskViewController, TaskViewError};

/// Errors from the capture use case
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Recording failed: {0}")]
    Recording(#[from] RecordingError),

    #[error("Transcription failed: {0}")]
    Transcription(TranscriptionError),

    #[error(transparent)]
    View(#[from] TaskViewError),

    #[error(transparent)]
    Session(#[from] InvalidStateTransition),
}

/// What a toggle accomplished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Recording started; toggle again to stop
    Started,
    /// Recording stopped, transcription succeeded, task created and list
    /// resynced
    TaskCreated { description: String },
    /// Recording stopped but the service returned no usable text; nothing
    /// was created
    NothingTranscribed,
}

/// Voice-to-task capture use case.
///
/// Owns the recording session for its lifetime; the session is reset, not
/// reused, across captures. Failures at any stage return the session to
/// idle, mirroring the record control always falling back to its idle
/// affordance.
pub struct CaptureTaskUseCase<R, T, C>
where
    R: AudioRecorder,
    T: Transcriber,
    C: AudioCue,
{
    recorder: R,
    transcriber: T,
    audio_cue: C,
    enable_cue: bool,
    session: RecordingSession,
}

impl<R, T, C> CaptureTaskUseCase<R, T, C>
where
    R: AudioRecorder,
    T: Transcriber,
    C: AudioCue,
{
    /// Create a new use case instance
    pub fn new(recorder: R, transcriber: T, audio_cue: C, enable_cue: bool) -> Self {
        Self {
            recorder,
            transcriber,
            audio_cue,
            enable_cue,
            session: RecordingSession::new(),
        }
    }

    /// Check if a capture is in progress
    pub fn is_recording(&self) -> bool {
        self.session.is_recording()
    }

    /// Get elapsed capture time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.recorder.elapsed_ms()
    }

    /// Toggle the session: start when idle, stop-upload-create when
    /// recording.
    pub async fn toggle<A: TaskApi>(
        &mut self,
        view: &mut TaskViewController<A>,
    ) -> Result<CaptureOutcome, CaptureError> {
        if self.session.is_recording() {
            self.stop_and_create(view).await
        } else {
            self.start().await
        }
    }

    async fn start(&mut self) -> Result<CaptureOutcome, CaptureError> {
        self.session.start()?;

        if let Err(e) = self.recorder.start().await {
            // Microphone access failed; stay idle
            self.session.stop().ok();
            return Err(e.into());
        }

        if self.enable_cue {
            let _ = self.audio_cue.play(AudioCueType::RecordingStart).await;
        }

        Ok(CaptureOutcome::Started)
    }

    /// Discard an in-progress capture without uploading anything
    pub async fn cancel(&mut self) -> Result<(), CaptureError> {
        self.session.stop()?;
        self.recorder.cancel().await?;
        Ok(())
    }

    async fn stop_and_create<A: TaskApi>(
        &mut self,
        view: &mut TaskViewController<A>,
    ) -> Result<CaptureOutcome, CaptureError> {
        // Back to idle before anything can fail; upload outcome never keeps
        // the session stuck in recording
        self.session.stop()?;

        let audio = self.recorder.stop().await?;

        if self.enable_cue {
            let _ = self.audio_cue.play(AudioCueType::RecordingStop).await;
        }

        let text = match self.transcriber.transcribe(&audio).await {
            Ok(text) => text,
            Err(TranscriptionError::EmptyTranscription) => {
                return Ok(CaptureOutcome::NothingTranscribed);
            }
            Err(e) => return Err(CaptureError::Transcription(e)),
        };

        view.add_task(&text).await?;

        Ok(CaptureOutcome::TaskCreated { description: text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{AudioCueError, TaskApiError};
    use crate::domain::task::Task;
    use crate::domain::transcription::{AudioData, AudioMimeType};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    // Mock implementations for testing

    #[derive(Default)]
    struct MockRecorder {
        recording: AtomicBool,
        fail_start: bool,
    }

    #[async_trait]
    impl AudioRecorder for &MockRecorder {
        async fn start(&self) -> Result<(), RecordingError> {
            if self.fail_start {
                return Err(RecordingError::NoAudioDevice);
            }
            self.recording.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn stop(&self) -> Result<AudioData, RecordingError> {
            self.recording.store(false, Ordering::SeqCst);
            Ok(AudioData::new(vec![0u8; 64], AudioMimeType::Wav))
        }

        async fn cancel(&self) -> Result<(), RecordingError> {
            self.recording.store(false, Ordering::SeqCst);
            Ok(())
        }

        fn is_recording(&self) -> bool {
            self.recording.load(Ordering::SeqCst)
        }

        fn elapsed_ms(&self) -> u64 {
            0
        }
    }

    struct MockTranscriber {
        result: Result<String, TranscriptionError>,
    }

    #[async_trait]
    impl Transcriber for &MockTranscriber {
        async fn transcribe(&self, _audio: &AudioData) -> Result<String, TranscriptionError> {
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct MockCue {
        plays: AtomicUsize,
    }

    #[async_trait]
    impl AudioCue for &MockCue {
        async fn play(&self, _cue_type: AudioCueType) -> Result<(), AudioCueError> {
            self.plays.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingApi {
        tasks: Mutex<Vec<Task>>,
    }

    #[async_trait]
    impl TaskApi for &RecordingApi {
        async fn list(&self) -> Result<Vec<Task>, TaskApiError> {
            Ok(self.tasks.lock().unwrap().clone())
        }

        async fn create(&self, description: &str) -> Result<(), TaskApiError> {
            let mut tasks = self.tasks.lock().unwrap();
            let id = crate::domain::task::TaskId::new(tasks.len() as i64 + 1);
            tasks.push(Task {
                id,
                description: description.to_string(),
                completed: false,
            });
            Ok(())
        }

        async fn toggle(&self, _id: crate::domain::task::TaskId) -> Result<(), TaskApiError> {
            Ok(())
        }

        async fn update(
            &self,
            _id: crate::domain::task::TaskId,
            _description: &str,
        ) -> Result<(), TaskApiError> {
            Ok(())
        }

        async fn delete(&self, _id: crate::domain::task::TaskId) -> Result<(), TaskApiError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn toggle_starts_then_creates_task() {
        let recorder = MockRecorder::default();
        let transcriber = MockTranscriber {
            result: Ok("buy milk".to_string()),
        };
        let cue = MockCue::default();
        let api = RecordingApi::default();

        let mut capture = CaptureTaskUseCase::new(&recorder, &transcriber, &cue, true);
        let mut view = TaskViewController::new(&api);

        let outcome = capture.toggle(&mut view).await.unwrap();
        assert_eq!(outcome, CaptureOutcome::Started);
        assert!(capture.is_recording());

        let outcome = capture.toggle(&mut view).await.unwrap();
        assert_eq!(
            outcome,
            CaptureOutcome::TaskCreated {
                description: "buy milk".to_string()
            }
        );
        assert!(!capture.is_recording());

        // The create already resynced the view
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].task().description, "buy milk");
    }

    #[tokio::test]
    async fn both_cues_play_over_a_full_capture() {
        let recorder = MockRecorder::default();
        let transcriber = MockTranscriber {
            result: Ok("x".to_string()),
        };
        let cue = MockCue::default();
        let api = RecordingApi::default();

        let mut capture = CaptureTaskUseCase::new(&recorder, &transcriber, &cue, true);
        let mut view = TaskViewController::new(&api);

        capture.toggle(&mut view).await.unwrap();
        capture.toggle(&mut view).await.unwrap();

        assert_eq!(cue.plays.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn cues_respect_disable_flag() {
        let recorder = MockRecorder::default();
        let transcriber = MockTranscriber {
            result: Ok("x".to_string()),
        };
        let cue = MockCue::default();
        let api = RecordingApi::default();

        let mut capture = CaptureTaskUseCase::new(&recorder, &transcriber, &cue, false);
        let mut view = TaskViewController::new(&api);

        capture.toggle(&mut view).await.unwrap();
        capture.toggle(&mut view).await.unwrap();

        assert_eq!(cue.plays.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn microphone_failure_stays_idle() {
        let recorder = MockRecorder {
            fail_start: true,
            ..Default::default()
        };
        let transcriber = MockTranscriber {
            result: Ok("x".to_string()),
        };
        let cue = MockCue::default();
        let api = RecordingApi::default();

        let mut capture = CaptureTaskUseCase::new(&recorder, &transcriber, &cue, true);
        let mut view = TaskViewController::new(&api);

        let err = capture.toggle(&mut view).await.unwrap_err();
        assert!(matches!(
            err,
            CaptureError::Recording(RecordingError::NoAudioDevice)
        ));
        assert!(!capture.is_recording());

        // Terminal for that session only; the next toggle can start again
        let recorder_ok = MockRecorder::default();
        let mut capture = CaptureTaskUseCase::new(&recorder_ok, &transcriber, &cue, true);
        assert_eq!(
            capture.toggle(&mut view).await.unwrap(),
            CaptureOutcome::Started
        );
    }

    #[tokio::test]
    async fn empty_transcription_creates_nothing() {
        let recorder = MockRecorder::default();
        let transcriber = MockTranscriber {
            result: Err(TranscriptionError::EmptyTranscription),
        };
        let cue = crate::infrastructure::NoOpAudioCue::new();
        let api = RecordingApi::default();

        let mut capture = CaptureTaskUseCase::new(&recorder, &transcriber, cue, false);
        let mut view = TaskViewController::new(&api);

        capture.toggle(&mut view).await.unwrap();
        let outcome = capture.toggle(&mut view).await.unwrap();

        assert_eq!(outcome, CaptureOutcome::NothingTranscribed);
        assert!(!capture.is_recording());
        assert!(view.rows().is_empty());
    }

    #[tokio::test]
    async fn cancel_discards_the_capture() {
        let recorder = MockRecorder::default();
        let transcriber = MockTranscriber {
            result: Ok("x".to_string()),
        };
        let cue = MockCue::default();
        let api = RecordingApi::default();

        let mut capture = CaptureTaskUseCase::new(&recorder, &transcriber, &cue, false);
        let mut view = TaskViewController::new(&api);

        capture.toggle(&mut view).await.unwrap();
        capture.cancel().await.unwrap();

        assert!(!capture.is_recording());
        assert!(!(&recorder).is_recording());
        assert!(view.rows().is_empty());
    }

    #[tokio::test]
    async fn cancel_while_idle_fails() {
        let recorder = MockRecorder::default();
        let transcriber = MockTranscriber {
            result: Ok("x".to_string()),
        };
        let cue = MockCue::default();

        let mut capture = CaptureTaskUseCase::new(&recorder, &transcriber, &cue, false);
        assert!(matches!(
            capture.cancel().await,
            Err(CaptureError::Session(_))
        ));
    }

    #[tokio::test]
    async fn upload_failure_returns_to_idle() {
        let recorder = MockRecorder::default();
        let transcriber = MockTranscriber {
            result: Err(TranscriptionError::RequestFailed("connection refused".into())),
        };
        let cue = crate::infrastructure::NoOpAudioCue::new();
        let api = RecordingApi::default();

        let mut capture = CaptureTaskUseCase::new(&recorder, &transcriber, cue, false);
        let mut view = TaskViewController::new(&api);

        capture.toggle(&mut view).await.unwrap();
        let err = capture.toggle(&mut view).await.unwrap_err();

        assert!(matches!(err, CaptureError::Transcription(_)));
        // Control is back on its idle affordance regardless of the outcome
        assert!(!capture.is_recording());
        assert!(view.rows().is_empty());
    }
}
