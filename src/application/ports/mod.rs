//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod audio_cue;
pub mod config;
pub mod recorder;
pub mod task_api;
pub mod transcriber;

// Re-export common types
pub use audio_cue::{AudioCue, AudioCueError, AudioCueType};
pub use config::ConfigStore;
pub use recorder::{AudioRecorder, RecordingError};
pub use task_api::{MutationOp, TaskApi, TaskApiError};
pub use transcriber::{Transcriber, TranscriptionError};
