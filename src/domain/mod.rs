//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod recording;
pub mod task;
pub mod transcription;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use recording::{Duration, RecorderState, RecordingSession};
pub use task::{RowState, Task, TaskId, TaskRow};
pub use transcription::{AudioData, AudioMimeType};
