//! HTTP adapters for the backend REST API

mod tasks;
mod transcription;

pub use tasks::HttpTaskApi;
pub use transcription::HttpTranscriber;
