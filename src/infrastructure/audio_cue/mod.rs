//! Audio cue infrastructure adapters
//!
//! Provides audio feedback when recording starts or stops.

mod noop;
mod rodio;

pub use noop::NoOpAudioCue;
pub use rodio::RodioAudioCue;
