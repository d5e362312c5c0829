//! Recording session state machine

use std::fmt;
use thiserror::Error;

/// Recorder states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecorderState {
    #[default]
    Idle,
    Recording,
}

impl RecorderState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
        }
    }
}

impl fmt::Display for RecorderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: RecorderState,
    pub action: String,
}

/// Recording session entity.
///
/// Owns the two-state toggle the capture flow runs on. Stop-and-upload runs
/// to completion inside a single toggle, so stopping goes straight back to
/// IDLE rather than through an intermediate state.
///
/// State machine:
///   IDLE -> RECORDING (start)
///   RECORDING -> IDLE (stop)
#[derive(Debug, Default)]
pub struct RecordingSession {
    state: RecorderState,
}

impl RecordingSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: RecorderState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> RecorderState {
        self.state
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == RecorderState::Idle
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        self.state == RecorderState::Recording
    }

    /// Transition from IDLE to RECORDING
    pub fn start(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != RecorderState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "start recording".to_string(),
            });
        }
        self.state = RecorderState::Recording;
        Ok(())
    }

    /// Transition from RECORDING to IDLE
    pub fn stop(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != RecorderState::Recording {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "stop recording".to_string(),
            });
        }
        self.state = RecorderState::Idle;
        Ok(())
    }
}
