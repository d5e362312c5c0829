//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod capture;
pub mod ports;
pub mod task_view;

// Re-export use cases
pub use capture::{CaptureOutcome, CaptureTaskUseCase};
pub use task_view::{TaskViewController, TaskViewError, ToggleOutcome};
