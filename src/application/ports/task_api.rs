//! Task API port interface

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::task::{Task, TaskId};

/// Which mutating call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOp {
    Create,
    Toggle,
    Update,
    Delete,
}

impl MutationOp {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Toggle => "toggle",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for MutationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task API errors
#[derive(Debug, Clone, Error)]
pub enum TaskApiError {
    /// Non-success status fetching the collection
    #[error("Failed to fetch tasks: {0}")]
    Fetch(String),

    /// Non-success status on a create/toggle/update/delete call
    #[error("Task {op} failed: {detail}")]
    Mutation { op: MutationOp, detail: String },

    /// Network failure before any status was received
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The collection response was not the expected JSON array
    #[error("Failed to parse task list: {0}")]
    ParseError(String),
}

/// Port for the remote task store.
///
/// Mutating calls return status only; callers resync by re-fetching the
/// collection rather than patching from response bodies.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetch the full task collection, in backend order.
    async fn list(&self) -> Result<Vec<Task>, TaskApiError>;

    /// Create a task with the given description.
    async fn create(&self, description: &str) -> Result<(), TaskApiError>;

    /// Flip the completed bit of the task with the given id.
    async fn toggle(&self, id: TaskId) -> Result<(), TaskApiError>;

    /// Replace the description of the task with the given id.
    async fn update(&self, id: TaskId, description: &str) -> Result<(), TaskApiError>;

    /// Delete the task with the given id.
    async fn delete(&self, id: TaskId) -> Result<(), TaskApiError>;
}
