//! Task view controller use case
//!
//! Keeps the row model synchronized with the remote task collection and
//! mediates all CRUD actions. The strategy is reload-after-mutation: every
//! write except toggle ends in a full re-fetch, so the model never has to
//! reconcile a locally guessed state against the server's. On any failure
//! the model is left in its last-known-good state.

use thiserror::Error;

use crate::domain::task::{Task, TaskId, TaskRow};

use super::ports::{TaskApi, TaskApiError};

/// Errors from the task view controller
#[derive(Debug, Clone, Error)]
pub enum TaskViewError {
    #[error(transparent)]
    Api(#[from] TaskApiError),

    #[error("No task with id {0}")]
    UnknownTask(TaskId),

    #[error("Task {0} is not being edited")]
    NotEditing(TaskId),
}

/// Result of a toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The server flipped the bit; `completed` is the new local value
    Toggled { completed: bool },
    /// The row is in edit mode; no request was sent
    SkippedEditing,
}

/// Task view controller.
///
/// Owns the rendered row model: tasks from the last successful fetch, each
/// paired with its view state. The model is a disposable rendering, not an
/// authoritative copy; a full page of state survives nothing but the next
/// fetch.
pub struct TaskViewController<A: TaskApi> {
    api: A,
    rows: Vec<TaskRow>,
}

impl<A: TaskApi> TaskViewController<A> {
    /// Create a controller with an empty row model
    pub fn new(api: A) -> Self {
        Self {
            api,
            rows: Vec::new(),
        }
    }

    /// Get the current row model, in backend order
    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    fn row_mut(&mut self, id: TaskId) -> Result<&mut TaskRow, TaskViewError> {
        self.rows
            .iter_mut()
            .find(|row| row.task().id == id)
            .ok_or(TaskViewError::UnknownTask(id))
    }

    /// Re-fetch the collection and rebuild the row model.
    ///
    /// On failure the previous rows are kept as-is (an empty model on first
    /// load). Rebuilding drops all edit states, which is exactly the
    /// original's clear-and-re-render behavior.
    pub async fn load_tasks(&mut self) -> Result<(), TaskViewError> {
        let tasks = self.api.list().await?;
        self.rows = tasks.into_iter().map(TaskRow::viewing).collect();
        Ok(())
    }

    /// Create a task, then resync.
    ///
    /// No optimistic insert happens, so a failed create needs no rollback.
    pub async fn add_task(&mut self, description: &str) -> Result<(), TaskViewError> {
        self.api.create(description).await?;
        self.load_tasks().await
    }

    /// Flip a task's completed bit.
    ///
    /// Guarded: a no-op when the row is in edit mode. On success the local
    /// bit is flipped directly instead of re-fetching; the toggle endpoint
    /// flips exactly one bit per request, so request and local flip stay
    /// paired.
    pub async fn toggle_task(&mut self, id: TaskId) -> Result<ToggleOutcome, TaskViewError> {
        if self.row_mut(id)?.is_editing() {
            return Ok(ToggleOutcome::SkippedEditing);
        }

        self.api.toggle(id).await?;

        let row = self.row_mut(id)?;
        let completed = !row.task().completed;
        row.set_completed(completed);
        Ok(ToggleOutcome::Toggled { completed })
    }

    /// Put a row into edit mode, draft pre-filled with the current
    /// description. This is what gates `toggle_task`'s guard.
    pub fn start_edit(&mut self, id: TaskId) -> Result<(), TaskViewError> {
        self.row_mut(id)?.start_edit();
        Ok(())
    }

    /// Replace the in-progress draft text of an editing row
    pub fn set_draft(&mut self, id: TaskId, text: &str) -> Result<(), TaskViewError> {
        let row = self.row_mut(id)?;
        if !row.is_editing() {
            return Err(TaskViewError::NotEditing(id));
        }
        row.set_draft(text);
        Ok(())
    }

    /// Leave edit mode, discard the draft, and resync to restore the
    /// canonical rendering. The backend is never touched with the draft.
    pub async fn cancel_edit(&mut self, id: TaskId) -> Result<(), TaskViewError> {
        let row = self.row_mut(id)?;
        if !row.is_editing() {
            return Err(TaskViewError::NotEditing(id));
        }
        row.stop_edit();
        self.load_tasks().await
    }

    /// PUT the draft as the new description, then resync.
    ///
    /// On failure the row stays in its edited-but-unsaved state.
    pub async fn save_task(&mut self, id: TaskId) -> Result<(), TaskViewError> {
        let draft = self
            .row_mut(id)?
            .draft()
            .ok_or(TaskViewError::NotEditing(id))?
            .to_string();

        self.api.update(id, &draft).await?;
        self.load_tasks().await
    }

    /// Delete a task, then resync
    pub async fn delete_task(&mut self, id: TaskId) -> Result<(), TaskViewError> {
        self.api.delete(id).await?;
        self.load_tasks().await
    }

    /// Look up the last-fetched task for an id (used by the shell for
    /// messages; never authoritative)
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.rows
            .iter()
            .map(TaskRow::task)
            .find(|task| task.id == id)
    }
}
