//! Per-row view state
//!
//! The original UI inferred "this row is being edited" from a DOM class;
//! here it is an explicit enum carried next to the task, which is what
//! gates the toggle guard.

use super::Task;

/// View state for one rendered row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowState {
    /// Normal rendering: checkbox plus description
    #[default]
    Viewing,
    /// Inline edit in progress; `draft` is the uncommitted new description
    Editing { draft: String },
}

/// One row of the task list: the last-fetched task plus its view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    task: Task,
    state: RowState,
}

impl TaskRow {
    /// Create a row in the default viewing state
    pub fn viewing(task: Task) -> Self {
        Self {
            task,
            state: RowState::Viewing,
        }
    }

    /// Get the task this row renders
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Get the current view state
    pub fn state(&self) -> &RowState {
        &self.state
    }

    /// Check if the row is in edit mode
    pub fn is_editing(&self) -> bool {
        matches!(self.state, RowState::Editing { .. })
    }

    /// Get the uncommitted draft text, if editing
    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            RowState::Editing { draft } => Some(draft),
            RowState::Viewing => None,
        }
    }

    /// Enter edit mode with the draft pre-filled from the current description.
    /// Re-entering edit mode keeps an existing draft.
    pub fn start_edit(&mut self) {
        if !self.is_editing() {
            self.state = RowState::Editing {
                draft: self.task.description.clone(),
            };
        }
    }

    /// Replace the draft text. No-op unless editing.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let RowState::Editing { draft } = &mut self.state {
            *draft = text.into();
        }
    }

    /// Leave edit mode, discarding any draft
    pub fn stop_edit(&mut self) {
        self.state = RowState::Viewing;
    }

    /// Apply a confirmed completion flip to the local copy.
    /// Only used for the optimistic toggle path; everything else reloads.
    pub fn set_completed(&mut self, completed: bool) {
        self.task.completed = completed;
    }
}
