//! Task entity and per-row view state

mod row;
mod task;

pub use row::{RowState, TaskRow};
pub use task::{Task, TaskId};
