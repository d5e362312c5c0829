//! Task entity

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::Deserialize;

/// Opaque task identifier assigned by the remote store.
///
/// The backend happens to use integers; the client only ever displays ids
/// and compares them for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Wrap a raw backend id
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw backend id
    pub const fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A to-do item as held by the remote store.
///
/// `id` is stable for the lifetime of the task and is the sole key used to
/// address toggle/update/delete operations. The client never invents task
/// state; every `Task` it holds came from the last successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub completed: bool,
}
