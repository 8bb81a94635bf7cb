//! Task types for the kanban board.
//!
//! This module defines the task structure and its identifier type used
//! throughout the kanri application.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a task.
///
/// Task ids are unique across the whole board and are never reused.
///
/// # Examples
///
/// ```
/// use kanri_board::TaskId;
///
/// let id = TaskId(1);
/// assert_eq!(id.to_string(), "1");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A task on the kanban board.
///
/// A titled, checkable unit of work. Identity is the `id` field; a task
/// belongs to exactly one column at any time.
///
/// # Examples
///
/// ```
/// use kanri_board::{Task, TaskId};
///
/// let task = Task::new(TaskId(1), "Write docs");
/// assert_eq!(task.title, "Write docs");
/// assert!(!task.is_done);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Display label for this task.
    pub title: String,
    /// Whether the task has been checked off.
    pub is_done: bool,
}

impl Task {
    /// Creates a new unchecked task with the given id and title.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_board::{Task, TaskId};
    ///
    /// let task = Task::new(TaskId(7), "Fix bug");
    /// assert_eq!(task.id, TaskId(7));
    /// ```
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            is_done: false,
        }
    }

    /// Returns a copy of this task with the given done flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_board::{Task, TaskId};
    ///
    /// let task = Task::new(TaskId(1), "Ship it").with_done(true);
    /// assert!(task.is_done);
    /// ```
    #[must_use]
    pub fn with_done(mut self, is_done: bool) -> Self {
        self.is_done = is_done;
        self
    }
}
