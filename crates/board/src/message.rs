//! UI message types for event handling.
//!
//! This module defines the message enum produced by the input layer and
//! consumed by the application state, along with the drag payload and
//! drop target types shared between the board and the view.

use serde::{Deserialize, Serialize};

use crate::board::ColumnId;
use crate::task::TaskId;

/// The payload carried by an in-flight drag gesture.
///
/// Captured once when the drag starts and delivered unchanged at drop
/// time; the originating column is never re-derived from the board.
///
/// # Examples
///
/// ```
/// use kanri_board::{ColumnId, DragPayload, TaskId};
///
/// let payload = DragPayload { origin: ColumnId(1), task: TaskId(2) };
/// assert_eq!(payload.origin, ColumnId(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    /// The column the task was picked up from.
    pub origin: ColumnId,
    /// The task being dragged.
    pub task: TaskId,
}

/// A UI region a dragged task can be released onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropTarget {
    /// A column's drop area; releasing here moves the task.
    Column(ColumnId),
    /// The delete zone; releasing here deletes the task.
    DeleteZone,
}

/// Messages that represent user actions in the TUI.
///
/// Produced by the input handler (keyboard or mouse) and consumed by the
/// application to update its state.
///
/// # Examples
///
/// ```
/// use kanri_board::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the previous column.
    NavigateLeft,
    /// Move selection to the next column.
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// Toggle the selected task's checkbox.
    ToggleDone,
    /// Pick up the selected task for a keyboard-driven drag.
    Grab,
    /// Start a drag with an explicit payload (mouse press on a card).
    BeginDrag(DragPayload),
    /// Release the current drag over the given target, if any.
    ///
    /// `None` means the release happened outside every drop zone and the
    /// drag is simply cancelled.
    Drop(Option<DropTarget>),
    /// Cancel the current action or clear the selection.
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_board::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::ToggleDone.is_navigation());
    /// ```
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub const fn is_terminating(self) -> bool {
        matches!(self, Self::Quit)
    }
}
