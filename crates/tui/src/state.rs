//! Application state management.
//!
//! This module defines the state container owned by the composition root.
//! The board value itself only ever changes through the three operations
//! on [`Board`]; everything else here is view state: selection, the
//! in-flight drag payload, and the help overlay flag.

use kanri_board::{Board, Column, ColumnId, DragPayload, Task, TaskId};

/// The application state.
///
/// Contains the board being displayed plus all view-side state: which
/// column and task are selected, whether a drag is in flight, and whether
/// the help overlay is shown.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The board being displayed.
    pub board: Board,
    /// Index of the currently selected column.
    pub selected_column: usize,
    /// Index of the selected task within the current column, if any.
    pub selected_task: Option<usize>,
    /// The drag in flight, if any. Carries the origin column and task id
    /// captured when the drag started.
    pub drag: Option<DragPayload>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Creates a new application state with the given board.
    ///
    /// Starts with the first column focused, nothing selected, and no
    /// drag in flight.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_board::seed::seed_board;
    /// use kanri_tui::AppState;
    ///
    /// let state = AppState::new(seed_board());
    /// assert_eq!(state.selected_column, 0);
    /// assert!(state.drag.is_none());
    /// ```
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            selected_column: 0,
            selected_task: None,
            drag: None,
            help_visible: false,
        }
    }

    /// Returns a reference to the currently selected column, if the board
    /// has any columns.
    #[must_use]
    pub fn selected_column_ref(&self) -> Option<&Column> {
        self.board.columns.get(self.selected_column)
    }

    /// Returns the id of the currently selected column, if any.
    #[must_use]
    pub fn selected_column_id(&self) -> Option<ColumnId> {
        self.selected_column_ref().map(|c| c.id)
    }

    /// Returns a reference to the currently selected task, if any.
    #[must_use]
    pub fn selected_task_ref(&self) -> Option<&Task> {
        let column = self.selected_column_ref()?;
        column.tasks.get(self.selected_task?)
    }

    /// Returns the drag payload for the current selection, if a task is
    /// selected.
    #[must_use]
    pub fn selected_payload(&self) -> Option<DragPayload> {
        let origin = self.selected_column_id()?;
        let task = self.selected_task_ref()?.id;
        Some(DragPayload { origin, task })
    }

    /// Moves the focused card selection to the given column and task ids.
    ///
    /// Used when a mouse press lands on a card, so keyboard state follows
    /// the pointer. No-op when the ids are not on the board.
    pub fn select_card(&mut self, column: ColumnId, task: TaskId) {
        let Some(column_idx) = self.board.columns.iter().position(|c| c.id == column) else {
            return;
        };
        let Some(task_idx) = self.board.columns[column_idx]
            .tasks
            .iter()
            .position(|t| t.id == task)
        else {
            return;
        };
        self.selected_column = column_idx;
        self.selected_task = Some(task_idx);
    }

    /// Clears the task selection.
    pub fn clear_selection(&mut self) {
        self.selected_task = None;
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }

    /// Moves the column selection to the left, wrapping around.
    pub fn navigate_left(&mut self) {
        let count = self.board.columns.len();
        if count == 0 {
            return;
        }
        self.selected_column = if self.selected_column > 0 {
            self.selected_column - 1
        } else {
            count - 1
        };
        self.clamp_task_selection();
    }

    /// Moves the column selection to the right, wrapping around.
    pub fn navigate_right(&mut self) {
        let count = self.board.columns.len();
        if count == 0 {
            return;
        }
        self.selected_column = if self.selected_column + 1 < count {
            self.selected_column + 1
        } else {
            0
        };
        self.clamp_task_selection();
    }

    /// Moves the task selection up within the current column, wrapping.
    pub fn navigate_up(&mut self) {
        let Some(column) = self.selected_column_ref() else {
            self.selected_task = None;
            return;
        };
        if column.is_empty() {
            self.selected_task = None;
            return;
        }

        match self.selected_task {
            Some(idx) if idx > 0 => {
                self.selected_task = Some(idx - 1);
            }
            Some(_) => {
                // Wrap to bottom
                self.selected_task = Some(column.len().saturating_sub(1));
            }
            None => {
                self.selected_task = Some(0);
            }
        }
    }

    /// Moves the task selection down within the current column, wrapping.
    pub fn navigate_down(&mut self) {
        let Some(column) = self.selected_column_ref() else {
            self.selected_task = None;
            return;
        };
        if column.is_empty() {
            self.selected_task = None;
            return;
        }

        let max_idx = column.len().saturating_sub(1);
        match self.selected_task {
            Some(idx) if idx < max_idx => {
                self.selected_task = Some(idx + 1);
            }
            Some(_) => {
                // Wrap to top
                self.selected_task = Some(0);
            }
            None => {
                self.selected_task = Some(0);
            }
        }
    }

    /// Clamps the task selection after the board or column focus changed.
    ///
    /// Keeps the selection inside the focused column's bounds, clearing
    /// it when the column is empty.
    pub fn clamp_task_selection(&mut self) {
        let len = self.selected_column_ref().map_or(0, Column::len);
        match self.selected_task {
            Some(_) if len == 0 => self.selected_task = None,
            Some(idx) if idx >= len => self.selected_task = Some(len - 1),
            _ => {}
        }
    }
}
