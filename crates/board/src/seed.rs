//! Fixed seed data used at process start.
//!
//! The board always starts from the same literal value; there is no
//! persistence and no configuration hook for the initial state.

use crate::board::{Board, Column, ColumnId};
use crate::task::{Task, TaskId};

/// Returns the board the application starts with.
///
/// Two columns, four tasks, all initially checked off:
///
/// - **todo**: "js", "css"
/// - **in-progress**: "react", "typescript"
///
/// # Examples
///
/// ```
/// use kanri_board::{ColumnId, seed::seed_board};
///
/// let board = seed_board();
/// assert_eq!(board.columns.len(), 2);
/// assert_eq!(board.column(ColumnId(1)).unwrap().len(), 2);
/// ```
#[must_use]
pub fn seed_board() -> Board {
    Board::new(vec![
        Column::with_tasks(
            ColumnId(1),
            "todo",
            vec![
                Task::new(TaskId(1), "js").with_done(true),
                Task::new(TaskId(2), "css").with_done(true),
            ],
        ),
        Column::with_tasks(
            ColumnId(2),
            "in-progress",
            vec![
                Task::new(TaskId(3), "react").with_done(true),
                Task::new(TaskId(4), "typescript").with_done(true),
            ],
        ),
    ])
}
