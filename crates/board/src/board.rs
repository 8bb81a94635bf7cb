//! Board and column types with the board's state transitions.
//!
//! This module defines the column/board structures and the three pure
//! operations the view layer invokes: toggling a task's done flag,
//! deleting a task, and moving a task between columns.
//!
//! Every operation is a total function from the current board to a new
//! board value. Unmatched ids degrade to a no-op returning a board equal
//! by value to the input; nothing is ever mutated in place.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::task::{Task, TaskId};

/// Unique identifier for a column.
///
/// # Examples
///
/// ```
/// use kanri_board::ColumnId;
///
/// let id = ColumnId(2);
/// assert_eq!(id.to_string(), "2");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ColumnId(pub u64);

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single column on the kanban board.
///
/// A named bucket holding an ordered sequence of tasks. A task id appears
/// in the task sequence of at most one column on the board.
///
/// # Examples
///
/// ```
/// use kanri_board::{Column, ColumnId};
///
/// let column = Column::new(ColumnId(1), "todo");
/// assert!(column.is_empty());
/// assert_eq!(column.title, "todo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier for this column.
    pub id: ColumnId,
    /// Display label for this column.
    pub title: String,
    /// Tasks currently in this column, ordered by position.
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates a new empty column with the given id and title.
    #[must_use]
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Creates a column pre-populated with the given tasks.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_board::{Column, ColumnId, Task, TaskId};
    ///
    /// let column = Column::with_tasks(ColumnId(1), "todo", vec![
    ///     Task::new(TaskId(1), "js"),
    /// ]);
    /// assert_eq!(column.len(), 1);
    /// ```
    #[must_use]
    pub fn with_tasks(id: ColumnId, title: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks,
        }
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns a reference to a task by id, if present in this column.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

/// The kanban board: the full ordered collection of columns.
///
/// Column order is display order and is stable across mutations (no
/// reorder operation exists). All state transitions go through
/// [`Board::set_task_done`], [`Board::delete_task`], and
/// [`Board::move_task`], each of which produces a new board value.
///
/// # Examples
///
/// ```
/// use kanri_board::{Board, Column, ColumnId, Task, TaskId};
///
/// let board = Board::new(vec![
///     Column::with_tasks(ColumnId(1), "todo", vec![Task::new(TaskId(1), "js")]),
///     Column::new(ColumnId(2), "in-progress"),
/// ]);
///
/// let board = board.move_task(ColumnId(1), ColumnId(2), TaskId(1));
/// assert!(board.column(ColumnId(1)).unwrap().is_empty());
/// assert_eq!(board.column(ColumnId(2)).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// The columns of the board, in display order.
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates a board from the given columns.
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Returns a reference to the column with the given id, if any.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Returns the total number of tasks across all columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_board::seed::seed_board;
    ///
    /// assert_eq!(seed_board().total_tasks(), 4);
    /// ```
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Returns a new board where the task's done flag equals `is_done`.
    ///
    /// Only the addressed task changes; every other task and column is
    /// carried over untouched. No-op when `column_id` or `task_id` does
    /// not match. Applying the same arguments twice yields the same board
    /// as applying them once.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_board::{ColumnId, TaskId, seed::seed_board};
    ///
    /// let board = seed_board().set_task_done(ColumnId(1), TaskId(2), false);
    /// let task = board.column(ColumnId(1)).unwrap().task(TaskId(2)).unwrap();
    /// assert!(!task.is_done);
    /// ```
    #[must_use]
    pub fn set_task_done(&self, column_id: ColumnId, task_id: TaskId, is_done: bool) -> Self {
        debug!(%column_id, %task_id, is_done, "set_task_done");
        let columns = self
            .columns
            .iter()
            .map(|column| {
                if column.id != column_id {
                    return column.clone();
                }
                Column {
                    id: column.id,
                    title: column.title.clone(),
                    tasks: column
                        .tasks
                        .iter()
                        .map(|task| {
                            if task.id != task_id {
                                task.clone()
                            } else {
                                task.clone().with_done(is_done)
                            }
                        })
                        .collect(),
                }
            })
            .collect();
        Self { columns }
    }

    /// Returns a new board with the task removed from the given column.
    ///
    /// The relative order of the remaining tasks is preserved. No-op when
    /// `column_id` or `task_id` does not match.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_board::{ColumnId, TaskId, seed::seed_board};
    ///
    /// let board = seed_board().delete_task(ColumnId(2), TaskId(3));
    /// assert_eq!(board.column(ColumnId(2)).unwrap().len(), 1);
    /// ```
    #[must_use]
    pub fn delete_task(&self, column_id: ColumnId, task_id: TaskId) -> Self {
        debug!(%column_id, %task_id, "delete_task");
        let columns = self
            .columns
            .iter()
            .map(|column| {
                if column.id != column_id {
                    return column.clone();
                }
                Column {
                    id: column.id,
                    title: column.title.clone(),
                    tasks: column
                        .tasks
                        .iter()
                        .filter(|task| task.id != task_id)
                        .cloned()
                        .collect(),
                }
            })
            .collect();
        Self { columns }
    }

    /// Returns a new board with the task moved from one column to another.
    ///
    /// The task is appended to the end of the destination column; its
    /// position within the destination is insertion order, not drop
    /// position. Columns other than source and destination are unchanged.
    ///
    /// No-op when `from == to`, when the task is not in the source column,
    /// or when either column id does not match an existing column. An
    /// unresolvable destination in particular is absorbed rather than
    /// dropping the task, and is logged as a warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_board::{ColumnId, TaskId, seed::seed_board};
    ///
    /// let board = seed_board().move_task(ColumnId(1), ColumnId(2), TaskId(1));
    /// assert_eq!(board.column(ColumnId(1)).unwrap().len(), 1);
    /// assert_eq!(board.column(ColumnId(2)).unwrap().len(), 3);
    /// ```
    #[must_use]
    pub fn move_task(&self, from: ColumnId, to: ColumnId, task_id: TaskId) -> Self {
        if from == to {
            return self.clone();
        }

        let Some(task) = self.column(from).and_then(|c| c.task(task_id)).cloned() else {
            return self.clone();
        };

        if self.column(to).is_none() {
            warn!(%from, %to, %task_id, "move destination does not exist; ignoring");
            return self.clone();
        }

        debug!(%from, %to, %task_id, "move_task");
        let columns = self
            .columns
            .iter()
            .map(|column| {
                if column.id == from {
                    Column {
                        id: column.id,
                        title: column.title.clone(),
                        tasks: column
                            .tasks
                            .iter()
                            .filter(|t| t.id != task_id)
                            .cloned()
                            .collect(),
                    }
                } else if column.id == to {
                    let mut tasks = column.tasks.clone();
                    tasks.push(task.clone());
                    Column {
                        id: column.id,
                        title: column.title.clone(),
                        tasks,
                    }
                } else {
                    column.clone()
                }
            })
            .collect();
        Self { columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_board;

    #[test]
    fn column_lookup_by_id() {
        let board = seed_board();

        assert_eq!(board.column(ColumnId(1)).map(|c| c.title.as_str()), Some("todo"));
        assert_eq!(
            board.column(ColumnId(2)).map(|c| c.title.as_str()),
            Some("in-progress")
        );
        assert!(board.column(ColumnId(99)).is_none());
    }

    #[test]
    fn set_task_done_changes_only_that_task() {
        let board = seed_board();
        let after = board.set_task_done(ColumnId(1), TaskId(2), false);

        let task = after.column(ColumnId(1)).unwrap().task(TaskId(2)).unwrap();
        assert!(!task.is_done);

        // Sibling task and the other column are untouched.
        assert!(after.column(ColumnId(1)).unwrap().task(TaskId(1)).unwrap().is_done);
        assert_eq!(after.column(ColumnId(2)), board.column(ColumnId(2)));
        assert_eq!(after.total_tasks(), board.total_tasks());
    }

    #[test]
    fn set_task_done_is_idempotent() {
        let board = seed_board();

        let once = board.set_task_done(ColumnId(1), TaskId(1), false);
        let twice = once.set_task_done(ColumnId(1), TaskId(1), false);

        assert_eq!(once, twice);
    }

    #[test]
    fn set_task_done_unknown_ids_is_noop() {
        let board = seed_board();

        assert_eq!(board.set_task_done(ColumnId(99), TaskId(1), false), board);
        assert_eq!(board.set_task_done(ColumnId(1), TaskId(99), false), board);
    }

    #[test]
    fn set_task_done_wrong_column_is_noop() {
        // Task 3 lives in column 2; addressing it via column 1 matches nothing.
        let board = seed_board();
        assert_eq!(board.set_task_done(ColumnId(1), TaskId(3), false), board);
    }

    #[test]
    fn delete_task_removes_exactly_one() {
        let board = seed_board();
        let after = board.delete_task(ColumnId(2), TaskId(3));

        assert_eq!(after.column(ColumnId(2)).unwrap().len(), 1);
        assert_eq!(
            after.column(ColumnId(2)).unwrap().tasks[0].id,
            TaskId(4)
        );
        assert_eq!(after.column(ColumnId(1)), board.column(ColumnId(1)));
    }

    #[test]
    fn delete_task_unknown_id_is_noop() {
        let board = seed_board();

        assert_eq!(board.delete_task(ColumnId(1), TaskId(99)), board);
        assert_eq!(board.delete_task(ColumnId(99), TaskId(1)), board);
    }

    #[test]
    fn delete_task_preserves_relative_order() {
        let board = Board::new(vec![Column::with_tasks(
            ColumnId(1),
            "todo",
            vec![
                Task::new(TaskId(1), "a"),
                Task::new(TaskId(2), "b"),
                Task::new(TaskId(3), "c"),
            ],
        )]);

        let after = board.delete_task(ColumnId(1), TaskId(2));
        let ids: Vec<TaskId> = after.columns[0].tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(1), TaskId(3)]);
    }

    #[test]
    fn move_task_appends_to_destination() {
        let board = seed_board();
        let after = board.move_task(ColumnId(1), ColumnId(2), TaskId(1));

        let todo: Vec<TaskId> = after.column(ColumnId(1)).unwrap().tasks.iter().map(|t| t.id).collect();
        let in_progress: Vec<TaskId> =
            after.column(ColumnId(2)).unwrap().tasks.iter().map(|t| t.id).collect();

        assert_eq!(todo, vec![TaskId(2)]);
        assert_eq!(in_progress, vec![TaskId(3), TaskId(4), TaskId(1)]);
        assert_eq!(after.total_tasks(), board.total_tasks());
    }

    #[test]
    fn move_task_same_column_is_noop() {
        let board = seed_board();
        assert_eq!(board.move_task(ColumnId(1), ColumnId(1), TaskId(1)), board);
    }

    #[test]
    fn move_task_unknown_task_is_noop() {
        let board = seed_board();
        assert_eq!(board.move_task(ColumnId(1), ColumnId(2), TaskId(99)), board);
    }

    #[test]
    fn move_task_task_not_in_source_is_noop() {
        let board = seed_board();
        // Task 3 is in column 2, not column 1.
        assert_eq!(board.move_task(ColumnId(1), ColumnId(2), TaskId(3)), board);
    }

    #[test]
    fn move_task_unknown_destination_keeps_task() {
        let board = seed_board();
        let after = board.move_task(ColumnId(1), ColumnId(99), TaskId(1));

        assert_eq!(after, board);
        assert!(after.column(ColumnId(1)).unwrap().task(TaskId(1)).is_some());
    }

    #[test]
    fn move_task_unknown_source_is_noop() {
        let board = seed_board();
        assert_eq!(board.move_task(ColumnId(99), ColumnId(1), TaskId(1)), board);
    }

    #[test]
    fn board_serialization_roundtrip() {
        let board = seed_board();
        let json = serde_json::to_string(&board).expect("serialize");
        let parsed: Board = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(board, parsed);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    /// Generates a board with 1-4 columns of 0-5 tasks each. Ids are
    /// globally unique, matching the board invariant.
    fn arb_board() -> impl Strategy<Value = Board> {
        proptest::collection::vec(proptest::collection::vec(any::<bool>(), 0..5), 1..4).prop_map(
            |shape| {
                let mut next_task = 1u64;
                let columns = shape
                    .into_iter()
                    .enumerate()
                    .map(|(i, dones)| {
                        let tasks = dones
                            .into_iter()
                            .map(|done| {
                                let task =
                                    Task::new(TaskId(next_task), format!("task {next_task}"))
                                        .with_done(done);
                                next_task += 1;
                                task
                            })
                            .collect();
                        Column::with_tasks(ColumnId(i as u64 + 1), format!("column {}", i + 1), tasks)
                    })
                    .collect();
                Board::new(columns)
            },
        )
    }

    /// Picks a (column id, task id) pair that exists on the board, or an
    /// unmatched pair when the board has no tasks.
    fn pick_task(board: &Board, index: usize) -> (ColumnId, TaskId) {
        let pairs: Vec<(ColumnId, TaskId)> = board
            .columns
            .iter()
            .flat_map(|c| c.tasks.iter().map(|t| (c.id, t.id)))
            .collect();
        if pairs.is_empty() {
            (ColumnId(999), TaskId(999))
        } else {
            pairs[index % pairs.len()]
        }
    }

    proptest! {
        /// set_task_done never changes the column structure or task count.
        #[test]
        fn set_task_done_preserves_structure(
            board in arb_board(),
            index in any::<usize>(),
            done in any::<bool>(),
        ) {
            let (column_id, task_id) = pick_task(&board, index);
            let after = board.set_task_done(column_id, task_id, done);

            prop_assert_eq!(after.total_tasks(), board.total_tasks());
            prop_assert_eq!(after.columns.len(), board.columns.len());
            for (before, after) in board.columns.iter().zip(after.columns.iter()) {
                prop_assert_eq!(before.id, after.id);
                prop_assert_eq!(&before.title, &after.title);
                let before_ids: Vec<TaskId> = before.tasks.iter().map(|t| t.id).collect();
                let after_ids: Vec<TaskId> = after.tasks.iter().map(|t| t.id).collect();
                prop_assert_eq!(before_ids, after_ids);
            }
        }

        /// Applying set_task_done twice equals applying it once.
        #[test]
        fn set_task_done_idempotent(
            board in arb_board(),
            index in any::<usize>(),
            done in any::<bool>(),
        ) {
            let (column_id, task_id) = pick_task(&board, index);
            let once = board.set_task_done(column_id, task_id, done);
            let twice = once.set_task_done(column_id, task_id, done);
            prop_assert_eq!(once, twice);
        }

        /// Deleting an existing task removes exactly one task from its
        /// column and leaves every other column equal.
        #[test]
        fn delete_task_removes_one(board in arb_board(), index in any::<usize>()) {
            let (column_id, task_id) = pick_task(&board, index);
            prop_assume!(board.column(column_id).is_some_and(|c| c.task(task_id).is_some()));

            let after = board.delete_task(column_id, task_id);

            prop_assert_eq!(after.total_tasks(), board.total_tasks() - 1);
            prop_assert_eq!(
                after.column(column_id).unwrap().len(),
                board.column(column_id).unwrap().len() - 1
            );
            for column in &board.columns {
                if column.id != column_id {
                    prop_assert_eq!(Some(column), after.column(column.id));
                }
            }
        }

        /// Deleting a task that does not exist returns an equal board.
        #[test]
        fn delete_unknown_task_is_noop(board in arb_board()) {
            prop_assert_eq!(board.delete_task(ColumnId(999), TaskId(999)), board.clone());
            let first = board.columns[0].id;
            prop_assert_eq!(board.delete_task(first, TaskId(999)), board);
        }

        /// Moving between distinct columns preserves the total task count
        /// and lands the task at the end of the destination.
        #[test]
        fn move_task_preserves_total(
            board in arb_board(),
            index in any::<usize>(),
            to_index in any::<usize>(),
        ) {
            let (from, task_id) = pick_task(&board, index);
            prop_assume!(board.column(from).is_some());
            let to = board.columns[to_index % board.columns.len()].id;
            prop_assume!(from != to);

            let after = board.move_task(from, to, task_id);

            prop_assert_eq!(after.total_tasks(), board.total_tasks());
            prop_assert!(after.column(from).unwrap().task(task_id).is_none());
            let dest = after.column(to).unwrap();
            prop_assert_eq!(dest.tasks.last().map(|t| t.id), Some(task_id));
        }

        /// A same-column move never changes the board.
        #[test]
        fn move_task_same_column_noop(board in arb_board(), index in any::<usize>()) {
            let (from, task_id) = pick_task(&board, index);
            prop_assert_eq!(board.move_task(from, from, task_id), board);
        }

        /// A move to a nonexistent destination never loses the task.
        #[test]
        fn move_task_bad_destination_noop(board in arb_board(), index in any::<usize>()) {
            let (from, task_id) = pick_task(&board, index);
            prop_assert_eq!(board.move_task(from, ColumnId(999), task_id), board);
        }
    }
}
