//! Shared board types for the kanri application.
//!
//! This crate defines the kanban board model and its state transitions,
//! along with the message types exchanged between the input layer and the
//! application state.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers and the `Task` struct
//! - [`board`]: Columns, the `Board` struct, and its three operations
//! - [`message`]: UI event messages, drag payloads, and drop targets
//! - [`seed`]: The fixed initial board value
//!
//! # Examples
//!
//! Every state transition is a total pure function producing a new board:
//!
//! ```
//! use kanri_board::{ColumnId, TaskId, seed::seed_board};
//!
//! let board = seed_board();
//!
//! // Uncheck a task.
//! let board = board.set_task_done(ColumnId(1), TaskId(1), false);
//!
//! // Move it to the other column; it lands at the end.
//! let board = board.move_task(ColumnId(1), ColumnId(2), TaskId(1));
//! assert_eq!(board.column(ColumnId(2)).unwrap().tasks.last().unwrap().id, TaskId(1));
//!
//! // Unknown ids are absorbed as no-ops.
//! let same = board.delete_task(ColumnId(9), TaskId(9));
//! assert_eq!(same, board);
//! ```

pub mod board;
pub mod message;
pub mod seed;
pub mod task;

// Re-export primary types at crate root for convenience
pub use board::{Board, Column, ColumnId};
pub use message::{DragPayload, DropTarget, Message};
pub use task::{Task, TaskId};
