//! Widget components for the kanri TUI.
//!
//! This module provides reusable rendering functions for the board UI,
//! organized into focused submodules for each visual component.
//!
//! The widget system follows a functional rendering approach where each
//! widget is a pure function that renders state to a buffer. This enables
//! easy testing and composition.
//!
//! # Modules
//!
//! - [`board`]: Renders the complete board with its columns
//! - [`column`]: Renders individual columns with task lists
//! - [`task_card`]: Renders checkbox task cards
//! - [`delete_zone`]: Renders the drag-to-delete bar
//! - [`status_bar`]: Renders the footer with keybinding hints
//! - [`help`]: Renders the help overlay
//!
//! # Example
//!
//! ```
//! use kanri_board::seed::seed_board;
//! use kanri_tui::widgets;
//! use ratatui::{buffer::Buffer, layout::Rect};
//!
//! let board = seed_board();
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&board, 0, Some(0), None, area, &mut buf);
//! ```

pub mod board;
pub mod column;
pub mod delete_zone;
pub mod help;
pub mod status_bar;
pub mod task_card;

// Re-export primary rendering functions for convenience
pub use board::render_board;
pub use column::{ColumnPosition, render_column};
pub use delete_zone::render_delete_zone;
pub use help::render_help_overlay;
pub use status_bar::{render_status_bar, render_status_bar_with_message};
pub use task_card::{checkbox_marker, done_color, render_task_card};

#[cfg(test)]
mod tests;
