//! Terminal UI for the kanri application.
//!
//! This crate provides a Ratatui-based terminal interface for an
//! interactive kanban board: checkbox toggling on task cards, dragging
//! tasks between columns, and dragging onto a delete zone.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state management
//! - [`layout`]: Screen geometry and hit-testing
//! - [`event`]: Event polling and key/mouse mappings
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`widgets`]: Rendering functions for each visual component
//!
//! # Example
//!
//! ```no_run
//! use kanri_board::seed::seed_board;
//! use kanri_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(seed_board());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::AppState;
