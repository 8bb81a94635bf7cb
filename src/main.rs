//! kanri - an interactive kanban board for the terminal.
//!
//! This is the main binary that launches the TUI application.

use kanri_board::seed::seed_board;
use kanri_tui::{App, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Create app with the seed board
    let mut app = App::new(seed_board());

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Initializes file-based logging when `KANRI_LOG` names a log file.
///
/// Logging to stderr would corrupt the alternate screen, so tracing is
/// only wired up when the user opts in with a file path. `RUST_LOG`
/// controls the filter as usual.
fn init_logging() -> anyhow::Result<()> {
    let Ok(path) = std::env::var("KANRI_LOG") else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!(%path, "logging initialized");
    Ok(())
}
