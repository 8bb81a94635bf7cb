//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and
//! rendering. All board mutations funnel through [`App::update`], which
//! maps messages onto the three board operations.

use crossterm::event::Event;
use kanri_board::{Board, DropTarget, Message};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::debug;

use crate::{
    AppState,
    event::{KeyContext, key_to_message, mouse_to_message, poll_event},
    layout::{BoardLayout, screen_chunks},
    terminal::AppTerminal,
    widgets::{
        render_board, render_delete_zone, render_help_overlay, render_status_bar,
        render_status_bar_with_message,
    },
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given board.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_board::seed::seed_board;
    /// use kanri_tui::App;
    ///
    /// let app = App::new(seed_board());
    /// ```
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            state: AppState::new(board),
            should_quit: false,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, most messages are intercepted to
    /// dismiss the help instead of their normal action. Only `Quit` and
    /// `ToggleHelp` work normally when help is shown.
    pub fn update(&mut self, msg: Message) {
        // When help is visible, most keys should dismiss it
        if self.state.help_visible {
            match msg {
                Message::Quit => {
                    self.should_quit = true;
                }
                Message::ToggleHelp | Message::Escape => {
                    self.state.toggle_help();
                }
                // Any other key dismisses help
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::Escape => {
                // Contextual escape: cancel the drag if one is in flight,
                // otherwise clear the selection
                if self.state.drag.is_some() {
                    self.state.drag = None;
                } else {
                    self.state.clear_selection();
                }
            }
            Message::NavigateLeft => {
                self.state.navigate_left();
            }
            Message::NavigateRight => {
                self.state.navigate_right();
            }
            Message::NavigateUp => {
                self.state.navigate_up();
            }
            Message::NavigateDown => {
                self.state.navigate_down();
            }
            Message::ToggleDone => {
                // A click lands here too, so an armed drag is released
                // before toggling
                self.state.drag = None;
                let target = self
                    .state
                    .selected_payload()
                    .zip(self.state.selected_task_ref().map(|t| t.is_done));
                if let Some((payload, done)) = target {
                    self.state.board =
                        self.state
                            .board
                            .set_task_done(payload.origin, payload.task, !done);
                }
            }
            Message::Grab => {
                if let Some(payload) = self.state.selected_payload() {
                    debug!(origin = %payload.origin, task = %payload.task, "grab");
                    self.state.drag = Some(payload);
                }
            }
            Message::BeginDrag(payload) => {
                // Keyboard selection follows the pointer
                self.state.select_card(payload.origin, payload.task);
                self.state.drag = Some(payload);
            }
            Message::Drop(target) => {
                if let Some(payload) = self.state.drag.take() {
                    debug!(origin = %payload.origin, task = %payload.task, ?target, "drop");
                    match target {
                        Some(DropTarget::DeleteZone) => {
                            self.state.board =
                                self.state.board.delete_task(payload.origin, payload.task);
                        }
                        Some(DropTarget::Column(to)) => {
                            self.state.board =
                                self.state.board.move_task(payload.origin, to, payload.task);
                        }
                        // Released outside every drop zone: cancelled
                        None => {}
                    }
                    self.state.clamp_task_selection();
                }
            }
            Message::ToggleHelp => {
                self.state.toggle_help();
            }
        }
    }

    /// Renders the application UI to the given frame.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        let Some(chunks) = screen_chunks(area) else {
            self.render_too_small(frame, area);
            return;
        };

        self.render_header(frame, chunks.header);

        let buf = frame.buffer_mut();
        render_delete_zone(self.state.drag.is_some(), chunks.delete_zone, buf);
        render_board(
            &self.state.board,
            self.state.selected_column,
            self.state.selected_task,
            self.state.drag,
            chunks.board,
            buf,
        );

        match self.drag_status() {
            Some(message) => render_status_bar_with_message(&message, chunks.status_bar, buf),
            None => render_status_bar(chunks.status_bar, buf),
        }

        // Render help overlay on top if visible
        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application. It
    /// polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kanri_board::seed::seed_board;
    /// use kanri_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(seed_board());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            // Render
            terminal.draw(|frame| self.view(frame))?;

            // Poll for events
            match poll_event()? {
                Some(Event::Key(key)) => {
                    let ctx = KeyContext {
                        drag_active: self.state.drag.is_some(),
                        selected_column: self.state.selected_column_id(),
                    };
                    if let Some(msg) = key_to_message(key, ctx) {
                        self.update(msg);
                    }
                }
                Some(Event::Mouse(mouse)) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    let layout = BoardLayout::compute(
                        &self.state.board,
                        area,
                        self.state.selected_column,
                        self.state.selected_task,
                    );
                    if let Some(msg) = mouse_to_message(mouse, &layout, self.state.drag) {
                        self.update(msg);
                    }
                }
                _ => {}
            }

            // Check for quit
            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Returns the drag feedback message for the status bar, if a drag is
    /// in flight.
    fn drag_status(&self) -> Option<String> {
        let payload = self.state.drag?;
        let title = self
            .state
            .board
            .column(payload.origin)
            .and_then(|c| c.task(payload.task))
            .map_or("task", |t| t.title.as_str());
        Some(format!(
            "Moving '{title}': g/Enter drop on column, d delete, Esc cancel"
        ))
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Split inner area: title left, help cue right
        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "kanri",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("My Management", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Renders a placeholder when the terminal is below the size minimums.
    fn render_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = Paragraph::new("Terminal too small")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(message, area);
    }
}
