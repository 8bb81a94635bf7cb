//! Status bar rendering widget.
//!
//! This module provides functions for rendering the footer status bar
//! with keybinding hints and drag feedback.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the status bar with keybinding hints.
///
/// # Layout
///
/// ```text
/// +----------------------------------------------------------+
/// | Ctrl+C Quit  ←→↑↓ Navigate  Space Toggle  g Grab  ? Help |
/// +----------------------------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use kanri_tui::widgets::render_status_bar;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(area, &mut buf);
/// ```
pub fn render_status_bar(area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let hints = Line::from(vec![
        Span::styled("Ctrl+C", key_style),
        Span::styled(" Quit  ", text_style),
        Span::styled("←→↑↓", key_style),
        Span::styled(" Navigate  ", text_style),
        Span::styled("Space", key_style),
        Span::styled(" Toggle  ", text_style),
        Span::styled("g", key_style),
        Span::styled(" Grab  ", text_style),
        Span::styled("?", key_style),
        Span::styled(" Help", text_style),
    ]);

    let status_bar = Paragraph::new(hints).block(Block::default().borders(Borders::ALL));

    status_bar.render(area, buf);
}

/// Renders the status bar with a custom message in place of the hints.
///
/// Used while a drag is in flight to show what is being moved and how to
/// drop or cancel it.
///
/// # Examples
///
/// ```
/// use kanri_tui::widgets::render_status_bar_with_message;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar_with_message("Moving 'js'", area, &mut buf);
/// ```
pub fn render_status_bar_with_message(message: &str, area: Rect, buf: &mut Buffer) {
    let message_style = Style::default().fg(Color::Cyan);

    let line = Line::from(Span::styled(message, message_style));
    let status_bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL));

    status_bar.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn status_bar_shows_hints() {
        let area = Rect::new(0, 0, 70, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Quit"));
        assert!(content.contains("Navigate"));
        assert!(content.contains("Toggle"));
        assert!(content.contains("Grab"));
    }

    #[test]
    fn status_bar_with_message_shows_message() {
        let area = Rect::new(0, 0, 70, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar_with_message("Moving 'js'", area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Moving 'js'"));
        assert!(!content.contains("Navigate"));
    }
}
