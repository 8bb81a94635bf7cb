//! Delete drop zone widget.
//!
//! This module renders the bar a dragged task can be released onto to
//! delete it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Renders the delete drop zone.
///
/// The zone stays dimmed while no drag is in flight and lights up red
/// when a task is being dragged, signalling that releasing here deletes
/// the task.
///
/// # Examples
///
/// ```
/// use kanri_tui::widgets::render_delete_zone;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_delete_zone(false, area, &mut buf);
/// ```
pub fn render_delete_zone(drag_active: bool, area: Rect, buf: &mut Buffer) {
    let (border_style, text_style) = if drag_active {
        (
            Style::default().fg(Color::Red),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let zone = Paragraph::new(Line::from(Span::styled("Drop here to delete", text_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );

    zone.render(area, buf);
}
