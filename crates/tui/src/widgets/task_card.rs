//! Task card rendering widget.
//!
//! This module provides functions for rendering individual task cards
//! with a checkbox marker and color coding based on the done flag.

use kanri_board::Task;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Returns the color associated with a task's done flag.
///
/// Checked-off tasks render green, pending tasks gray.
///
/// # Examples
///
/// ```
/// use kanri_tui::widgets::done_color;
/// use ratatui::style::Color;
///
/// assert_eq!(done_color(true), Color::Green);
/// assert_eq!(done_color(false), Color::DarkGray);
/// ```
#[must_use]
pub const fn done_color(is_done: bool) -> Color {
    if is_done { Color::Green } else { Color::DarkGray }
}

/// Returns a brighter version of the done color for selected cards.
#[must_use]
const fn done_color_bright(is_done: bool) -> Color {
    if is_done { Color::LightGreen } else { Color::Gray }
}

/// Returns the checkbox marker for a task.
///
/// # Examples
///
/// ```
/// use kanri_board::{Task, TaskId};
/// use kanri_tui::widgets::checkbox_marker;
///
/// assert_eq!(checkbox_marker(&Task::new(TaskId(1), "js").with_done(true)), "[x]");
/// assert_eq!(checkbox_marker(&Task::new(TaskId(1), "js")), "[ ]");
/// ```
#[must_use]
pub const fn checkbox_marker(task: &Task) -> &'static str {
    if task.is_done { "[x]" } else { "[ ]" }
}

/// Renders a task card to the buffer.
///
/// The card displays a checkbox marker and the task title inside a
/// bordered box. The border color reflects the done flag, brighter when
/// the card is selected; the card being dragged renders magenta.
///
/// # Layout
///
/// ```text
/// +----------------+
/// | [x] title      |
/// +----------------+
/// ```
///
/// # Examples
///
/// ```
/// use kanri_board::{Task, TaskId};
/// use kanri_tui::widgets::render_task_card;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let task = Task::new(TaskId(1), "js").with_done(true);
/// let area = Rect::new(0, 0, 20, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, false, false, area, &mut buf);
/// ```
pub fn render_task_card(
    task: &Task,
    is_selected: bool,
    is_dragged: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    // Skip rendering if area is too small
    if area.width < 6 || area.height < 3 {
        return;
    }

    let (border_color, title_style) = if is_dragged {
        (
            Color::Magenta,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
    } else if is_selected {
        (
            done_color_bright(task.is_done),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    } else {
        (done_color(task.is_done), Style::default().fg(Color::White))
    };

    // Truncate title to fit next to the checkbox marker
    let inner_width = area.width.saturating_sub(2) as usize;
    let title = truncate_string(&task.title, inner_width.saturating_sub(4));

    let content = Line::from(vec![
        Span::styled(checkbox_marker(task), Style::default().fg(border_color)),
        Span::raw(" "),
        Span::styled(title, title_style),
    ]);

    let card = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    card.render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
