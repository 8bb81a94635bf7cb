//! Column rendering widget.
//!
//! This module provides functions for rendering individual board columns
//! with their headers and task card lists.

use kanri_board::{Column, DragPayload};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::layout::{TASK_CARD_HEIGHT, scroll_offset};

use super::task_card::render_task_card;

/// Position of a column in the horizontal layout.
///
/// Used to determine which borders to render for each column, enabling
/// collapsed borders between adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// First (leftmost) column - has left border with rounded corners.
    First,
    /// Middle columns - has left border with T-connectors.
    Middle,
    /// Last (rightmost) column - has both borders, rounded on right.
    Last,
}

/// Border set for the first (leftmost) column: rounded corners on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle columns: T-connectors on left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last (rightmost) column: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Renders a single column to the buffer.
///
/// A column displays its header (title and task count) followed by a
/// vertical list of task cards. Empty columns show a placeholder message.
/// While a drag is in flight the focused column is the drop destination
/// for a keyboard drop, and the dragged task's card renders magenta
/// wherever it is.
///
/// # Layout
///
/// ```text
/// +----------------+
/// | todo (2)       |  <- Header with title and count
/// | +------------+ |
/// | | [x] js     | |  <- Task cards
/// | +------------+ |
/// | +------------+ |
/// | | [x] css    | |
/// | +------------+ |
/// +----------------+
/// ```
///
/// # Examples
///
/// ```
/// use kanri_board::{Column, ColumnId, Task, TaskId};
/// use kanri_tui::widgets::{ColumnPosition, render_column};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let column = Column::with_tasks(ColumnId(1), "todo", vec![Task::new(TaskId(1), "js")]);
/// let area = Rect::new(0, 0, 20, 15);
/// let mut buf = Buffer::empty(area);
///
/// render_column(&column, true, Some(0), None, area, &mut buf, ColumnPosition::First, false);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn render_column(
    column: &Column,
    is_focused: bool,
    selected_idx: Option<usize>,
    drag: Option<DragPayload>,
    area: Rect,
    buf: &mut Buffer,
    position: ColumnPosition,
    prev_focused: bool,
) {
    // For the left border (shared with the previous column), highlight if
    // either column is focused.
    let left_border_highlighted = is_focused || prev_focused;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = format!("{} ({})", column.title, column.len());
    let title_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Collapse borders between adjacent columns: every column draws its
    // left edge, only the last column draws a right edge too.
    let borders = match position {
        ColumnPosition::First | ColumnPosition::Middle => {
            Borders::TOP | Borders::BOTTOM | Borders::LEFT
        }
        ColumnPosition::Last => Borders::ALL,
    };

    let border_set = match position {
        ColumnPosition::First => BORDER_SET_FIRST,
        ColumnPosition::Middle => BORDER_SET_MIDDLE,
        ColumnPosition::Last => BORDER_SET_LAST,
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style);

    let inner_area = block.inner(area);
    block.render(area, buf);

    // If the previous column is focused but this one is not, recolor the
    // shared left border since the block was rendered gray.
    if left_border_highlighted && !is_focused && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        let x = area.x;
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    if column.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    // Render the visible slice of cards, keeping the selection on screen.
    let visible = ((inner_area.height / TASK_CARD_HEIGHT) as usize).max(1);
    let offset = scroll_offset(if is_focused { selected_idx } else { None }, column.len(), visible);

    for (i, task) in column.tasks.iter().skip(offset).take(visible).enumerate() {
        let task_idx = offset + i;
        let y = inner_area.y.saturating_add(i as u16 * TASK_CARD_HEIGHT);
        let bottom = inner_area.y.saturating_add(inner_area.height);
        if y >= bottom {
            break;
        }
        let card_area = Rect {
            x: inner_area.x,
            y,
            width: inner_area.width,
            height: TASK_CARD_HEIGHT.min(bottom - y),
        };

        let is_selected = is_focused && selected_idx == Some(task_idx);
        let is_dragged = drag.is_some_and(|d| d.task == task.id);

        render_task_card(task, is_selected, is_dragged, card_area, buf);
    }
}

/// Renders a placeholder message for empty columns.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use kanri_board::{ColumnId, Task, TaskId};

    #[test]
    fn render_empty_column() {
        let column = Column::new(ColumnId(1), "todo");
        let area = Rect::new(0, 0, 20, 15);
        let mut buf = Buffer::empty(area);

        render_column(
            &column,
            false,
            None,
            None,
            area,
            &mut buf,
            ColumnPosition::First,
            false,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("todo (0)"));
        assert!(content.contains("No tasks"));
    }

    #[test]
    fn render_column_with_tasks() {
        let column = Column::with_tasks(
            ColumnId(2),
            "in-progress",
            vec![
                Task::new(TaskId(3), "react").with_done(true),
                Task::new(TaskId(4), "typescript"),
            ],
        );
        let area = Rect::new(0, 0, 25, 15);
        let mut buf = Buffer::empty(area);

        render_column(
            &column,
            true,
            Some(0),
            None,
            area,
            &mut buf,
            ColumnPosition::Middle,
            false,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("in-progress (2)"));
        assert!(content.contains("[x] react"));
        assert!(content.contains("[ ] typescript"));
    }

    #[test]
    fn render_column_scrolls_to_selection() {
        let tasks: Vec<Task> = (1..=8)
            .map(|i| Task::new(TaskId(i), format!("task {i}")))
            .collect();
        let column = Column::with_tasks(ColumnId(1), "todo", tasks);
        // Room for 4 cards (13 inner rows / 3).
        let area = Rect::new(0, 0, 25, 15);
        let mut buf = Buffer::empty(area);

        render_column(
            &column,
            true,
            Some(7),
            None,
            area,
            &mut buf,
            ColumnPosition::First,
            false,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("task 8"));
        assert!(!content.contains("task 1"));
    }
}
