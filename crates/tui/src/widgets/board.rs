//! Board rendering widget.
//!
//! This module provides functions for rendering the complete board with
//! its columns arranged horizontally.

use kanri_board::{Board, DragPayload};
use ratatui::{buffer::Buffer, layout::Rect};

use crate::layout::column_areas;

use super::column::{ColumnPosition, render_column};

/// Renders the complete board to the buffer.
///
/// Columns are arranged horizontally with equal widths, the focused
/// column and selected task highlighted, and the dragged card (if any)
/// styled distinctly.
///
/// # Arguments
///
/// * `board` - The board containing all columns and tasks
/// * `selected_column` - Index of the currently focused column
/// * `selected_task` - Index of the selected task within the focused column, if any
/// * `drag` - The drag in flight, if any
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Layout
///
/// ```text
/// +----------------+----------------+
/// | todo (2)       | in-progress (2)|
/// | [x] js         | [x] react      |
/// | [x] css        | [x] typescript |
/// +----------------+----------------+
/// ```
///
/// # Examples
///
/// ```
/// use kanri_board::seed::seed_board;
/// use kanri_tui::widgets::render_board;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let board = seed_board();
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&board, 0, Some(0), None, area, &mut buf);
/// ```
pub fn render_board(
    board: &Board,
    selected_column: usize,
    selected_task: Option<usize>,
    drag: Option<DragPayload>,
    area: Rect,
    buf: &mut Buffer,
) {
    let areas = column_areas(area, board.columns.len());
    let count = board.columns.len();

    for (i, (column, col_area)) in board.columns.iter().zip(areas).enumerate() {
        let is_focused = selected_column == i;

        // Only show task selection in the focused column
        let task_selection = if is_focused { selected_task } else { None };

        let position = if i == 0 {
            ColumnPosition::First
        } else if i == count - 1 {
            ColumnPosition::Last
        } else {
            ColumnPosition::Middle
        };

        // Whether the previous column is focused (for shared border coloring)
        let prev_focused = i > 0 && selected_column == i - 1;

        render_column(
            column,
            is_focused,
            task_selection,
            drag,
            col_area,
            buf,
            position,
            prev_focused,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use kanri_board::seed::seed_board;

    #[test]
    fn render_seed_board_shows_all_columns() {
        let board = seed_board();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        render_board(&board, 0, None, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("todo (2)"));
        assert!(content.contains("in-progress (2)"));
        assert!(content.contains("[x] js"));
        assert!(content.contains("[x] typescript"));
    }

    #[test]
    fn render_board_narrow_terminal() {
        let board = seed_board();
        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);

        // Should not panic with a narrow area
        render_board(&board, 0, None, None, area, &mut buf);
    }

    #[test]
    fn render_empty_board_is_blank() {
        let board = kanri_board::Board::default();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        render_board(&board, 0, None, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.trim().is_empty());
    }
}
