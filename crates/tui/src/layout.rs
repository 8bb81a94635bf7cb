//! Layout measurements and hit-testing for the TUI.
//!
//! This module centralizes the geometry of the screen: where the header,
//! delete zone, board, and status bar live, and where every column and
//! visible task card is drawn. Both the rendering path and the mouse
//! routing path consume the same computation, so a release coordinate
//! always resolves to the region the user sees under the cursor.

use kanri_board::{Board, ColumnId, DropTarget, TaskId};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the delete drop zone in rows.
pub const DELETE_ZONE_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of each task card in rows.
///
/// This includes the border (2 rows) and one content row for the
/// checkbox and title.
pub const TASK_CARD_HEIGHT: u16 = 3;

/// Minimum terminal width for useful rendering.
///
/// Each column needs at least 12 characters for borders and a readable
/// truncated title.
pub const MIN_WIDTH: u16 = 24;

/// Minimum terminal height for useful rendering.
///
/// Header, delete zone, and status bar take 9 rows; the board needs at
/// least one card row plus its own borders below that.
pub const MIN_HEIGHT: u16 = 14;

/// The vertical screen regions of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenChunks {
    /// Header bar with the application title.
    pub header: Rect,
    /// The "drop here to delete" zone.
    pub delete_zone: Rect,
    /// The board area holding the columns.
    pub board: Rect,
    /// Footer with keybinding hints.
    pub status_bar: Rect,
}

/// Splits the full frame into the application's vertical regions.
///
/// Returns `None` when the terminal is too small to render anything
/// useful; callers should show a placeholder instead.
#[must_use]
pub fn screen_chunks(area: Rect) -> Option<ScreenChunks> {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        return None;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(DELETE_ZONE_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    Some(ScreenChunks {
        header: chunks[0],
        delete_zone: chunks[1],
        board: chunks[2],
        status_bar: chunks[3],
    })
}

/// Splits the board area into equal-width column areas.
#[must_use]
pub fn column_areas(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Ratio(1, count as u32))
        .collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Calculates the scroll offset that keeps the selected card visible.
#[must_use]
pub fn scroll_offset(selected_idx: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total <= visible {
        return 0;
    }

    let max_offset = total.saturating_sub(visible);
    if selected < visible / 2 {
        0
    } else {
        (selected.saturating_sub(visible / 2)).min(max_offset)
    }
}

/// A visible task card's screen region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRegion {
    /// The task drawn in this region.
    pub task: TaskId,
    /// The card's rectangle.
    pub area: Rect,
}

/// A column's screen region with its visible cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRegion {
    /// The column drawn in this region.
    pub id: ColumnId,
    /// The column's full rectangle, including borders.
    pub area: Rect,
    /// The visible task cards, top to bottom.
    pub cards: Vec<CardRegion>,
}

/// The hit-testable regions of one rendered frame.
///
/// # Examples
///
/// ```
/// use kanri_board::seed::seed_board;
/// use kanri_tui::layout::BoardLayout;
/// use ratatui::layout::Rect;
///
/// let board = seed_board();
/// let layout = BoardLayout::compute(&board, Rect::new(0, 0, 80, 24), 0, None);
/// assert_eq!(layout.columns.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardLayout {
    /// The delete drop zone region.
    pub delete_zone: Rect,
    /// One region per column, in display order.
    pub columns: Vec<ColumnRegion>,
}

impl BoardLayout {
    /// Computes the layout for the given board in the given frame area.
    ///
    /// `selected_column` and `selected_task` feed the scroll offset of the
    /// focused column, mirroring what the renderer draws. An area below
    /// the size minimums yields an empty layout with no hit regions.
    #[must_use]
    pub fn compute(
        board: &Board,
        area: Rect,
        selected_column: usize,
        selected_task: Option<usize>,
    ) -> Self {
        let Some(chunks) = screen_chunks(area) else {
            return Self::default();
        };

        let areas = column_areas(chunks.board, board.columns.len());
        let last = board.columns.len().saturating_sub(1);
        let columns = board
            .columns
            .iter()
            .zip(areas)
            .enumerate()
            .map(|(i, (column, col_area))| {
                let selected = if i == selected_column { selected_task } else { None };
                let inner = column_inner(col_area, i == last);
                let cards = card_regions(column.tasks.iter().map(|t| t.id), inner, selected);
                ColumnRegion {
                    id: column.id,
                    area: col_area,
                    cards,
                }
            })
            .collect();

        Self {
            delete_zone: chunks.delete_zone,
            columns,
        }
    }

    /// Returns the task card under the given position, if any.
    #[must_use]
    pub fn card_at(&self, x: u16, y: u16) -> Option<(ColumnId, TaskId)> {
        let pos = Position::new(x, y);
        self.columns.iter().find_map(|column| {
            column
                .cards
                .iter()
                .find(|card| card.area.contains(pos))
                .map(|card| (column.id, card.task))
        })
    }

    /// Resolves the drop target under the given position, if any.
    ///
    /// The delete zone wins over columns (the regions never overlap, but
    /// the check order documents the intent).
    #[must_use]
    pub fn drop_target_at(&self, x: u16, y: u16) -> Option<DropTarget> {
        let pos = Position::new(x, y);
        if self.delete_zone.contains(pos) {
            return Some(DropTarget::DeleteZone);
        }
        self.columns
            .iter()
            .find(|column| column.area.contains(pos))
            .map(|column| DropTarget::Column(column.id))
    }
}

/// Returns the content area inside a column's borders.
///
/// Columns share their vertical borders: every column draws a left
/// border, and only the last column draws a right border as well.
#[must_use]
pub fn column_inner(area: Rect, is_last: bool) -> Rect {
    let horizontal = if is_last { 2 } else { 1 };
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(horizontal),
        height: area.height.saturating_sub(2),
    }
}

/// Lays out card regions for the visible slice of a column's tasks.
fn card_regions(
    tasks: impl ExactSizeIterator<Item = TaskId>,
    inner: Rect,
    selected: Option<usize>,
) -> Vec<CardRegion> {
    let total = tasks.len();
    let visible = ((inner.height / TASK_CARD_HEIGHT) as usize).max(1);
    let offset = scroll_offset(selected, total, visible);

    tasks
        .skip(offset)
        .take(visible.min(total))
        .enumerate()
        .filter_map(|(i, task)| {
            let y = inner.y.saturating_add(i as u16 * TASK_CARD_HEIGHT);
            let bottom = inner.y.saturating_add(inner.height);
            if y >= bottom {
                return None;
            }
            let height = TASK_CARD_HEIGHT.min(bottom - y);
            Some(CardRegion {
                task,
                area: Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height,
                },
            })
        })
        .collect()
}
