//! Rendering tests composing multiple widgets.
//!
//! These tests render whole screen regions into a buffer and assert on
//! the visible text, exercising the same geometry the mouse router uses.

use kanri_board::{ColumnId, DragPayload, TaskId, seed::seed_board};
use ratatui::{buffer::Buffer, layout::Rect};

use super::{render_board, render_delete_zone, render_status_bar_with_message};
use crate::layout::{BoardLayout, screen_chunks};
use crate::test_utils::buffer_to_string;

#[test]
fn full_screen_composition_shows_all_regions() {
    let board = seed_board();
    let area = Rect::new(0, 0, 80, 24);
    let chunks = screen_chunks(area).expect("area is large enough");
    let mut buf = Buffer::empty(area);

    render_delete_zone(false, chunks.delete_zone, &mut buf);
    render_board(&board, 0, Some(0), None, chunks.board, &mut buf);
    render_status_bar_with_message("Moving 'js'", chunks.status_bar, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Drop here to delete"));
    assert!(content.contains("todo (2)"));
    assert!(content.contains("in-progress (2)"));
    assert!(content.contains("Moving 'js'"));
}

#[test]
fn board_render_covers_every_hit_region() {
    let board = seed_board();
    let area = Rect::new(0, 0, 80, 24);
    let chunks = screen_chunks(area).expect("area is large enough");
    let layout = BoardLayout::compute(&board, area, 0, None);
    let mut buf = Buffer::empty(area);

    render_board(&board, 0, None, None, chunks.board, &mut buf);

    // Every card the hit-test knows about has a checkbox marker drawn
    // inside its region.
    for column in &layout.columns {
        for card in &column.cards {
            let mut found = false;
            for y in card.area.y..card.area.y + card.area.height {
                for x in card.area.x..card.area.x + card.area.width {
                    if let Some(cell) = buf.cell((x, y))
                        && cell.symbol() == "["
                    {
                        found = true;
                    }
                }
            }
            assert!(found, "card {:?} has no checkbox in its region", card.task);
        }
    }
}

#[test]
fn dragged_card_still_renders_in_origin_column() {
    let board = seed_board();
    let area = Rect::new(0, 0, 80, 24);
    let chunks = screen_chunks(area).expect("area is large enough");
    let drag = Some(DragPayload {
        origin: ColumnId(1),
        task: TaskId(1),
    });
    let mut buf = Buffer::empty(area);

    render_board(&board, 0, None, drag, chunks.board, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("[x] js"));
}

#[test]
fn board_after_move_renders_new_shape() {
    let board = seed_board().move_task(ColumnId(1), ColumnId(2), TaskId(1));
    let area = Rect::new(0, 0, 80, 24);
    let chunks = screen_chunks(area).expect("area is large enough");
    let mut buf = Buffer::empty(area);

    render_board(&board, 0, None, None, chunks.board, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("todo (1)"));
    assert!(content.contains("in-progress (3)"));
}
