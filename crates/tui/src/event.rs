//! Event handling and input mappings.
//!
//! This module provides event polling and the conversion of terminal
//! events (keyboard and mouse) into application messages. The mappers are
//! pure functions; all state changes happen in the app's update step.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use kanri_board::{ColumnId, DragPayload, DropTarget, Message};

use crate::layout::BoardLayout;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Input context the key mapper needs to resolve drag-sensitive keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    /// Whether a drag is currently in flight.
    pub drag_active: bool,
    /// The column the selection currently rests on, if any. While a drag
    /// is active this is the drop destination for `Enter`/`g`.
    pub selected_column: Option<ColumnId>,
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action, or `None`
/// if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Cancel drag or clear selection |
/// | `Left`/`Right` | Change column (drop destination while dragging) |
/// | `Up`/`Down` | Change task selection |
/// | `Space` | Toggle the selected task's checkbox |
/// | `Enter` | Toggle checkbox; drop on the selected column while dragging |
/// | `g` | Grab the selected task; drop it while dragging |
/// | `d` or `Delete` | Drop the grabbed task on the delete zone |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent, ctx: KeyContext) -> Option<Message> {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        // Checkbox / drop, depending on drag state
        KeyCode::Char(' ') => Some(Message::ToggleDone),
        KeyCode::Enter if ctx.drag_active => {
            Some(Message::Drop(ctx.selected_column.map(DropTarget::Column)))
        }
        KeyCode::Enter => Some(Message::ToggleDone),

        // Grab / drop
        KeyCode::Char('g') if ctx.drag_active => {
            Some(Message::Drop(ctx.selected_column.map(DropTarget::Column)))
        }
        KeyCode::Char('g') => Some(Message::Grab),

        // Delete only applies to a grabbed task
        KeyCode::Char('d') | KeyCode::Delete if ctx.drag_active => {
            Some(Message::Drop(Some(DropTarget::DeleteZone)))
        }

        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a terminal mouse event to an application message.
///
/// A left press on a task card starts a drag carrying that card's column
/// and task ids. A left release resolves against the layout: over the
/// originating card it toggles the checkbox (a click), over a drop zone
/// it delivers the drop, anywhere else it cancels the drag.
///
/// Returns `None` for mouse events that map to no action.
#[must_use]
pub fn mouse_to_message(
    mouse: MouseEvent,
    layout: &BoardLayout,
    drag: Option<DragPayload>,
) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (origin, task) = layout.card_at(mouse.column, mouse.row)?;
            Some(Message::BeginDrag(DragPayload { origin, task }))
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let payload = drag?;
            // A release on the card that was pressed is a click, which
            // toggles the checkbox instead of dropping.
            if layout.card_at(mouse.column, mouse.row) == Some((payload.origin, payload.task)) {
                return Some(Message::ToggleDone);
            }
            Some(Message::Drop(layout.drop_target_at(mouse.column, mouse.row)))
        }
        _ => None,
    }
}
