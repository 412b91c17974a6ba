//! Mapping from terminal events to frame-loop input events.

use crate::types::InputEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

/// Map a terminal event to an input event.
///
/// Only key presses count; release and auto-repeat events are dropped.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        Event::Resize(width, height) => Some(InputEvent::Resized {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Map keyboard input to an input event.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if is_quit_signal(key) {
        return Some(InputEvent::QuitSignal);
    }
    if is_exit_key(key) {
        return Some(InputEvent::ExitKey);
    }
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => Some(InputEvent::ToggleMethod),
        _ => None,
    }
}

/// Map pointer input. Scrolling does not move the pointer.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Moved
        | MouseEventKind::Drag(_)
        | MouseEventKind::Down(_)
        | MouseEventKind::Up(_) => Some(InputEvent::PointerMoved {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Ctrl-C arrives as a key in raw mode; treat it like a window close.
pub fn is_quit_signal(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key should end the loop.
pub fn is_exit_key(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) && !key.modifiers.contains(KeyModifiers::CONTROL)
}
