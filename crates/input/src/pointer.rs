//! Last known pointer position.

use crate::types::InputEvent;

/// Tracks the most recent pointer cell reported by the terminal.
///
/// Terminals only report the pointer when it moves, so the frame loop keeps
/// the last value. Before any report the pointer sits at the origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerTracker {
    column: u16,
    row: u16,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an input event; anything but a pointer move is ignored.
    pub fn apply(&mut self, event: InputEvent) {
        if let InputEvent::PointerMoved { column, row } = event {
            self.column = column;
            self.row = row;
        }
    }

    /// Current pointer cell as `(column, row)`.
    pub fn position(&self) -> (u16, u16) {
        (self.column, self.row)
    }
}
