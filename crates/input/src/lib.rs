//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::InputEvent`] and keeps
//! track of the last pointer cell, since terminals only report the mouse when
//! it moves.

pub mod map;
pub mod pointer;

pub use tui_triangle_types as types;

pub use map::{handle_key_event, handle_mouse_event, is_exit_key, is_quit_signal, map_event};
pub use pointer::PointerTracker;
