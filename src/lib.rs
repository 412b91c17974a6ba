//! TUI Triangle (workspace facade crate).
//!
//! Re-exports the member crates as `tui_triangle::{core,input,term,types}` and
//! hosts the frame loop with its configuration and log.

pub mod config;
pub mod frame_log;
pub mod frame_loop;

pub use tui_triangle_core as core;
pub use tui_triangle_input as input;
pub use tui_triangle_term as term;
pub use tui_triangle_types as types;

pub use config::AppConfig;
pub use frame_log::{FrameLog, LogRecord, StopReason};
pub use frame_loop::{FrameLoop, FrameOutcome};
