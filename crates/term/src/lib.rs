//! Terminal rendering module.
//!
//! This is the platform layer for the triangle scene: a framebuffer of styled
//! cells, a view that stretches the logical drawing surface over the terminal,
//! a renderer that flushes frames through `crossterm`, and a frame clock.
//!
//! - [`fb`]: cells, styles, scanline polygon fill
//! - [`scene_view`]: surface <-> cell mapping, [`types::PolygonSurface`] over a framebuffer
//! - [`renderer`]: raw mode / alternate screen / title / mouse capture, row-diff redraw
//! - [`frame_clock`]: fixed-rate frame limiter

pub mod fb;
pub mod frame_clock;
pub mod renderer;
pub mod scene_view;

pub use tui_triangle_core as core;
pub use tui_triangle_types as types;

pub use fb::{Cell, FrameBuffer, MAX_POLYGON_VERTICES};
pub use frame_clock::FrameClock;
pub use renderer::{encode_enter_into, encode_exit_into, encode_frame_into, TerminalRenderer};
pub use scene_view::{SceneView, TermCanvas, Viewport, FILL_CHAR};
