//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Points and vectors are `nalgebra` types; everything else is plain data, usable
//! in any context (geometry, terminal rendering, input mapping).
//!
//! # Surface
//!
//! Geometry lives on a fixed logical surface of 800x600 units with the origin in
//! the top-left corner (`y` grows downward). The terminal layer stretches this
//! surface over whatever viewport is available.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SURFACE_WIDTH` | 800 | Logical surface width |
//! | `SURFACE_HEIGHT` | 600 | Logical surface height |
//! | `TARGET_FPS` | 60 | Frame-loop iteration rate |
//! | `HERON_RADICAND_FLOOR` | 0.001 | Minimum radicand before the Heron square root |
//! | `HERON_TOLERANCE` | 0.01 | Area-sum slack for Heron containment |
//!
//! # Examples
//!
//! ```
//! use tui_triangle_types::{quarter_turn, Point2, Rgb, Vector2, INSIDE_COLOR, OUTSIDE_COLOR};
//!
//! let v = Point2::new(2.0, 0.0) - Point2::new(0.0, 0.0);
//! assert_eq!(quarter_turn(v), Vector2::new(0.0, 2.0));
//!
//! assert_eq!(INSIDE_COLOR, Rgb::new(0, 255, 0));
//! assert_eq!(OUTSIDE_COLOR, Rgb::new(255, 0, 0));
//! ```

/// A point on the drawing surface, in surface units (`y` grows downward).
pub type Point2 = nalgebra::Point2<f64>;

/// Difference of two [`Point2`]s.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Window / terminal title.
pub const WINDOW_TITLE: &str = "Triangle";

/// Logical surface width in surface units.
pub const SURFACE_WIDTH: f64 = 800.0;

/// Logical surface height in surface units.
pub const SURFACE_HEIGHT: f64 = 600.0;

/// Frame-loop iterations per second.
pub const TARGET_FPS: u32 = 60;

/// Lower bound applied to the Heron radicand `s(s-a)(s-b)(s-c)` before `sqrt`.
///
/// Degenerate triangles can drive the radicand slightly negative through
/// rounding; the floor keeps the area real. It also fixes the smallest area
/// any triangle reports (`sqrt(0.001)`).
pub const HERON_RADICAND_FLOOR: f64 = 0.001;

/// Slack subtracted from the sub-triangle area sum in the Heron containment test.
pub const HERON_TOLERANCE: f64 = 0.01;

/// Fill color while the pointer is inside the triangle.
pub const INSIDE_COLOR: Rgb = Rgb::new(0, 255, 0);

/// Fill color while the pointer is outside the triangle.
pub const OUTSIDE_COLOR: Rgb = Rgb::new(255, 0, 0);

/// Frame clear color.
pub const BACKGROUND_COLOR: Rgb = Rgb::new(0, 0, 0);

/// Rotate `v` by +90°: `(x, y) -> (-y, x)`. Exact, no trigonometry.
pub fn quarter_turn(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Anything that can fill a polygon given in surface coordinates.
///
/// This is the only drawing primitive the geometry layer relies on.
pub trait PolygonSurface {
    fn fill_polygon(&mut self, points: &[Point2], color: Rgb);
}

/// Discrete input events the frame loop reacts to.
///
/// These are backend-independent; the input crate maps terminal events into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window-close analogue (Ctrl-C in raw mode).
    QuitSignal,
    /// An exit key was pressed (Esc / q).
    ExitKey,
    /// Switch to the other containment method.
    ToggleMethod,
    /// Pointer reported at a terminal cell.
    PointerMoved { column: u16, row: u16 },
    /// Terminal was resized; the next frame must be a full redraw.
    Resized { width: u16, height: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_constants() {
        assert_eq!(HERON_RADICAND_FLOOR, 0.001);
        assert_eq!(HERON_TOLERANCE, 0.01);
        assert_eq!(TARGET_FPS, 60);
        assert_eq!((SURFACE_WIDTH, SURFACE_HEIGHT), (800.0, 600.0));
    }

    #[test]
    fn quarter_turn_cycles_through_the_axes() {
        let v = Vector2::new(4.0, 0.0);
        assert_eq!(quarter_turn(v), Vector2::new(0.0, 4.0));
        assert_eq!(quarter_turn(quarter_turn(v)), Vector2::new(-4.0, 0.0));
        assert_eq!(quarter_turn(quarter_turn(quarter_turn(quarter_turn(v)))), v);
    }

    #[test]
    fn quarter_turn_is_perpendicular() {
        let v = Vector2::new(3.0, -7.5);
        assert_eq!(quarter_turn(v).dot(&v), 0.0);
        assert_eq!(quarter_turn(v).norm(), v.norm());
    }
}
