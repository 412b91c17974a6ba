//! SceneView: maps the logical drawing surface onto terminal cells.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Triangle;
use crate::fb::{Cell, FrameBuffer, MAX_POLYGON_VERTICES};
use crate::types::{Point2, PolygonSurface, Rgb, SURFACE_HEIGHT, SURFACE_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Glyph used for filled polygon cells.
pub const FILL_CHAR: char = '█';

/// Stretches a `surface_w` x `surface_h` surface over the whole viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneView {
    surface_w: f64,
    surface_h: f64,
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new(SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

impl SceneView {
    pub fn new(surface_w: f64, surface_h: f64) -> Self {
        Self {
            surface_w,
            surface_h,
        }
    }

    /// Surface point sampled by the center of cell `(column, row)`.
    pub fn cell_to_surface(&self, column: u16, row: u16, viewport: Viewport) -> Point2 {
        let (sx, sy) = self.scale(viewport);
        Point2::new(
            (column as f64 + 0.5) * self.surface_w / sx,
            (row as f64 + 0.5) * self.surface_h / sy,
        )
    }

    /// Continuous cell coordinates of a surface point.
    pub fn surface_to_cell(&self, point: Point2, viewport: Viewport) -> (f32, f32) {
        let (sx, sy) = self.scale(viewport);
        (
            (point.x * sx / self.surface_w) as f32,
            (point.y * sy / self.surface_h) as f32,
        )
    }

    /// Clear `fb` to the viewport size and background color.
    pub fn clear(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());
    }

    /// Borrow `fb` as a drawing surface in surface coordinates.
    pub fn canvas<'a>(&'a self, viewport: Viewport, fb: &'a mut FrameBuffer) -> TermCanvas<'a> {
        TermCanvas {
            view: self,
            viewport,
            fb,
        }
    }

    /// Clear and draw one frame: the triangle filled with `color`.
    pub fn render_into(
        &self,
        triangle: &Triangle,
        color: Rgb,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        self.clear(viewport, fb);
        triangle.draw(&mut self.canvas(viewport, fb), color);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, triangle: &Triangle, color: Rgb, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(triangle, color, viewport, &mut fb);
        fb
    }

    fn scale(&self, viewport: Viewport) -> (f64, f64) {
        (
            viewport.width.max(1) as f64,
            viewport.height.max(1) as f64,
        )
    }
}

/// A framebuffer viewed through a [`SceneView`].
pub struct TermCanvas<'a> {
    view: &'a SceneView,
    viewport: Viewport,
    fb: &'a mut FrameBuffer,
}

impl PolygonSurface for TermCanvas<'_> {
    fn fill_polygon(&mut self, points: &[Point2], color: Rgb) {
        let mut cells = [(0.0f32, 0.0f32); MAX_POLYGON_VERTICES];
        if points.len() > cells.len() {
            return;
        }
        for (dst, &p) in cells.iter_mut().zip(points) {
            *dst = self.view.surface_to_cell(p, self.viewport);
        }
        let cell = Cell {
            ch: FILL_CHAR,
            color,
        };
        self.fb.fill_polygon(&cells[..points.len()], cell);
    }
}
