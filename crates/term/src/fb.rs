//! Cell framebuffer for the terminal surface.
//!
//! Every cell is drawn on the scene background, so a cell only carries its
//! glyph and foreground color.

use arrayvec::ArrayVec;

use crate::types::{Rgb, BACKGROUND_COLOR};

/// Largest polygon [`FrameBuffer::fill_polygon`] accepts.
pub const MAX_POLYGON_VERTICES: usize = 8;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            color: BACKGROUND_COLOR,
        }
    }
}

/// Row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize in place; the allocation is reused when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    /// Become a copy of `other` without reallocating when sizes match.
    pub fn copy_from(&mut self, other: &FrameBuffer) {
        self.resize(other.width, other.height);
        self.cells.copy_from_slice(&other.cells);
    }

    pub fn row(&self, y: u16) -> &[Cell] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.row(y)[x as usize])
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Scanline-fill a polygon given in cell coordinates.
    ///
    /// A cell is filled when its center `(x + 0.5, y + 0.5)` lies inside the
    /// polygon (even-odd rule, left edges inclusive). Polygons with fewer than
    /// three or more than [`MAX_POLYGON_VERTICES`] vertices are ignored.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], cell: Cell) {
        if points.len() < 3 || points.len() > MAX_POLYGON_VERTICES {
            return;
        }
        let w = self.width as usize;

        for y in 0..self.height as usize {
            let yc = y as f32 + 0.5;
            let mut crossings: ArrayVec<f32, MAX_POLYGON_VERTICES> = ArrayVec::new();
            for (i, &(x0, y0)) in points.iter().enumerate() {
                let (x1, y1) = points[(i + 1) % points.len()];
                if (y0 <= yc && yc < y1) || (y1 <= yc && yc < y0) {
                    crossings.push(x0 + (yc - y0) * (x1 - x0) / (y1 - y0));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));

            let row = &mut self.cells[y * w..(y + 1) * w];
            for span in crossings.chunks_exact(2) {
                let first = (span[0] - 0.5).ceil().clamp(0.0, w as f32) as usize;
                let end = (span[1] - 0.5).ceil().clamp(0.0, w as f32) as usize;
                if first < end {
                    row[first..end].fill(cell);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Cell {
        Cell {
            ch: '█',
            color: Rgb::new(0, 255, 0),
        }
    }

    fn filled(fb: &FrameBuffer) -> Vec<(u16, u16)> {
        let mut out = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).unwrap().ch == '█' {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn default_cell_is_background() {
        assert_eq!(Cell::default().color, BACKGROUND_COLOR);
        assert_eq!(Cell::default().ch, ' ');
    }

    #[test]
    fn fills_axis_aligned_square() {
        let mut fb = FrameBuffer::new(6, 6);
        fb.fill_polygon(&[(1.0, 1.0), (4.0, 1.0), (4.0, 3.0), (1.0, 3.0)], block());
        let cells = filled(&fb);
        assert_eq!(cells.len(), 6);
        assert!(cells.contains(&(1, 1)));
        assert!(cells.contains(&(3, 2)));
        assert!(!cells.contains(&(4, 1)));
        assert!(!cells.contains(&(1, 3)));
    }

    #[test]
    fn triangle_rows_narrow_towards_apex() {
        let mut fb = FrameBuffer::new(10, 5);
        fb.fill_polygon(&[(5.0, 0.0), (0.0, 5.0), (10.0, 5.0)], block());
        let row_len = |y: u16| filled(&fb).iter().filter(|c| c.1 == y).count();
        assert!(row_len(0) < row_len(2));
        assert!(row_len(2) < row_len(4));
        assert_eq!(row_len(4), 9);
    }

    #[test]
    fn clips_to_buffer() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_polygon(&[(-10.0, -10.0), (20.0, -10.0), (20.0, 20.0), (-10.0, 20.0)], block());
        assert_eq!(filled(&fb).len(), 16);
    }

    #[test]
    fn degenerate_polygons_draw_nothing() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_polygon(&[(0.0, 0.0), (4.0, 4.0)], block());
        fb.fill_polygon(&[(0.0, 2.0), (2.0, 2.0), (4.0, 2.0)], block());
        assert!(filled(&fb).is_empty());
    }

    #[test]
    fn copy_from_follows_size_and_content() {
        let mut src = FrameBuffer::new(3, 2);
        src.fill_polygon(&[(0.0, 0.0), (3.0, 0.0), (3.0, 2.0), (0.0, 2.0)], block());
        let mut dst = FrameBuffer::new(1, 1);
        dst.copy_from(&src);
        assert_eq!(dst, src);
        assert_eq!(dst.get(3, 0), None);
        assert_eq!(dst.row(1).len(), 3);
    }
}
