//! Triangle entity and its two containment predicates.

use crate::method::ContainmentMethod;
use nalgebra::distance;

use crate::types::{
    quarter_turn, Point2, PolygonSurface, Rgb, HERON_RADICAND_FLOOR, HERON_TOLERANCE,
};

/// A triangle on the drawing surface.
///
/// Vertices are stored in a consistent winding: `(b - a) × (c - a) >= 0`.
/// [`Triangle::new`] swaps `b` and `c` when the caller supplies the opposite
/// order, so the rotated edge vectors used by the projection test always point
/// inward. Collinear input is stored unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: Point2,
    b: Point2,
    c: Point2,
}

impl Triangle {
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        if (b - a).perp(&(c - a)) < 0.0 {
            Self { a, b: c, c: b }
        } else {
            Self { a, b, c }
        }
    }

    /// The startup triangle for a `width` x `height` surface: apex at the top
    /// third, base across the middle third of the lower two thirds.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_triangle_core::Triangle;
    /// use tui_triangle_core::types::Point2;
    ///
    /// let tri = Triangle::centered(900.0, 600.0);
    /// assert!(tri.vertices().contains(&Point2::new(450.0, 200.0)));
    /// ```
    pub fn centered(width: f64, height: f64) -> Self {
        Self::new(
            Point2::new(width / 2.0, height / 3.0),
            Point2::new(width / 3.0, height / 3.0 * 2.0),
            Point2::new(width / 3.0 * 2.0, height / 3.0 * 2.0),
        )
    }

    pub fn vertices(&self) -> [Point2; 3] {
        [self.a, self.b, self.c]
    }

    /// Half the cross product `(b - a) × (c - a)`. Never negative after
    /// [`Triangle::new`].
    pub fn signed_area(&self) -> f64 {
        (self.b - self.a).perp(&(self.c - self.a)) / 2.0
    }

    /// Area from the three side lengths (Heron's formula).
    ///
    /// The radicand is floored at [`HERON_RADICAND_FLOOR`] before the square
    /// root, so degenerate triangles report `sqrt(0.001)` instead of NaN.
    pub fn area(&self) -> f64 {
        heron_area(self.a, self.b, self.c)
    }

    /// Dispatch to the selected containment test.
    pub fn intersects(&self, point: Point2, method: ContainmentMethod) -> bool {
        match method {
            ContainmentMethod::Heron => self.intersects_heron(point),
            ContainmentMethod::Projection => self.intersects_projection(point),
        }
    }

    /// Inside when the sub-triangles `(a,b,p)`, `(b,c,p)`, `(c,a,p)` do not
    /// cover more than the triangle's own area plus [`HERON_TOLERANCE`].
    ///
    /// Points on an edge produce a degenerate sub-triangle whose area is
    /// floored, so they usually land just outside.
    pub fn intersects_heron(&self, point: Point2) -> bool {
        let sum = heron_area(self.a, self.b, point)
            + heron_area(self.b, self.c, point)
            + heron_area(self.c, self.a, point);
        sum - HERON_TOLERANCE <= self.area()
    }

    /// Inside when `point` is on the inner side of all three edges
    /// (boundary inclusive).
    pub fn intersects_projection(&self, point: Point2) -> bool {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
            .into_iter()
            .all(|(start, end)| quarter_turn(end - start).dot(&(point - start)) >= 0.0)
    }

    pub fn draw(&self, surface: &mut impl PolygonSurface, color: Rgb) {
        surface.fill_polygon(&self.vertices(), color);
    }
}

fn heron_area(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = distance(&a, &b);
    let bc = distance(&b, &c);
    let ca = distance(&c, &a);
    let s = (ab + bc + ca) / 2.0;
    let radicand = s * (s - ab) * (s - bc) * (s - ca);
    radicand.max(HERON_RADICAND_FLOOR).sqrt()
}
