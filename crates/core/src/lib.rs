//! Core geometry module - pure, deterministic, and testable
//!
//! This module contains the triangle entity and its containment tests.
//! It has **zero dependencies** on terminal I/O or input handling, making it:
//!
//! - **Deterministic**: every operation is a pure function of the vertices and arguments
//! - **Testable**: containment properties are checked without a terminal
//! - **Portable**: any backend that implements [`types::PolygonSurface`] can draw it
//!
//! # Module Structure
//!
//! - [`triangle`]: vertices, Heron area, the two containment predicates, drawing
//! - [`method`]: the closed set of containment methods used for dispatch
//!
//! # Containment
//!
//! | Method | Cost | Boundary |
//! |--------|------|----------|
//! | Heron | 4 area evaluations (16 square roots) | edge points usually outside |
//! | Projection | 3 dot products, no square roots | edge points inside |
//!
//! Both agree for points clearly inside or clearly outside.
//!
//! # Example
//!
//! ```
//! use tui_triangle_core::{ContainmentMethod, Triangle};
//! use tui_triangle_core::types::Point2;
//!
//! let tri = Triangle::new(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(2.0, 4.0),
//! );
//!
//! let centroid = Point2::new(2.0, 4.0 / 3.0);
//! for method in ContainmentMethod::ALL {
//!     assert!(tri.intersects(centroid, method));
//!     assert!(!tri.intersects(Point2::new(100.0, 100.0), method));
//! }
//! assert!((tri.area() - 8.0).abs() < 1e-9);
//! ```

pub mod method;
pub mod triangle;

pub use tui_triangle_types as types;

pub use method::ContainmentMethod;
pub use triangle::Triangle;
