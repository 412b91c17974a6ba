//! Containment and area properties of the triangle core.

use tui_triangle::core::{ContainmentMethod, Triangle};
use tui_triangle::types::{quarter_turn, Point2};

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn test_triangle() -> Triangle {
    Triangle::new(p(0.0, 0.0), p(4.0, 0.0), p(2.0, 4.0))
}

/// Signed distance from `point` to each edge line, positive on the inner side.
fn edge_distances(tri: &Triangle, point: Point2) -> [f64; 3] {
    let [a, b, c] = tri.vertices();
    [(a, b), (b, c), (c, a)].map(|(s, e)| {
        let normal = quarter_turn(e - s);
        normal.dot(&(point - s)) / normal.norm()
    })
}

#[test]
fn equilateral_area_matches_closed_form() {
    let side = 4.0_f64;
    let tri = Triangle::new(p(0.0, 0.0), p(side, 0.0), p(2.0, 2.0 * 3.0_f64.sqrt()));
    let expected = 3.0_f64.sqrt() / 4.0 * side * side;
    assert!((tri.area() - expected).abs() < 1e-9);
    assert!((tri.area() - 6.928).abs() < 1e-3);
}

#[test]
fn area_is_invariant_under_cyclic_relabeling() {
    let (a, b, c) = (p(1.5, -2.0), p(7.25, 3.0), p(-4.0, 5.5));
    let abc = Triangle::new(a, b, c).area();
    let bca = Triangle::new(b, c, a).area();
    let cab = Triangle::new(c, a, b).area();
    assert!((abc - bca).abs() < 1e-9);
    assert!((abc - cab).abs() < 1e-9);
}

#[test]
fn degenerate_area_is_clamped_not_nan() {
    let tri = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0));
    let area = tri.area();
    assert!(!area.is_nan());
    assert!(area >= 0.0);
    assert!((area - 0.001_f64.sqrt()).abs() < 1e-12);

    // Containment on a degenerate triangle still returns.
    for method in ContainmentMethod::ALL {
        let _ = tri.intersects(p(1.0, 0.0), method);
        let _ = tri.intersects(p(1.0, 5.0), method);
    }
}

#[test]
fn centroid_is_inside_for_both_methods() {
    let tri = test_triangle();
    for method in ContainmentMethod::ALL {
        assert!(tri.intersects(p(2.0, 1.33), method), "{:?}", method);
        assert!(tri.intersects(p(2.0, 4.0 / 3.0), method), "{:?}", method);
    }
}

#[test]
fn far_point_is_outside_for_both_methods() {
    let tri = test_triangle();
    for method in ContainmentMethod::ALL {
        assert!(!tri.intersects(p(100.0, 100.0), method), "{:?}", method);
        assert!(!tri.intersects(p(-50.0, 2.0), method), "{:?}", method);
    }
}

#[test]
fn projection_includes_edge_midpoints() {
    let tri = test_triangle();
    assert!(tri.intersects(p(2.0, 0.0), ContainmentMethod::Projection));
    assert!(tri.intersects(p(3.0, 2.0), ContainmentMethod::Projection));
    assert!(tri.intersects(p(1.0, 2.0), ContainmentMethod::Projection));
}

#[test]
fn methods_agree_away_from_the_boundary() {
    let tri = test_triangle();
    let margin = 0.25;
    let mut checked_inside = 0;
    let mut checked_outside = 0;

    for i in 0..=48 {
        for j in 0..=48 {
            let point = p(-2.0 + i as f64 * 0.25, -2.0 + j as f64 * 0.25);
            let d = edge_distances(&tri, point);
            let nearest = d.iter().cloned().fold(f64::INFINITY, f64::min);

            let heron = tri.intersects(point, ContainmentMethod::Heron);
            let projection = tri.intersects(point, ContainmentMethod::Projection);

            if nearest > margin {
                assert!(heron && projection, "interior point {:?}", point);
                checked_inside += 1;
            } else if nearest < -margin {
                assert!(!heron && !projection, "exterior point {:?}", point);
                checked_outside += 1;
            }
        }
    }

    assert!(checked_inside > 20);
    assert!(checked_outside > 500);
}

#[test]
fn reverse_wound_input_still_contains_its_centroid() {
    let tri = Triangle::new(p(0.0, 0.0), p(2.0, 4.0), p(4.0, 0.0));
    for method in ContainmentMethod::ALL {
        assert!(tri.intersects(p(2.0, 4.0 / 3.0), method), "{:?}", method);
    }
}

#[test]
fn startup_triangle_contains_its_centroid() {
    let tri = Triangle::centered(800.0, 600.0);
    let [a, b, c] = tri.vertices();
    let centroid = p((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
    for method in ContainmentMethod::ALL {
        assert!(tri.intersects(centroid, method), "{:?}", method);
        assert!(!tri.intersects(p(10.0, 10.0), method), "{:?}", method);
    }
}

#[test]
fn unknown_method_names_do_not_parse() {
    assert_eq!(ContainmentMethod::from_str("fastest"), None);
}
