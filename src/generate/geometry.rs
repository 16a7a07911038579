//! Planar geometry helpers.

use crate::types::Point;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Distance where a missing operand yields `0.0`.
///
/// The zero is a sentinel, not a measurement.
pub fn distance_or_zero(a: Option<Point>, b: Option<Point>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => distance(a, b),
        _ => 0.0,
    }
}

/// Rotate `point` about `origin` by `angle` radians (counter-clockwise for
/// positive angles in a y-up frame).
pub fn rotate_about(point: Point, origin: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;

    Point::new(
        dx * cos - dy * sin + origin.x,
        dx * sin + dy * cos + origin.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_distance_345() {
        assert_eq!(distance(Point::new(1.0, 1.0), Point::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_distance_missing_operand_is_zero() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(distance_or_zero(None, Some(p)), 0.0);
        assert_eq!(distance_or_zero(Some(p), None), 0.0);
        assert_eq!(distance_or_zero(Some(Point::ORIGIN), Some(p)), 5.0);
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let p = Point::new(12.5, -3.0);
        assert!(close(rotate_about(p, Point::new(4.0, 4.0), 0.0), p));
    }

    #[test]
    fn test_rotate_quarter_turn_about_origin() {
        let r = rotate_about(Point::new(1.0, 0.0), Point::ORIGIN, FRAC_PI_2);
        assert!(close(r, Point::new(0.0, 1.0)), "{:?}", r);
    }

    #[test]
    fn test_rotate_about_offset_origin() {
        let r = rotate_about(Point::new(2.0, 1.0), Point::new(1.0, 1.0), PI);
        assert!(close(r, Point::new(0.0, 1.0)), "{:?}", r);
    }

    #[test]
    fn test_rotate_there_and_back() {
        let p = Point::new(-7.0, 19.0);
        let o = Point::new(3.0, -2.0);
        for angle in [0.1, 1.0, 2.5, -4.0] {
            let back = rotate_about(rotate_about(p, o, angle), o, -angle);
            assert!(close(back, p), "angle {}: {:?}", angle, back);
        }
    }

    #[test]
    fn test_rotate_preserves_distance_to_origin() {
        let p = Point::new(30.0, 40.0);
        let o = Point::new(5.0, 5.0);
        let r = rotate_about(p, o, 0.7);
        assert!((distance(o, p) - distance(o, r)).abs() < EPS);
    }
}
