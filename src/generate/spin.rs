//! Radius-dependent twist.
//!
//! Each star is rotated about the centre by an angle proportional to its
//! distance from it, so straight branches curl into spiral arms. The sign of
//! the factor picks the winding direction.

use crate::types::{Point, Star};

use super::geometry::{distance, rotate_about};

/// Rotate every star by `distance(star, centre) * spin_factor` radians.
pub fn spin(stars: &mut [Star], centre: Point, spin_factor: f64) {
    for star in stars {
        let angle = distance(star.position, centre) * spin_factor;
        star.position = rotate_about(star.position, centre, angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sector;

    fn star(x: f64, y: f64) -> Star {
        Star::new(Point::new(x, y), Sector::Branch, 1.0)
    }

    #[test]
    fn test_zero_factor_is_identity() {
        let original = vec![star(1.0, 2.0), star(-50.0, 8.0), star(0.0, 0.0)];
        let mut stars = original.clone();
        spin(&mut stars, Point::ORIGIN, 0.0);
        assert_eq!(stars, original);
    }

    #[test]
    fn test_outer_stars_turn_further() {
        let mut stars = vec![star(0.0, 10.0), star(0.0, 100.0)];
        spin(&mut stars, Point::ORIGIN, 0.01);

        let turned = |s: &Star, r: f64| (s.position.x / r).asin().abs();
        let inner = turned(&stars[0], 10.0);
        let outer = turned(&stars[1], 100.0);
        assert!((inner - 0.1).abs() < 1e-9, "inner {}", inner);
        assert!((outer - 1.0).abs() < 1e-9, "outer {}", outer);
    }

    #[test]
    fn test_radius_is_preserved() {
        let mut stars = vec![star(30.0, 40.0)];
        spin(&mut stars, Point::ORIGIN, 0.05);
        assert!((distance(Point::ORIGIN, stars[0].position) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_sign_controls_direction() {
        let mut ccw = vec![star(10.0, 0.0)];
        let mut cw = ccw.clone();
        spin(&mut ccw, Point::ORIGIN, 0.01);
        spin(&mut cw, Point::ORIGIN, -0.01);
        assert!(ccw[0].position.y > 0.0);
        assert!(cw[0].position.y < 0.0);
    }

    #[test]
    fn test_centre_star_does_not_move() {
        let centre = Point::new(5.0, 5.0);
        let mut stars = vec![Star::new(centre, Sector::Core, 0.2)];
        spin(&mut stars, centre, 3.0);
        assert_eq!(stars[0].position, centre);
    }
}
