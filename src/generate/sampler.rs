//! Single-star sampling.
//!
//! Positions are drawn from a bounding box and rejected until they fall
//! within `max_radius` of the origin. Square rejection concentrates
//! slightly more stars near the centre than true uniform-area sampling.
//! A jitter pass then nudges each star without any bound.

use crate::error::{GalaxyError, Result};
use crate::types::{Point, Sector, Star};

use super::geometry::{distance, rotate_about};
use super::random::RandomSource;

/// Largest accepted region radius, arm width or jitter.
pub const MAX_EXTENT: f64 = 1.0e12;

/// Check sampler parameters before drawing.
///
/// Negative or non-finite values never satisfy the rejection test, and
/// values past `MAX_EXTENT` lose all precision in the coordinates.
pub(crate) fn check_bounds(max_radius: f64, max_width: f64, jitter: f64) -> Result<()> {
    for (name, value) in [("radius", max_radius), ("width", max_width), ("jitter", jitter)] {
        if !value.is_finite() || value < 0.0 {
            return Err(GalaxyError::config(
                format!("Region {} must be a finite, non-negative number (got {})", name, value),
                None,
            ));
        }
        if value > MAX_EXTENT {
            return Err(GalaxyError::config(
                format!("Region {} {} is larger than {}", name, value, MAX_EXTENT),
                None,
            ));
        }
    }
    Ok(())
}

/// Draw a point inside the disk of `max_radius` around the origin.
pub fn sample_in_disk(rng: &mut impl RandomSource, max_radius: f64) -> Point {
    loop {
        let p = Point::new(
            rng.next_in_range(-max_radius, max_radius),
            rng.next_in_range(-max_radius, max_radius),
        );
        if distance(Point::ORIGIN, p) <= max_radius {
            return p;
        }
    }
}

/// Draw a point in the wedge `|x| <= max_width`, `0 <= y <= max_radius`,
/// clipped to the disk of `max_radius`.
pub fn sample_in_wedge(rng: &mut impl RandomSource, max_radius: f64, max_width: f64) -> Point {
    // Only x = 0 survives a zero radius, which real draws never hit.
    if max_radius <= 0.0 {
        return Point::ORIGIN;
    }
    loop {
        let p = Point::new(
            rng.next_in_range(-max_width, max_width),
            rng.next_in_range(0.0, max_radius),
        );
        if distance(Point::ORIGIN, p) <= max_radius {
            return p;
        }
    }
}

/// Replace each coordinate with a uniform draw from `[c - magnitude, c + magnitude]`.
pub fn jitter(rng: &mut impl RandomSource, point: Point, magnitude: f64) -> Point {
    Point::new(
        rng.next_in_range(point.x - magnitude, point.x + magnitude),
        rng.next_in_range(point.y - magnitude, point.y + magnitude),
    )
}

pub(crate) fn disk_star(
    rng: &mut impl RandomSource,
    max_radius: f64,
    sector: Sector,
    magnitude: f64,
) -> Star {
    let placed = sample_in_disk(rng, max_radius);
    let position = jitter(rng, placed, magnitude);
    let luminosity = rng.next_in_range(0.0, 1.0);
    Star::new(position, sector, luminosity)
}

pub(crate) fn branch_star(
    rng: &mut impl RandomSource,
    max_radius: f64,
    max_width: f64,
    angle: f64,
    magnitude: f64,
) -> Star {
    let placed = sample_in_wedge(rng, max_radius, max_width);
    let jittered = jitter(rng, placed, magnitude);
    let position = rotate_about(jittered, Point::ORIGIN, angle);
    let luminosity = rng.next_in_range(0.0, 1.0);
    Star::new(position, Sector::Branch, luminosity)
}

/// Sample one star inside a disk region.
pub fn sample_star(
    rng: &mut impl RandomSource,
    max_radius: f64,
    sector: Sector,
    magnitude: f64,
) -> Result<Star> {
    check_bounds(max_radius, 0.0, magnitude)?;
    Ok(disk_star(rng, max_radius, sector, magnitude))
}

/// Sample one star along the positive-y ray, then sweep it to `angle`.
pub fn sample_branch_star(
    rng: &mut impl RandomSource,
    max_radius: f64,
    max_width: f64,
    angle: f64,
    magnitude: f64,
) -> Result<Star> {
    check_bounds(max_radius, max_width, magnitude)?;
    if !angle.is_finite() {
        return Err(GalaxyError::config(
            format!("Branch angle must be finite (got {})", angle),
            None,
        ));
    }
    Ok(branch_star(rng, max_radius, max_width, angle, magnitude))
}
