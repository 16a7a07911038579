//! Region generators.
//!
//! A region is a batch of stars drawn from one shape: a full disk (core,
//! outer core, elliptical halo) or a wedge swept to a branch angle.

use crate::error::{GalaxyError, Result};
use crate::types::{Sector, Star};

use super::random::RandomSource;
use super::sampler::{branch_star, check_bounds, disk_star};

/// Shape of a generation region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionShape {
    /// Disk around the origin; stars carry `sector`.
    Disk { sector: Sector },
    /// Wedge of half-width `max_width` along the positive-y ray, rotated
    /// by `angle` radians. Stars are always tagged `Branch`.
    Wedge { max_width: f64, angle: f64 },
}

/// Everything needed to populate one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub shape: RegionShape,
    pub max_radius: f64,
    pub count: usize,
    pub jitter: f64,
}

impl Region {
    pub fn disk(sector: Sector, max_radius: f64, count: usize, jitter: f64) -> Self {
        Self {
            shape: RegionShape::Disk { sector },
            max_radius,
            count,
            jitter,
        }
    }

    pub fn wedge(max_radius: f64, max_width: f64, angle: f64, count: usize, jitter: f64) -> Self {
        Self {
            shape: RegionShape::Wedge { max_width, angle },
            max_radius,
            count,
            jitter,
        }
    }

    fn validate(&self) -> Result<()> {
        match self.shape {
            RegionShape::Disk { .. } => check_bounds(self.max_radius, 0.0, self.jitter),
            RegionShape::Wedge { max_width, angle } => {
                check_bounds(self.max_radius, max_width, self.jitter)?;
                if angle.is_finite() {
                    Ok(())
                } else {
                    Err(GalaxyError::config(
                        format!("Branch angle must be finite (got {})", angle),
                        None,
                    ))
                }
            }
        }
    }

    /// Append this region's stars to `out`, in draw order.
    pub fn populate(&self, rng: &mut impl RandomSource, out: &mut Vec<Star>) -> Result<()> {
        self.validate()?;
        reserve(out, self.count)?;

        for _ in 0..self.count {
            let star = match self.shape {
                RegionShape::Disk { sector } => {
                    disk_star(rng, self.max_radius, sector, self.jitter)
                }
                RegionShape::Wedge { max_width, angle } => {
                    branch_star(rng, self.max_radius, max_width, angle, self.jitter)
                }
            };
            out.push(star);
        }

        Ok(())
    }
}

/// Reserve room for `additional` stars, reporting allocation failure.
pub(crate) fn reserve(stars: &mut Vec<Star>, additional: usize) -> Result<()> {
    stars.try_reserve(additional).map_err(|e| GalaxyError::Resource {
        message: format!("Cannot allocate storage for {} stars: {}", additional, e),
        help: Some("Request fewer stars".to_string()),
    })
}

/// Generate `count` disk stars tagged with `sector`.
pub fn generate_disk_region(
    rng: &mut impl RandomSource,
    max_radius: f64,
    count: usize,
    sector: Sector,
    jitter: f64,
) -> Result<Vec<Star>> {
    let mut stars = Vec::new();
    Region::disk(sector, max_radius, count, jitter).populate(rng, &mut stars)?;
    Ok(stars)
}

/// Generate `count` branch stars sharing one base `angle`.
pub fn generate_branch_region(
    rng: &mut impl RandomSource,
    max_radius: f64,
    max_width: f64,
    count: usize,
    angle: f64,
    jitter: f64,
) -> Result<Vec<Star>> {
    let mut stars = Vec::new();
    Region::wedge(max_radius, max_width, angle, count, jitter).populate(rng, &mut stars)?;
    Ok(stars)
}
