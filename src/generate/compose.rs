//! Galaxy composers.
//!
//! A composer sizes each sector from the canvas dimensions and star budget,
//! populates the regions in order (core, outer core, branches) into one
//! sequence, and, for spirals, twists the whole set.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};
use crate::types::{Galaxy, GalaxyKind, Point, Sector, Star};

use super::random::RandomSource;
use super::region::{reserve, Region};
use super::spin::spin;

/// Smallest accepted canvas side. Every sector radius is at least one
/// pixel from here up.
pub const MIN_DIMENSION: u32 = 20;

/// How far each spiral branch reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BranchRadius {
    /// Every branch reaches `(min_dim - 10) / 2`.
    Fixed,
    /// Each branch reaches `(min_dim - uniform(0, min_dim / 4)) / 2`.
    #[default]
    Randomized,
}

/// Options for elliptical galaxies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipticalOptions {
    pub jitter: f64,
}

impl Default for EllipticalOptions {
    fn default() -> Self {
        Self { jitter: 10.0 }
    }
}

/// Options for spiral galaxies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralOptions {
    pub branches: u32,
    pub spin_factor: f64,
    /// Jitter applied to branch stars.
    pub jitter: f64,
    /// Jitter applied to core and outer-core stars.
    pub disk_jitter: f64,
    pub branch_radius: BranchRadius,
}

impl Default for SpiralOptions {
    fn default() -> Self {
        Self {
            branches: 6,
            spin_factor: 0.01,
            jitter: 50.0,
            disk_jitter: 10.0,
            branch_radius: BranchRadius::Randomized,
        }
    }
}

impl SpiralOptions {
    /// The plainer layout: equal-length branches and light jitter.
    pub fn simple() -> Self {
        Self {
            jitter: 10.0,
            branch_radius: BranchRadius::Fixed,
            ..Self::default()
        }
    }
}

/// Radius and star count for one sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorPlan {
    pub sector: Sector,
    pub radius: u32,
    pub count: usize,
}

/// Sector sizes for an elliptical galaxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EllipticalPlan {
    pub core: SectorPlan,
    pub outer_core: SectorPlan,
    /// Diffuse halo, tagged `Branch`.
    pub halo: SectorPlan,
}

impl EllipticalPlan {
    pub fn total(&self) -> usize {
        self.core.count + self.outer_core.count + self.halo.count
    }
}

/// Sector sizes for a spiral galaxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiralPlan {
    pub core: SectorPlan,
    pub outer_core: SectorPlan,
    pub branches: u32,
    pub stars_per_branch: usize,
    pub arm_width: u32,
    /// Reach of every branch in `BranchRadius::Fixed` mode.
    pub branch_radius: u32,
    /// Shortest and longest reach a branch can draw in
    /// `BranchRadius::Randomized` mode, rounded down.
    pub randomized_reach: (u32, u32),
}

impl SpiralPlan {
    pub fn branch_total(&self) -> usize {
        self.stars_per_branch * self.branches as usize
    }

    /// Stars actually produced. Integer division across branches may drop a
    /// few from the requested budget.
    pub fn total(&self) -> usize {
        self.core.count + self.outer_core.count + self.branch_total()
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<u32> {
    let min_dim = width.min(height);
    if min_dim < MIN_DIMENSION {
        return Err(GalaxyError::Config {
            message: format!("Galaxy canvas {}x{} is too small", width, height),
            help: Some(format!("Both sides must be at least {} pixels", MIN_DIMENSION)),
        });
    }
    Ok(min_dim)
}

/// Size the sectors of an elliptical galaxy.
pub fn plan_elliptical(width: u32, height: u32, star_count: usize) -> Result<EllipticalPlan> {
    let min_dim = check_dimensions(width, height)?;

    let core = SectorPlan {
        sector: Sector::Core,
        radius: min_dim / 10 / 2,
        count: star_count / 10,
    };
    let outer_core = SectorPlan {
        sector: Sector::OuterCore,
        radius: min_dim / 3 / 2,
        count: star_count / 10,
    };
    let halo = SectorPlan {
        sector: Sector::Branch,
        radius: (min_dim - 10) / 2,
        count: star_count - core.count - outer_core.count,
    };

    Ok(EllipticalPlan {
        core,
        outer_core,
        halo,
    })
}

/// Size the sectors of a spiral galaxy.
pub fn plan_spiral(
    width: u32,
    height: u32,
    star_count: usize,
    options: &SpiralOptions,
) -> Result<SpiralPlan> {
    if options.branches < 1 {
        return Err(GalaxyError::config(
            format!("A spiral galaxy needs at least one branch (got {})", options.branches),
            Some("Set spiral.branches to 1 or more"),
        ));
    }
    if !options.spin_factor.is_finite() {
        return Err(GalaxyError::config(
            format!("Spin factor must be finite (got {})", options.spin_factor),
            None,
        ));
    }
    let min_dim = check_dimensions(width, height)?;

    let core = SectorPlan {
        sector: Sector::Core,
        radius: min_dim / 10 / 2,
        count: star_count / 10,
    };
    let outer_core = SectorPlan {
        sector: Sector::OuterCore,
        radius: min_dim / 5 / 2,
        count: star_count / 30,
    };
    let remaining = star_count - core.count - outer_core.count;

    Ok(SpiralPlan {
        core,
        outer_core,
        branches: options.branches,
        stars_per_branch: remaining / options.branches as usize,
        arm_width: min_dim / options.branches / 3,
        branch_radius: (min_dim - 10) / 2,
        randomized_reach: ((min_dim - min_dim / 4) / 2, min_dim / 2),
    })
}

/// Compose an elliptical galaxy: three concentric disks, no spin.
pub fn generate_elliptical(
    rng: &mut impl RandomSource,
    width: u32,
    height: u32,
    star_count: usize,
    options: &EllipticalOptions,
) -> Result<Galaxy> {
    let plan = plan_elliptical(width, height, star_count)?;

    let mut stars: Vec<Star> = Vec::new();
    reserve(&mut stars, plan.total())?;

    for sector in [plan.core, plan.outer_core, plan.halo] {
        Region::disk(sector.sector, sector.radius as f64, sector.count, options.jitter)
            .populate(rng, &mut stars)?;
    }

    Ok(Galaxy::new(GalaxyKind::Elliptical, width, height, stars))
}

/// Compose a spiral galaxy: core, outer core, one wedge per branch, then
/// spin the whole set about the origin.
pub fn generate_spiral(
    rng: &mut impl RandomSource,
    width: u32,
    height: u32,
    star_count: usize,
    options: &SpiralOptions,
) -> Result<Galaxy> {
    let plan = plan_spiral(width, height, star_count, options)?;
    let min_dim = width.min(height) as f64;

    let mut stars: Vec<Star> = Vec::new();
    reserve(&mut stars, plan.total())?;

    for sector in [plan.core, plan.outer_core] {
        Region::disk(sector.sector, sector.radius as f64, sector.count, options.disk_jitter)
            .populate(rng, &mut stars)?;
    }

    let angle_per_branch = TAU / plan.branches as f64;
    for i in 0..plan.branches {
        let angle = i as f64 * angle_per_branch;
        let radius = match options.branch_radius {
            BranchRadius::Fixed => plan.branch_radius as f64,
            BranchRadius::Randomized => (min_dim - rng.next_in_range(0.0, min_dim / 4.0)) / 2.0,
        };
        Region::wedge(
            radius,
            plan.arm_width as f64,
            angle,
            plan.stars_per_branch,
            options.jitter,
        )
        .populate(rng, &mut stars)?;
    }

    spin(&mut stars, Point::ORIGIN, options.spin_factor);

    Ok(Galaxy::new(GalaxyKind::Spiral, width, height, stars))
}

/// Everything a composer needs, independent of where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub kind: GalaxyKind,
    pub width: u32,
    pub height: u32,
    pub stars: usize,
    pub elliptical: EllipticalOptions,
    pub spiral: SpiralOptions,
}

/// Dispatch to the composer for `params.kind`.
pub fn generate(rng: &mut impl RandomSource, params: &GenerationParams) -> Result<Galaxy> {
    match params.kind {
        GalaxyKind::Elliptical => generate_elliptical(
            rng,
            params.width,
            params.height,
            params.stars,
            &params.elliptical,
        ),
        GalaxyKind::Spiral => {
            generate_spiral(rng, params.width, params.height, params.stars, &params.spiral)
        }
        GalaxyKind::Ring => Err(GalaxyError::config(
            "Ring galaxies are not implemented",
            Some("Use elliptical or spiral"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::geometry::distance;
    use crate::generate::SeededRandom;
    use pretty_assertions::assert_eq;

    fn counts(galaxy: &Galaxy) -> [usize; 3] {
        [
            galaxy.sector_count(Sector::Core),
            galaxy.sector_count(Sector::OuterCore),
            galaxy.sector_count(Sector::Branch),
        ]
    }

    #[test]
    fn test_plan_elliptical_800x600() {
        let plan = plan_elliptical(800, 600, 100).unwrap();
        assert_eq!((plan.core.radius, plan.core.count), (30, 10));
        assert_eq!((plan.outer_core.radius, plan.outer_core.count), (100, 10));
        assert_eq!((plan.halo.radius, plan.halo.count), (295, 80));
        assert_eq!(plan.total(), 100);
    }

    #[test]
    fn test_plan_spiral_800x600() {
        let plan = plan_spiral(800, 600, 10_000, &SpiralOptions::default()).unwrap();
        assert_eq!((plan.core.radius, plan.core.count), (30, 1000));
        assert_eq!((plan.outer_core.radius, plan.outer_core.count), (60, 333));
        assert_eq!(plan.stars_per_branch, 1444);
        assert_eq!(plan.branch_total(), 8664);
        assert_eq!(plan.arm_width, 33);
        assert_eq!(plan.branch_radius, 295);
        assert_eq!(plan.randomized_reach, (225, 300));
        assert_eq!(plan.total(), 9997);
    }

    #[test]
    fn test_elliptical_exact_count_and_order() {
        let mut rng = SeededRandom::new(42);
        let galaxy =
            generate_elliptical(&mut rng, 800, 600, 100, &EllipticalOptions::default()).unwrap();

        assert_eq!(galaxy.kind(), GalaxyKind::Elliptical);
        assert_eq!(galaxy.stars_count(), 100);
        assert_eq!(counts(&galaxy), [10, 10, 80]);

        let sectors: Vec<Sector> = galaxy.stars().iter().map(|s| s.sector).collect();
        assert!(sectors[..10].iter().all(|&s| s == Sector::Core));
        assert!(sectors[10..20].iter().all(|&s| s == Sector::OuterCore));
        assert!(sectors[20..].iter().all(|&s| s == Sector::Branch));
    }

    #[test]
    fn test_elliptical_stars_near_their_region() {
        let mut rng = SeededRandom::new(8);
        let galaxy =
            generate_elliptical(&mut rng, 400, 400, 2000, &EllipticalOptions::default()).unwrap();

        let slack = 10.0 * 2f64.sqrt();
        for star in galaxy.stars() {
            let limit = match star.sector {
                Sector::Core => 20.0,
                Sector::OuterCore => 66.0,
                Sector::Branch => 195.0,
            };
            assert!(distance(Point::ORIGIN, star.position) <= limit + slack);
        }
    }

    #[test]
    fn test_spiral_truncated_total() {
        let mut rng = SeededRandom::new(42);
        let galaxy =
            generate_spiral(&mut rng, 800, 600, 10_000, &SpiralOptions::default()).unwrap();

        assert_eq!(galaxy.kind(), GalaxyKind::Spiral);
        assert_eq!(galaxy.stars_count(), 9997);
        assert_eq!(counts(&galaxy), [1000, 333, 8664]);
    }

    #[test]
    fn test_spiral_total_formula_holds() {
        for (n, b) in [(0, 1), (7, 3), (999, 4), (1234, 5), (50_000, 7)] {
            let options = SpiralOptions {
                branches: b,
                ..SpiralOptions::simple()
            };
            let mut rng = SeededRandom::new(n as u64);
            let galaxy = generate_spiral(&mut rng, 200, 300, n, &options).unwrap();

            let core = n / 10;
            let outer = n / 30;
            let expected = (n - core - outer) / b as usize * b as usize + core + outer;
            assert_eq!(galaxy.stars_count(), expected, "n={} b={}", n, b);
            assert!(galaxy.stars_count() <= n);
        }
    }

    #[test]
    fn test_spiral_rejects_zero_branches() {
        let mut rng = SeededRandom::new(0);
        let options = SpiralOptions {
            branches: 0,
            ..SpiralOptions::default()
        };
        let err = generate_spiral(&mut rng, 800, 600, 100, &options).unwrap_err();
        assert!(matches!(err, GalaxyError::Config { .. }));
    }

    #[test]
    fn test_small_canvas_rejected() {
        let mut rng = SeededRandom::new(0);
        let err = generate_elliptical(&mut rng, 800, 19, 100, &EllipticalOptions::default())
            .unwrap_err();
        assert!(matches!(err, GalaxyError::Config { .. }));
        assert!(plan_spiral(0, 600, 10, &SpiralOptions::default()).is_err());
    }

    #[test]
    fn test_spiral_without_spin_keeps_branches_on_their_rays() {
        // One branch, no jitter, no spin: every branch star stays on the
        // positive-y half plane inside the arm width.
        let options = SpiralOptions {
            branches: 1,
            spin_factor: 0.0,
            jitter: 0.0,
            disk_jitter: 0.0,
            branch_radius: BranchRadius::Fixed,
        };
        let mut rng = SeededRandom::new(13);
        let galaxy = generate_spiral(&mut rng, 300, 300, 600, &options).unwrap();

        for star in galaxy.stars().iter().filter(|s| s.sector == Sector::Branch) {
            assert!(star.position.y >= 0.0);
            assert!(star.position.x.abs() <= 100.0);
            assert!(distance(Point::ORIGIN, star.position) <= 145.0 + 1e-9);
        }
    }

    fn flat_spiral(branch_radius: BranchRadius) -> SpiralOptions {
        SpiralOptions {
            spin_factor: 0.0,
            jitter: 0.0,
            disk_jitter: 0.0,
            branch_radius,
            ..SpiralOptions::default()
        }
    }

    /// Furthest star of each branch, in branch order.
    fn branch_reaches(galaxy: &Galaxy, per_branch: usize) -> Vec<f64> {
        let branch_stars: Vec<&Star> =
            galaxy.stars().iter().filter(|s| s.sector == Sector::Branch).collect();
        branch_stars
            .chunks(per_branch)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|s| distance(Point::ORIGIN, s.position))
                    .fold(0.0, f64::max)
            })
            .collect()
    }

    #[test]
    fn test_randomized_branches_reach_different_lengths() {
        let options = flat_spiral(BranchRadius::Randomized);
        let plan = plan_spiral(800, 600, 10_000, &options).unwrap();
        let mut rng = SeededRandom::new(21);
        let galaxy = generate_spiral(&mut rng, 800, 600, 10_000, &options).unwrap();

        let reaches = branch_reaches(&galaxy, plan.stars_per_branch);
        assert_eq!(reaches.len(), 6);
        for reach in &reaches {
            assert!(*reach <= 300.0 + 1e-9, "reach {}", reach);
            assert!(*reach >= 200.0, "reach {}", reach);
        }
        let spread = reaches.iter().cloned().fold(f64::MIN, f64::max)
            - reaches.iter().cloned().fold(f64::MAX, f64::min);
        assert!(spread > 1.0, "{:?}", reaches);
    }

    #[test]
    fn test_fixed_branches_share_one_reach() {
        let options = flat_spiral(BranchRadius::Fixed);
        let plan = plan_spiral(800, 600, 10_000, &options).unwrap();
        let mut rng = SeededRandom::new(21);
        let galaxy = generate_spiral(&mut rng, 800, 600, 10_000, &options).unwrap();

        for reach in branch_reaches(&galaxy, plan.stars_per_branch) {
            assert!(reach <= 295.0 + 1e-9);
            assert!(reach > 290.0);
        }
    }

    #[test]
    fn test_randomized_reach_follows_draw() {
        use std::collections::VecDeque;

        /// Replays unit values mapped into the requested range.
        struct Scripted(VecDeque<f64>);
        impl RandomSource for Scripted {
            fn next_in_range(&mut self, lo: f64, hi: f64) -> f64 {
                let t = self.0.pop_front().expect("script exhausted");
                lo + (hi - lo) * t
            }
        }

        // One star, one branch: no core or outer core stars are drawn.
        // Draws: reach u, wedge x, wedge y, two jitters, luminosity.
        let options = SpiralOptions {
            branches: 1,
            ..flat_spiral(BranchRadius::Randomized)
        };
        for (u, reach) in [(1.0, 75.0), (0.0, 100.0), (0.5, 87.5)] {
            let mut rng = Scripted([u, 0.5, 1.0, 0.0, 0.0, 0.5].into_iter().collect());
            let galaxy = generate_spiral(&mut rng, 200, 200, 1, &options).unwrap();

            // The star sits on the tip of the wedge: (min_dim - u * min_dim / 4) / 2.
            let star = galaxy.stars()[0];
            assert_eq!(star.sector, Sector::Branch);
            assert!(star.position.x.abs() < 1e-9, "{:?}", star.position);
            assert!((star.position.y - reach).abs() < 1e-9, "{:?}", star.position);
            assert!(rng.0.is_empty());
        }
    }

    #[test]
    fn test_same_seed_same_galaxy() {
        let params = GenerationParams {
            kind: GalaxyKind::Spiral,
            width: 640,
            height: 480,
            stars: 3000,
            elliptical: EllipticalOptions::default(),
            spiral: SpiralOptions::default(),
        };
        let a = generate(&mut SeededRandom::new(99), &params).unwrap();
        let b = generate(&mut SeededRandom::new(99), &params).unwrap();
        assert_eq!(a, b);

        let c = generate(&mut SeededRandom::new(100), &params).unwrap();
        assert_ne!(a.stars(), c.stars());
    }

    #[test]
    fn test_ring_is_not_implemented() {
        let params = GenerationParams {
            kind: GalaxyKind::Ring,
            width: 640,
            height: 480,
            stars: 10,
            elliptical: EllipticalOptions::default(),
            spiral: SpiralOptions::default(),
        };
        let err = generate(&mut SeededRandom::new(1), &params).unwrap_err();
        assert!(err.to_string().contains("Ring galaxies are not implemented"));
    }
}
