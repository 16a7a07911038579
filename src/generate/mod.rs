//! Procedural star-field generation.
//!
//! Stars are placed by rejection sampling inside disk or wedge regions,
//! jittered, and (for spirals) twisted by a radius-dependent spin. All
//! randomness flows through a caller-supplied `RandomSource`.

mod compose;
mod geometry;
mod random;
mod region;
mod sampler;
mod spin;

pub use compose::{
    generate, generate_elliptical, generate_spiral, plan_elliptical, plan_spiral, BranchRadius,
    EllipticalOptions, EllipticalPlan, GenerationParams, SectorPlan, SpiralOptions, SpiralPlan,
    MIN_DIMENSION,
};
pub use geometry::{distance, distance_or_zero, rotate_about};
pub use random::{RandomSource, SeededRandom};
pub use region::{generate_branch_region, generate_disk_region, Region, RegionShape};
pub use sampler::{
    jitter, sample_branch_star, sample_in_disk, sample_in_wedge, sample_star, MAX_EXTENT,
};
pub use spin::spin;
