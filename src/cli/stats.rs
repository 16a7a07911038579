//! Stats command implementation.
//!
//! Prints the planned sector sizes, then generates the galaxy and reports
//! how many stars each sector actually received. Output goes to stdout.

use std::fmt::Write as _;

use clap::Args;

use crate::config::GalaxyConfig;
use crate::error::{GalaxyError, Result};
use crate::generate::{generate, plan_elliptical, plan_spiral, BranchRadius, SectorPlan};
use crate::output::{plural, Printer};
use crate::types::{Galaxy, GalaxyKind, Sector};

use super::{random_source, GalaxyArgs};

/// Print sector sizes and generated star counts
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    #[command(flatten)]
    pub galaxy: GalaxyArgs,
}

pub fn run(args: StatsArgs, printer: &Printer) -> Result<()> {
    let config = args.galaxy.resolve()?;
    config.validate()?;

    let mut rng = random_source(&config);
    let galaxy = generate(&mut rng, &config.params())?;

    printer.info(
        "Generated",
        &format!("{} galaxy (seed {})", config.kind, rng.seed()),
    );
    print!("{}", report(&config, &galaxy)?);

    Ok(())
}

fn plan_line(out: &mut String, label: &str, plan: &SectorPlan) {
    let _ = writeln!(
        out,
        "{:<12} radius {:>5}  stars {:>8}",
        label, plan.radius, plan.count
    );
}

/// Build the plan/actual report for a generated galaxy.
pub fn report(config: &GalaxyConfig, galaxy: &Galaxy) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}x{}, {} requested",
        config.kind,
        config.width,
        config.height,
        plural(config.stars, "star", "stars")
    );

    match config.kind {
        GalaxyKind::Elliptical => {
            let plan = plan_elliptical(config.width, config.height, config.stars)?;
            plan_line(&mut out, "core", &plan.core);
            plan_line(&mut out, "outer core", &plan.outer_core);
            plan_line(&mut out, "halo", &plan.halo);
        }
        GalaxyKind::Spiral => {
            let plan = plan_spiral(config.width, config.height, config.stars, &config.spiral)?;
            plan_line(&mut out, "core", &plan.core);
            plan_line(&mut out, "outer core", &plan.outer_core);
            let reach = match config.spiral.branch_radius {
                BranchRadius::Fixed => plan.branch_radius.to_string(),
                BranchRadius::Randomized => {
                    format!("{}-{}", plan.randomized_reach.0, plan.randomized_reach.1)
                }
            };
            let _ = writeln!(
                out,
                "{:<12} radius {:>5}  stars {:>8}  ({} x {}, arm width {})",
                "branches",
                reach,
                plan.branch_total(),
                plan.branches,
                plan.stars_per_branch,
                plan.arm_width
            );
        }
        GalaxyKind::Ring => {
            return Err(GalaxyError::config("Ring galaxies are not implemented", None));
        }
    }

    for sector in Sector::ALL {
        let _ = writeln!(out, "{:<12} {:>8}", sector.name(), galaxy.sector_count(sector));
    }
    let _ = writeln!(out, "{:<12} {:>8}", "Total", galaxy.stars_count());

    Ok(out)
}
