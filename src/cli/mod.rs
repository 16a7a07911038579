pub mod completions;
pub mod generate;
pub mod init;
pub mod stats;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::{GalaxyConfig, CONFIG_FILENAME};
use crate::error::Result;
use crate::generate::{BranchRadius, SeededRandom};
use crate::types::GalaxyKind;

/// galaxy - Procedural star-field generator
#[derive(Parser, Debug)]
#[command(name = "galaxy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a galaxy and export it as PNG, text and/or JSON
    Generate(generate::GenerateArgs),

    /// Print sector sizes and generated star counts
    Stats(stats::StatsArgs),

    /// Write a default galaxy.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Generation flags shared by `generate` and `stats`.
///
/// Flags override values from the config file.
#[derive(Args, Debug, Default)]
pub struct GalaxyArgs {
    /// Config file (default: ./galaxy.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Galaxy topology
    #[arg(long, value_enum)]
    pub kind: Option<GalaxyKind>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Requested number of stars
    #[arg(long, short = 'n')]
    pub stars: Option<usize>,

    /// Number of spiral branches
    #[arg(long, short)]
    pub branches: Option<u32>,

    /// Spin factor (radians per pixel of radius; sign sets winding)
    #[arg(long, allow_negative_numbers = true)]
    pub spin: Option<f64>,

    /// Spiral branch reach
    #[arg(long, value_enum)]
    pub branch_radius: Option<BranchRadius>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GalaxyArgs {
    /// Load the config file (if any) and apply flag overrides.
    pub fn resolve(&self) -> Result<GalaxyConfig> {
        let mut config = match &self.config {
            Some(path) => GalaxyConfig::load(path)?,
            None if Path::new(CONFIG_FILENAME).exists() => {
                GalaxyConfig::load(Path::new(CONFIG_FILENAME))?
            }
            None => GalaxyConfig::default(),
        };

        if let Some(kind) = self.kind {
            config.kind = kind;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(stars) = self.stars {
            config.stars = stars;
        }
        if let Some(branches) = self.branches {
            config.spiral.branches = branches;
        }
        if let Some(spin) = self.spin {
            config.spiral.spin_factor = spin;
        }
        if let Some(branch_radius) = self.branch_radius {
            config.spiral.branch_radius = branch_radius;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

/// Random source for a run: seeded when the config names a seed.
pub fn random_source(config: &GalaxyConfig) -> SeededRandom {
    match config.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    }
}
