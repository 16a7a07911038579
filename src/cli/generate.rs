//! Generate command implementation.
//!
//! Builds one galaxy from the resolved configuration and writes the
//! requested exports.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::GalaxyConfig;
use crate::error::{GalaxyError, Result};
use crate::export::{
    rasterize, to_pixel_sequence, write_json, write_png, write_text, Brightness, TextFormat,
};
use crate::generate::generate;
use crate::output::{display_path, plural, Printer};

use super::{random_source, GalaxyArgs};

/// Generate a galaxy and export it
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub galaxy: GalaxyArgs,

    /// PNG output path
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Text dump output path
    #[arg(long)]
    pub text: Option<PathBuf>,

    /// JSON dump output path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Skip the PNG
    #[arg(long)]
    pub no_image: bool,

    /// Skip the text dump
    #[arg(long)]
    pub no_text: bool,

    /// How star brightness is drawn in the PNG
    #[arg(long, value_enum)]
    pub brightness: Option<Brightness>,

    /// Text dump layout
    #[arg(long, value_enum)]
    pub text_format: Option<TextFormat>,
}

impl GenerateArgs {
    fn resolve(&self) -> Result<GalaxyConfig> {
        let mut config = self.galaxy.resolve()?;
        let output = &mut config.output;

        if self.image.is_some() {
            output.image = self.image.clone();
        }
        if self.text.is_some() {
            output.text = self.text.clone();
        }
        if self.json.is_some() {
            output.json = self.json.clone();
        }
        if self.no_image {
            output.image = None;
        }
        if self.no_text {
            output.text = None;
        }
        if let Some(brightness) = self.brightness {
            output.brightness = brightness;
        }
        if let Some(text_format) = self.text_format {
            output.text_format = text_format;
        }

        Ok(config)
    }
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let config = args.resolve()?;
    config.validate()?;

    let mut rng = random_source(&config);

    printer.status(
        "Generating",
        &format!(
            "{} galaxy {}x{} ({}, seed {})",
            config.kind,
            config.width,
            config.height,
            plural(config.stars, "star", "stars"),
            rng.seed()
        ),
    );

    let galaxy = generate(&mut rng, &config.params())?;

    if galaxy.stars_count() < config.stars {
        printer.warning(
            "Truncated",
            &format!(
                "{} requested, {} generated across {}",
                config.stars,
                galaxy.stars_count(),
                plural(config.spiral.branches as usize, "branch", "branches")
            ),
        );
    }

    let output = &config.output;

    if let Some(path) = &output.image {
        ensure_parent(path)?;
        let pixels = to_pixel_sequence(&galaxy, output.brightness, &mut rng);
        let img = rasterize(&galaxy, &pixels, output.background);
        write_png(&img, path)?;
        printer.status("Wrote", &display_path(path));
    }

    if let Some(path) = &output.text {
        ensure_parent(path)?;
        write_text(&galaxy, output.text_format, path)?;
        printer.status("Wrote", &display_path(path));
    }

    if let Some(path) = &output.json {
        ensure_parent(path)?;
        write_json(&galaxy, path)?;
        printer.status("Wrote", &display_path(path));
    }

    printer.success(
        "Finished",
        &plural(galaxy.stars_count(), "star", "stars"),
    );

    Ok(())
}

/// Create the parent directory of an output path if needed.
fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| GalaxyError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })
        }
        _ => Ok(()),
    }
}
