//! Galaxy configuration (galaxy.yaml) parsing.
//!
//! The config file describes the canvas, the star budget, the topology and
//! its tuning, and where exports go. Every field has a default, so an empty
//! file is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};
use crate::export::{Brightness, TextFormat};
use crate::generate::{
    EllipticalOptions, GenerationParams, SpiralOptions, MAX_EXTENT, MIN_DIMENSION,
};
use crate::types::{Colour, GalaxyKind};

/// Default config filename.
pub const CONFIG_FILENAME: &str = "galaxy.yaml";

/// Export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// PNG output path. `None` skips the image.
    pub image: Option<PathBuf>,

    /// Text dump path. `None` skips the dump.
    pub text: Option<PathBuf>,

    /// JSON dump path.
    pub json: Option<PathBuf>,

    pub brightness: Brightness,

    pub text_format: TextFormat,

    pub background: Colour,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image: Some(PathBuf::from("galaxy.png")),
            text: Some(PathBuf::from("galaxy.txt")),
            json: None,
            brightness: Brightness::default(),
            text_format: TextFormat::default(),
            background: Colour::BLACK,
        }
    }
}

/// Galaxy configuration loaded from galaxy.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    pub width: u32,
    pub height: u32,

    /// Requested star budget. Spirals may produce slightly fewer.
    pub stars: usize,

    pub kind: GalaxyKind,

    /// Fixed seed for reproducible output.
    pub seed: Option<u64>,

    pub elliptical: EllipticalOptions,

    pub spiral: SpiralOptions,

    pub output: OutputConfig,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            stars: 10_000,
            kind: GalaxyKind::default(),
            seed: None,
            elliptical: EllipticalOptions::default(),
            spiral: SpiralOptions::default(),
            output: OutputConfig::default(),
        }
    }
}

impl GalaxyConfig {
    /// Load configuration from a galaxy.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GalaxyError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| GalaxyError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| GalaxyError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Reject configurations no composer can satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.width.min(self.height) < MIN_DIMENSION {
            return Err(GalaxyError::Config {
                message: format!("Canvas {}x{} is too small", self.width, self.height),
                help: Some(format!("width and height must both be at least {}", MIN_DIMENSION)),
            });
        }

        if self.kind == GalaxyKind::Ring {
            return Err(GalaxyError::config(
                "Ring galaxies are not implemented",
                Some("Use kind: elliptical or kind: spiral"),
            ));
        }

        let jitters = [
            ("elliptical.jitter", self.elliptical.jitter),
            ("spiral.jitter", self.spiral.jitter),
            ("spiral.disk_jitter", self.spiral.disk_jitter),
        ];
        for (name, value) in jitters {
            if !value.is_finite() || value < 0.0 {
                return Err(GalaxyError::config(
                    format!("{} must be a non-negative number (got {})", name, value),
                    None,
                ));
            }
            if value > MAX_EXTENT {
                return Err(GalaxyError::config(
                    format!("{} is too large (got {})", name, value),
                    Some(format!("Jitter must be at most {}", MAX_EXTENT).as_str()),
                ));
            }
        }

        if self.kind == GalaxyKind::Spiral {
            if self.spiral.branches < 1 {
                return Err(GalaxyError::config(
                    "spiral.branches must be at least 1",
                    Some("A spiral galaxy needs one or more branches"),
                ));
            }
            if !self.spiral.spin_factor.is_finite() {
                return Err(GalaxyError::config(
                    format!("spiral.spin_factor must be finite (got {})", self.spiral.spin_factor),
                    None,
                ));
            }
        }

        Ok(())
    }

    /// The generation half of the configuration.
    pub fn params(&self) -> GenerationParams {
        GenerationParams {
            kind: self.kind,
            width: self.width,
            height: self.height,
            stars: self.stars,
            elliptical: self.elliptical,
            spiral: self.spiral,
        }
    }
}
