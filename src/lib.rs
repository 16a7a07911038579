//! galaxy - Procedural star-field generator
//!
//! Generates elliptical and spiral galaxies as sets of 2D stars, then
//! exports them as PNG rasters, plain-text star lists or JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod generate;
pub mod output;
pub mod types;

pub use config::{GalaxyConfig, OutputConfig, CONFIG_FILENAME};
pub use error::{GalaxyError, Result};
pub use export::{
    rasterize, to_json, to_pixel_sequence, to_text_lines, write_json, write_png, write_text,
    Brightness, Pixel, TextFormat,
};
pub use generate::{
    generate, generate_elliptical, generate_spiral, BranchRadius, EllipticalOptions,
    GenerationParams, RandomSource, SeededRandom, SpiralOptions,
};
pub use types::{Colour, Galaxy, GalaxyKind, Point, Sector, Star};
