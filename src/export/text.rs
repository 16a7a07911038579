//! Plain-text star dumps.
//!
//! Simple form, one line per star:
//!
//! ```text
//! <x>, <y> <SectorName>
//! ```
//!
//! Extended form, a count line followed by one line per star:
//!
//! ```text
//! <count>
//! <x>, <y> <luminosity> <sectorIndex>
//! ```
//!
//! Coordinates are truncated toward zero.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};
use crate::types::{Galaxy, Star};

/// Text dump layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    Simple,
    #[default]
    Extended,
}

fn star_line(star: &Star, format: TextFormat) -> String {
    let x = star.position.x as i64;
    let y = star.position.y as i64;
    match format {
        TextFormat::Simple => format!("{}, {} {}", x, y, star.sector.name()),
        TextFormat::Extended => {
            format!("{}, {} {:.6} {}", x, y, star.luminosity, star.sector.index())
        }
    }
}

/// Render a galaxy as text lines, without trailing newlines.
pub fn to_text_lines(galaxy: &Galaxy, format: TextFormat) -> Vec<String> {
    let header = match format {
        TextFormat::Simple => None,
        TextFormat::Extended => Some(galaxy.stars_count().to_string()),
    };

    header
        .into_iter()
        .chain(galaxy.stars().iter().map(|s| star_line(s, format)))
        .collect()
}

/// Write a galaxy's text dump to `path`, one newline-terminated line each.
pub fn write_text(galaxy: &Galaxy, format: TextFormat, path: &Path) -> Result<()> {
    let io_err = |e: std::io::Error| GalaxyError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write star list: {}", e),
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    for line in to_text_lines(galaxy, format) {
        writeln!(out, "{}", line).map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    Ok(())
}
