//! PNG output for generated galaxies.
//!
//! Pixels are painted onto a solid background in sequence order. Later
//! pixels overwrite earlier ones; there is no blending.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{GalaxyError, Result};
use crate::types::{Colour, Galaxy};

use super::Pixel;

/// Paint `pixels` onto a `galaxy`-sized canvas filled with `background`.
///
/// Pixels outside the canvas are skipped.
pub fn rasterize(galaxy: &Galaxy, pixels: &[Pixel], background: Colour) -> RgbaImage {
    let (width, height) = galaxy.size();
    let mut img: RgbaImage = ImageBuffer::from_pixel(width, height, Rgba(background.to_rgba()));

    for pixel in pixels {
        let (Ok(x), Ok(y)) = (u32::try_from(pixel.x), u32::try_from(pixel.y)) else {
            continue;
        };
        if x < width && y < height {
            img.put_pixel(x, y, Rgba(pixel.colour.to_rgba()));
        }
    }

    img
}

/// Write a rasterized galaxy to a PNG file.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|e| GalaxyError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
