//! Export adapters for generated galaxies.
//!
//! Galaxies are read-only here: pixel sequences and rasters for images,
//! line records for text, and a JSON dump.

mod json;
mod pixels;
mod png;
mod text;

pub use json::{to_json, write_json};
pub use pixels::{display_centre, display_position, to_pixel_sequence, Brightness, Pixel, MIN_GRAY};
pub use png::{rasterize, write_png};
pub use text::{to_text_lines, write_text, TextFormat};
