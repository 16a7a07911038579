//! Galaxy to display-space pixels.

use serde::{Deserialize, Serialize};

use crate::generate::RandomSource;
use crate::types::{Colour, Galaxy, Star};

/// How star brightness is turned into a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Brightness {
    /// White, with alpha taken from the star's luminosity.
    #[default]
    Luminosity,
    /// Opaque gray, level drawn uniformly per star at export time from 100..=255.
    RandomGray,
}

/// Lowest gray level drawn in `RandomGray` mode.
pub const MIN_GRAY: u8 = 100;

/// A star placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub x: i64,
    pub y: i64,
    pub colour: Colour,
}

/// Canvas centre for a galaxy: `(width / 2, height / 2)`.
pub fn display_centre(galaxy: &Galaxy) -> (i64, i64) {
    (galaxy.width() as i64 / 2, galaxy.height() as i64 / 2)
}

/// Display position: the centre minus the star offset, truncated toward zero.
pub fn display_position(centre: (i64, i64), star: &Star) -> (i64, i64) {
    (
        (centre.0 as f64 - star.position.x) as i64,
        (centre.1 as f64 - star.position.y) as i64,
    )
}

/// Map every star to a pixel, in star order.
///
/// `rng` is only drawn from in `RandomGray` mode.
pub fn to_pixel_sequence(
    galaxy: &Galaxy,
    brightness: Brightness,
    rng: &mut impl RandomSource,
) -> Vec<Pixel> {
    let centre = display_centre(galaxy);

    galaxy
        .stars()
        .iter()
        .map(|star| {
            let (x, y) = display_position(centre, star);
            let colour = match brightness {
                Brightness::Luminosity => {
                    Colour::WHITE.with_alpha((255.0 * star.luminosity.clamp(0.0, 1.0)) as u8)
                }
                Brightness::RandomGray => {
                    // Floor over [MIN_GRAY, 256) weights every level equally.
                    let level = rng.next_in_range(MIN_GRAY as f64, 256.0).floor().min(255.0);
                    Colour::gray(level as u8)
                }
            };
            Pixel { x, y, colour }
        })
        .collect()
}
