//! Core domain types for galaxy.
//!
//! - `Colour` - RGBA colour values
//! - `Point`, `Star`, `Sector` - individual stars and where they came from
//! - `Galaxy`, `GalaxyKind` - the generated star field

mod colour;
mod galaxy;
mod star;

pub use colour::Colour;
pub use galaxy::{Galaxy, GalaxyKind};
pub use star::{Point, Sector, Star};
