//! Stars and the sectors that produce them.

use std::fmt;

use serde::Serialize;

/// A point in generation space. The galaxy centre is the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The generation region a star came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sector {
    Core,
    OuterCore,
    Branch,
}

impl Sector {
    pub const ALL: [Sector; 3] = [Sector::Core, Sector::OuterCore, Sector::Branch];

    /// Name used by the simple text format.
    pub fn name(self) -> &'static str {
        match self {
            Sector::Core => "Core",
            Sector::OuterCore => "Outer_Core",
            Sector::Branch => "Branch",
        }
    }

    /// Numeric tag used by the extended text format.
    pub fn index(self) -> u8 {
        match self {
            Sector::Core => 0,
            Sector::OuterCore => 1,
            Sector::Branch => 2,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single generated star.
///
/// Positions are not clamped to the originating region: jitter and spin are
/// allowed to push a star past its sector's nominal radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Star {
    pub position: Point,
    pub sector: Sector,
    /// Brightness in `[0, 1]`, drawn once at creation.
    pub luminosity: f64,
}

impl Star {
    pub fn new(position: Point, sector: Sector, luminosity: f64) -> Self {
        Self {
            position,
            sector,
            luminosity,
        }
    }
}
