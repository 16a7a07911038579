//! The generated galaxy value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GalaxyError;

use super::{Sector, Star};

/// Galaxy topology.
///
/// `Ring` is accepted by configuration but no composer produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GalaxyKind {
    Elliptical,
    Ring,
    #[default]
    Spiral,
}

impl GalaxyKind {
    pub fn name(self) -> &'static str {
        match self {
            GalaxyKind::Elliptical => "elliptical",
            GalaxyKind::Ring => "ring",
            GalaxyKind::Spiral => "spiral",
        }
    }
}

impl fmt::Display for GalaxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GalaxyKind {
    type Err = GalaxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elliptical" => Ok(GalaxyKind::Elliptical),
            "ring" => Ok(GalaxyKind::Ring),
            "spiral" => Ok(GalaxyKind::Spiral),
            other => Err(GalaxyError::config(
                format!("Unknown galaxy kind: {}", other),
                Some("Use elliptical, ring or spiral"),
            )),
        }
    }
}

/// A complete star field.
///
/// Stars are stored in generation order: core, outer core, then branches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Galaxy {
    kind: GalaxyKind,
    width: u32,
    height: u32,
    stars: Vec<Star>,
}

impl Galaxy {
    pub fn new(kind: GalaxyKind, width: u32, height: u32, stars: Vec<Star>) -> Self {
        Self {
            kind,
            width,
            height,
            stars,
        }
    }

    pub fn kind(&self) -> GalaxyKind {
        self.kind
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Number of stars actually generated.
    pub fn stars_count(&self) -> usize {
        self.stars.len()
    }

    /// Number of stars tagged with `sector`.
    pub fn sector_count(&self, sector: Sector) -> usize {
        self.stars.iter().filter(|s| s.sector == sector).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Spiral".parse::<GalaxyKind>().unwrap(), GalaxyKind::Spiral);
        assert_eq!(" ring ".parse::<GalaxyKind>().unwrap(), GalaxyKind::Ring);
        assert!("lenticular".parse::<GalaxyKind>().is_err());
    }

    #[test]
    fn test_sector_count() {
        let stars = vec![
            Star::new(Point::ORIGIN, Sector::Core, 0.5),
            Star::new(Point::new(3.0, 4.0), Sector::Branch, 0.1),
            Star::new(Point::new(-3.0, 4.0), Sector::Branch, 0.9),
        ];
        let galaxy = Galaxy::new(GalaxyKind::Spiral, 100, 50, stars);

        assert_eq!(galaxy.stars_count(), 3);
        assert_eq!(galaxy.sector_count(Sector::Core), 1);
        assert_eq!(galaxy.sector_count(Sector::OuterCore), 0);
        assert_eq!(galaxy.sector_count(Sector::Branch), 2);
        assert_eq!(galaxy.size(), (100, 50));
    }
}
