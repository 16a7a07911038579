//! JSON dump of a whole galaxy.

use std::fs;
use std::path::Path;

use crate::error::{GalaxyError, Result};
use crate::types::Galaxy;

/// Serialize a galaxy as pretty-printed JSON.
pub fn to_json(galaxy: &Galaxy) -> Result<String> {
    Ok(serde_json::to_string_pretty(galaxy)?)
}

/// Write a galaxy as JSON to `path`.
pub fn write_json(galaxy: &Galaxy, path: &Path) -> Result<()> {
    let json = to_json(galaxy)?;
    fs::write(path, json).map_err(|e| GalaxyError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write JSON: {}", e),
    })
}
