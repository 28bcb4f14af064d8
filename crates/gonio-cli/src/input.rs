//! Sample input
//!
//! Recorded trajectories are JSON arrays of `[x, y, z]` hand positions in
//! meters, Y up, in the order they were sampled.

use std::fs;
use std::path::Path;

use gonio_core::Vec3;

use crate::error::CliError;

/// Load hand samples from a JSON file
pub fn load_samples(path: &Path) -> Result<Vec<Vec3>, CliError> {
    let data = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a vector given as `x,y,z`
pub fn parse_vec3(text: &str) -> Result<Vec3, CliError> {
    let parts: Vec<f64> = text
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| CliError::InvalidVector(text.to_string()))?;

    match parts.as_slice() {
        [x, y, z] if parts.iter().all(|v| v.is_finite()) => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(CliError::InvalidVector(text.to_string())),
    }
}
