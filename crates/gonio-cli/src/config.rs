//! Runner configuration
//!
//! Loaded from a JSON file; every section is optional and falls back to its
//! defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use gonio_core::estimation::{BatchConfig, DEFAULT_RECORD_SPACING};
use gonio_core::simulation::ArmSweep;
use gonio_core::Vec3;

use crate::error::CliError;

/// Head position relative to the shoulder used for synthetic sweeps [m]
pub const SYNTHETIC_HEAD_OFFSET: [f64; 3] = [0.15, 0.25, 0.0];

/// Main runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Batch estimator parameters
    pub batch: BatchConfig,
    /// Reference point for outlier classification (e.g. head position)
    pub reference: Option<Vec3>,
    /// Synthetic sweep used when no samples file is given
    pub sweep: ArmSweep,
    /// Noise added to synthetic samples [m]
    pub noise_std: f64,
    /// Minimum spacing between recorded trajectory samples [m]
    pub record_spacing: f64,
    /// Seed for the batch estimator and the synthetic sensor
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            batch: BatchConfig::default(),
            reference: None,
            sweep: ArmSweep::default(),
            noise_std: 0.001,
            record_spacing: DEFAULT_RECORD_SPACING,
            seed: 0,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), CliError> {
        self.batch.validate()?;
        Ok(())
    }

    /// Reference for a synthetic sweep: the configured one, or a head
    /// position above the true shoulder
    pub fn synthetic_reference(&self) -> Vec3 {
        self.reference
            .unwrap_or_else(|| self.sweep.shoulder + Vec3::from(SYNTHETIC_HEAD_OFFSET))
    }
}

/// Load and validate a runner configuration file
pub fn load_config(path: &Path) -> Result<RunConfig, CliError> {
    let data = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: RunConfig = serde_json::from_str(&data).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}
