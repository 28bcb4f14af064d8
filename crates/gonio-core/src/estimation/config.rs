//! Batch estimator configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest trajectory a four point sphere fit can sample from
const MIN_SAMPLE_POINTS_FLOOR: usize = 4;

/// Invalid batch estimator configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("min_sample_points must be at least 4, got {0}")]
    TooFewSamplePoints(usize),
    #[error("max_distance_to_reference must be positive and finite, got {0}")]
    InvalidReferenceDistance(f64),
    #[error("iteration_count must be positive")]
    NoIterations,
    #[error("max_outlier_ratio must lie in [0, 1], got {0}")]
    InvalidOutlierRatio(f64),
}

/// Configuration for [`BatchSphereEstimator`](super::BatchSphereEstimator)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Minimum trajectory length before any sampling is attempted
    pub min_sample_points: usize,
    /// Candidate centers farther than this from the reference point are outliers [m]
    pub max_distance_to_reference: f64,
    /// Minimum number of inlier centers required for an estimate
    pub min_inlier_centers: usize,
    /// Number of random four point draws
    pub iteration_count: usize,
    /// Maximum accepted fraction of outlier candidates
    pub max_outlier_ratio: f64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            min_sample_points: 10,
            max_distance_to_reference: 0.6,
            min_inlier_centers: 4,
            iteration_count: 1000,
            max_outlier_ratio: 0.2,
        }
    }
}

impl BatchConfig {
    /// Check that the parameters describe a runnable estimator
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_sample_points < MIN_SAMPLE_POINTS_FLOOR {
            return Err(ConfigError::TooFewSamplePoints(self.min_sample_points));
        }
        if !(self.max_distance_to_reference.is_finite() && self.max_distance_to_reference > 0.0) {
            return Err(ConfigError::InvalidReferenceDistance(
                self.max_distance_to_reference,
            ));
        }
        if self.iteration_count == 0 {
            return Err(ConfigError::NoIterations);
        }
        if !(0.0..=1.0).contains(&self.max_outlier_ratio) {
            return Err(ConfigError::InvalidOutlierRatio(self.max_outlier_ratio));
        }
        Ok(())
    }
}
