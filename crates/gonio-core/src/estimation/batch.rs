//! Batch sphere estimator
//!
//! Runs after a session has ended, over the complete recorded trajectory.
//! A single four point sphere fit through noisy hand samples is unreliable,
//! so the estimator draws many random quadruples, fits an exact sphere
//! through each, and keeps only the candidate centers that lie within a
//! fixed distance of an externally supplied reference point (typically the
//! head position). The surviving centers are averaged.
//!
//! Two independent gates must pass for an estimate to be produced: enough
//! inlier centers, and a small enough fraction of outliers.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BatchConfig, EstimationObserver};
use crate::math::circumsphere;
use crate::Vec3;

/// Number of samples per sphere fit
const SAMPLE_SIZE: usize = 4;

/// Sphere center from one random draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereCandidate {
    /// Fitted sphere center
    pub center: Vec3,
    /// Trajectory indices of the four supporting samples
    pub indices: [usize; SAMPLE_SIZE],
}

/// Why a batch run produced no estimate
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    #[error("Too few points. Please try again")]
    TooFewSamples { found: usize, required: usize },
    #[error("Measurement not precise enough. Please try again")]
    TooFewInliers { inliers: usize, required: usize },
    #[error("Measurement not precise enough. Please try again")]
    TooManyOutliers { ratio: f64, max: f64 },
}

/// Result and statistics of one batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Mean of the inlier centers, when both acceptance gates pass
    pub center: Option<Vec3>,
    /// Reason for a missing center
    pub rejection: Option<Rejection>,
    /// Non-degenerate candidates produced
    pub candidates: usize,
    pub inliers: usize,
    pub outliers: usize,
    /// Draws whose four samples admitted no unique sphere
    pub degenerate_draws: usize,
    /// `outliers / candidates`, 0 when there are no candidates
    pub outlier_ratio: f64,
}

impl BatchOutcome {
    fn too_few_samples(found: usize, required: usize) -> Self {
        Self {
            center: None,
            rejection: Some(Rejection::TooFewSamples { found, required }),
            candidates: 0,
            inliers: 0,
            outliers: 0,
            degenerate_draws: 0,
            outlier_ratio: 0.0,
        }
    }
}

/// RANSAC-style shoulder estimator over a full trajectory
///
/// Unlike classical RANSAC the inlier test is the distance of each candidate
/// center to a fixed reference point, not consensus among the samples, and
/// the threshold is never re-estimated.
#[derive(Debug, Clone, Default)]
pub struct BatchSphereEstimator {
    config: BatchConfig,
}

impl BatchSphereEstimator {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Estimate the shoulder position from a recorded trajectory
    ///
    /// # Arguments
    /// * `points` - Complete session trajectory
    /// * `reference` - Prior for the shoulder location (e.g. head position)
    /// * `rng` - Random source; draws are sequential, so a seeded generator
    ///   makes the run reproducible
    /// * `observer` - Receives candidates, messages and the final center
    ///
    /// # Returns
    /// The estimate together with the run statistics. The observer's
    /// `center` hook is called exactly once.
    pub fn estimate<R, O>(
        &self,
        points: &[Vec3],
        reference: &Vec3,
        rng: &mut R,
        observer: &mut O,
    ) -> BatchOutcome
    where
        R: Rng + ?Sized,
        O: EstimationObserver + ?Sized,
    {
        let n = points.len();
        let required = self.config.min_sample_points.max(SAMPLE_SIZE);

        if n < required {
            log::debug!("batch estimate skipped: {n} samples, {required} required");
            let outcome = BatchOutcome::too_few_samples(n, required);
            if let Some(rejection) = &outcome.rejection {
                observer.message(&rejection.to_string());
            }
            observer.center(None);
            return outcome;
        }

        let mut inlier_sum = Vec3::zeros();
        let mut candidates = 0usize;
        let mut inliers = 0usize;
        let mut degenerate_draws = 0usize;

        for _ in 0..self.config.iteration_count {
            let indices = draw_distinct(rng, n);

            let fit = circumsphere(
                &points[indices[0]],
                &points[indices[1]],
                &points[indices[2]],
                &points[indices[3]],
            );

            let center = match fit {
                Ok(fit) => fit.center,
                Err(err) => {
                    log::trace!("draw {indices:?} discarded: {err}");
                    degenerate_draws += 1;
                    continue;
                }
            };

            let is_outlier = (center - reference).norm() > self.config.max_distance_to_reference;

            candidates += 1;
            if !is_outlier {
                inliers += 1;
                inlier_sum += center;
            }

            observer.candidate(&SphereCandidate { center, indices }, is_outlier);
        }

        let outliers = candidates - inliers;
        let outlier_ratio = if candidates > 0 {
            outliers as f64 / candidates as f64
        } else {
            0.0
        };

        observer.message(&format!(
            "{candidates} points sampled. {outliers} outliers. Outlier ratio {outlier_ratio:.3}"
        ));
        log::debug!(
            "batch estimate: {candidates} candidates, {inliers} inliers, {outliers} outliers, \
             {degenerate_draws} degenerate draws"
        );

        let rejection = if inliers == 0 || inliers < self.config.min_inlier_centers {
            Some(Rejection::TooFewInliers {
                inliers,
                required: self.config.min_inlier_centers,
            })
        } else if outlier_ratio > self.config.max_outlier_ratio {
            Some(Rejection::TooManyOutliers {
                ratio: outlier_ratio,
                max: self.config.max_outlier_ratio,
            })
        } else {
            None
        };

        let center = match &rejection {
            Some(rejection) => {
                observer.message(&rejection.to_string());
                None
            }
            None => Some(inlier_sum / inliers as f64),
        };

        observer.center(center.as_ref());

        BatchOutcome {
            center,
            rejection,
            candidates,
            inliers,
            outliers,
            degenerate_draws,
            outlier_ratio,
        }
    }
}

/// Draw four distinct indices from `0..n`
///
/// Each index is drawn uniformly and redrawn while it collides with one
/// already taken in this draw. Requires `n >= 4`.
fn draw_distinct<R: Rng + ?Sized>(rng: &mut R, n: usize) -> [usize; SAMPLE_SIZE] {
    debug_assert!(n >= SAMPLE_SIZE);
    let mut indices = [0usize; SAMPLE_SIZE];
    for slot in 0..SAMPLE_SIZE {
        let mut r = rng.gen_range(0..n);
        while indices[..slot].contains(&r) {
            r = rng.gen_range(0..n);
        }
        indices[slot] = r;
    }
    indices
}
