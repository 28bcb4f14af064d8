//! Incremental circle estimator
//!
//! Consumes hand samples one at a time. Every three sufficiently spaced
//! samples are fitted with a circumcircle, and successive fits are blended
//! into a running estimate of the shoulder position and arm length.

use std::collections::VecDeque;

use crate::math::{circumcircle, CircleEstimate};
use crate::Vec3;

/// Minimum distance from the oldest buffered sample for a new sample to be buffered [m]
pub const MIN_SAMPLE_SPACING: f64 = 0.5;

/// Interpolation factor applied between the previous and the new fit
pub const SMOOTHING_FACTOR: f64 = 0.5;

/// Number of samples consumed per circle fit
const FIT_WINDOW: usize = 3;

/// What happened to a sample passed to [`IncrementalCircleEstimator::add_sample`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Non-finite, or too close to the oldest buffered sample; dropped
    Rejected,
    /// Buffered, waiting for more samples
    Buffered,
    /// Completed a triple that produced a valid fit
    Fitted,
    /// Completed a degenerate triple; the triple was discarded
    FitFailed,
}

/// Running shoulder estimate from consecutive sample triples
///
/// Triples do not overlap: once three samples are buffered they are all
/// consumed by one fit and the buffer starts empty again.
#[derive(Debug, Clone, Default)]
pub struct IncrementalCircleEstimator {
    /// Pending samples, oldest first
    buffer: VecDeque<Vec3>,
    /// Current smoothed estimate
    estimate: Option<CircleEstimate>,
}

impl IncrementalCircleEstimator {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::with_capacity(FIT_WINDOW),
            estimate: None,
        }
    }

    /// Feed one hand sample
    ///
    /// Never fails; degenerate triples are skipped silently and only
    /// reported through the returned [`AddOutcome`].
    pub fn add_sample(&mut self, point: Vec3) -> AddOutcome {
        if !point.iter().all(|c| c.is_finite()) {
            return AddOutcome::Rejected;
        }

        let accept = match self.buffer.front() {
            None => true,
            Some(oldest) => (point - oldest).norm() > MIN_SAMPLE_SPACING,
        };

        if !accept {
            return AddOutcome::Rejected;
        }

        self.buffer.push_back(point);

        if self.buffer.len() < FIT_WINDOW {
            return AddOutcome::Buffered;
        }

        let triple: Vec<Vec3> = self.buffer.drain(..).collect();

        match circumcircle(&triple[0], &triple[1], &triple[2]) {
            Some(fit) => {
                self.estimate = Some(match self.estimate {
                    None => fit,
                    Some(previous) => previous.lerp(&fit, SMOOTHING_FACTOR),
                });
                log::trace!(
                    "circle fit: center = {:?}, radius = {:.3}",
                    fit.center,
                    fit.radius
                );
                AddOutcome::Fitted
            }
            None => {
                log::trace!("degenerate sample triple discarded");
                AddOutcome::FitFailed
            }
        }
    }

    /// Current smoothed estimate, if any fit has succeeded
    pub fn estimate(&self) -> Option<CircleEstimate> {
        self.estimate
    }

    pub fn has_estimate(&self) -> bool {
        self.estimate.is_some()
    }

    /// Estimated shoulder position (circle center)
    pub fn shoulder_position(&self) -> Option<Vec3> {
        self.estimate.map(|e| e.center)
    }

    /// Estimated arm length (circle radius)
    pub fn arm_length(&self) -> Option<f64> {
        self.estimate.map(|e| e.radius)
    }

    /// Number of samples waiting for the next fit
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // First circle: center (0, 1.5, 0), radius 1 in the XY plane
    fn first_triple() -> [Vec3; 3] {
        [
            Vec3::new(0.0, 0.5, 0.0),
            Vec3::new(1.0, 1.5, 0.0),
            Vec3::new(0.0, 2.5, 0.0),
        ]
    }

    // Second circle: center (0.2, 1.3, 0), radius 2 in the XY plane
    fn second_triple() -> [Vec3; 3] {
        [
            Vec3::new(0.2, -0.7, 0.0),
            Vec3::new(2.2, 1.3, 0.0),
            Vec3::new(0.2, 3.3, 0.0),
        ]
    }

    #[test]
    fn test_no_estimate_from_two_samples() {
        let mut estimator = IncrementalCircleEstimator::new();
        let [a, b, _] = first_triple();

        assert_eq!(estimator.add_sample(a), AddOutcome::Buffered);
        assert_eq!(estimator.add_sample(b), AddOutcome::Buffered);

        assert!(!estimator.has_estimate());
        assert!(estimator.estimate().is_none());
        assert_eq!(estimator.pending(), 2);
    }

    #[test]
    fn test_third_sample_produces_raw_fit() {
        let mut estimator = IncrementalCircleEstimator::new();
        let [a, b, c] = first_triple();

        estimator.add_sample(a);
        estimator.add_sample(b);
        assert_eq!(estimator.add_sample(c), AddOutcome::Fitted);

        let expected = circumcircle(&a, &b, &c).unwrap();
        let estimate = estimator.estimate().unwrap();

        assert_eq!(estimate, expected);
        assert_relative_eq!(estimate.center, Vec3::new(0.0, 1.5, 0.0), epsilon = 1e-12);
        assert_relative_eq!(estimate.radius, 1.0, epsilon = 1e-12);
        assert_eq!(estimator.pending(), 0);
    }

    #[test]
    fn test_second_fit_is_blended() {
        let mut estimator = IncrementalCircleEstimator::new();
        for p in first_triple().into_iter().chain(second_triple()) {
            estimator.add_sample(p);
        }

        let [a, b, c] = first_triple();
        let first = circumcircle(&a, &b, &c).unwrap();
        let [d, e, f] = second_triple();
        let second = circumcircle(&d, &e, &f).unwrap();
        let expected = first.lerp(&second, 0.5);

        let estimate = estimator.estimate().unwrap();

        assert_relative_eq!(estimate.center, expected.center, epsilon = 1e-12);
        assert_relative_eq!(estimate.radius, expected.radius, epsilon = 1e-12);
        assert_relative_eq!(estimate.center, Vec3::new(0.1, 1.4, 0.0), epsilon = 1e-12);
        assert_relative_eq!(estimate.radius, 1.5, epsilon = 1e-12);
        // Not the raw second fit
        assert!((estimate.radius - second.radius).abs() > 0.1);
    }

    #[test]
    fn test_close_samples_are_gated_against_oldest() {
        let mut estimator = IncrementalCircleEstimator::new();

        assert_eq!(estimator.add_sample(Vec3::new(0.0, 0.0, 0.0)), AddOutcome::Buffered);
        // Within 0.5 of the oldest buffered sample
        assert_eq!(estimator.add_sample(Vec3::new(0.3, 0.0, 0.0)), AddOutcome::Rejected);
        // Exactly 0.5 away is still rejected
        assert_eq!(estimator.add_sample(Vec3::new(0.5, 0.0, 0.0)), AddOutcome::Rejected);
        assert_eq!(estimator.add_sample(Vec3::new(0.6, 0.0, 0.0)), AddOutcome::Buffered);
        // Close to the newest but far from the oldest: accepted
        assert_eq!(estimator.add_sample(Vec3::new(0.7, 0.1, 0.0)), AddOutcome::Fitted);
    }

    #[test]
    fn test_non_finite_first_sample_does_not_block() {
        let mut estimator = IncrementalCircleEstimator::new();

        assert_eq!(
            estimator.add_sample(Vec3::new(f64::NAN, f64::NAN, f64::NAN)),
            AddOutcome::Rejected
        );
        assert_eq!(estimator.pending(), 0);

        let [a, b, c] = first_triple();
        assert_eq!(estimator.add_sample(a), AddOutcome::Buffered);
        assert_eq!(estimator.add_sample(Vec3::new(1.0, f64::INFINITY, 0.0)), AddOutcome::Rejected);
        assert_eq!(estimator.add_sample(b), AddOutcome::Buffered);
        assert_eq!(estimator.add_sample(c), AddOutcome::Fitted);
        assert_relative_eq!(estimator.arm_length().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_triple_is_skipped() {
        let mut estimator = IncrementalCircleEstimator::new();

        estimator.add_sample(Vec3::new(0.0, 0.0, 0.0));
        estimator.add_sample(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(estimator.add_sample(Vec3::new(2.0, 0.0, 0.0)), AddOutcome::FitFailed);

        assert!(!estimator.has_estimate());
        assert_eq!(estimator.pending(), 0);
    }

    #[test]
    fn test_degenerate_triple_keeps_previous_estimate() {
        let mut estimator = IncrementalCircleEstimator::new();
        for p in first_triple() {
            estimator.add_sample(p);
        }
        let before = estimator.estimate().unwrap();

        estimator.add_sample(Vec3::new(5.0, 0.0, 0.0));
        estimator.add_sample(Vec3::new(6.0, 0.0, 0.0));
        estimator.add_sample(Vec3::new(7.0, 0.0, 0.0));

        assert_eq!(estimator.estimate(), Some(before));
    }

    #[test]
    fn test_accessors() {
        let mut estimator = IncrementalCircleEstimator::new();
        assert!(estimator.shoulder_position().is_none());
        assert!(estimator.arm_length().is_none());

        for p in first_triple() {
            estimator.add_sample(p);
        }

        assert_relative_eq!(
            estimator.shoulder_position().unwrap(),
            Vec3::new(0.0, 1.5, 0.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(estimator.arm_length().unwrap(), 1.0, epsilon = 1e-12);
    }
}
