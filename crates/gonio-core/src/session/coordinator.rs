//! Session coordinator
//!
//! Owns both estimators and the trajectory for exactly one session. There is
//! no reset: a new [`MeasurementSession`] is created for every measurement,
//! and [`MeasurementSession::finish`] consumes it.

use rand::Rng;

use crate::estimation::{
    BatchConfig, BatchSphereEstimator, EstimationObserver, IncrementalCircleEstimator,
    SphereCandidate, Trajectory, DEFAULT_RECORD_SPACING,
};
use crate::Vec3;

use super::SessionReport;

/// One shoulder measurement
#[derive(Debug, Clone)]
pub struct MeasurementSession {
    incremental: IncrementalCircleEstimator,
    batch: BatchSphereEstimator,
    trajectory: Trajectory,
    /// Minimum spacing between recorded trajectory samples [m]
    record_spacing: f64,
    samples_received: usize,
}

impl MeasurementSession {
    pub fn new(config: BatchConfig) -> Self {
        Self {
            incremental: IncrementalCircleEstimator::new(),
            batch: BatchSphereEstimator::new(config),
            trajectory: Trajectory::new(),
            record_spacing: DEFAULT_RECORD_SPACING,
            samples_received: 0,
        }
    }

    /// Override the trajectory recording spacing
    pub fn with_record_spacing(mut self, spacing: f64) -> Self {
        self.record_spacing = spacing;
        self
    }

    /// Feed one hand sample to both estimators
    ///
    /// Returns `true` if the sample was kept in the batch trajectory; the
    /// observer's `sample_recorded` hook fires in that case.
    pub fn add_sample<O>(&mut self, point: Vec3, observer: &mut O) -> bool
    where
        O: EstimationObserver + ?Sized,
    {
        self.samples_received += 1;
        self.incremental.add_sample(point);

        let recorded = self.trajectory.record(point, self.record_spacing);
        if recorded {
            observer.sample_recorded(&point);
        }
        recorded
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn incremental(&self) -> &IncrementalCircleEstimator {
        &self.incremental
    }

    /// End the session and run the batch estimator
    ///
    /// # Arguments
    /// * `reference` - Prior for the shoulder location at the end of the
    ///   session (e.g. the current head position)
    /// * `rng` - Random source for the batch estimator
    /// * `observer` - Receives batch diagnostics and all report messages
    pub fn finish<R, O>(self, reference: &Vec3, rng: &mut R, observer: &mut O) -> SessionReport
    where
        R: Rng + ?Sized,
        O: EstimationObserver + ?Sized,
    {
        let mut tap = MessageTap {
            inner: observer,
            messages: Vec::new(),
        };

        log::info!(
            "finishing session: {} samples received, {} recorded",
            self.samples_received,
            self.trajectory.len()
        );

        let batch = self
            .batch
            .estimate(self.trajectory.points(), reference, rng, &mut tap);

        if let Some(center) = &batch.center {
            tap.message(&format!("Calculated height (4d matrix) = {:.2} m", center.y));
        }

        let incremental = self.incremental.estimate();
        if let Some(circle) = &incremental {
            tap.message(&format!(
                "Calculated height (3d matrix) = {:.2} m",
                circle.center.y
            ));
        }

        SessionReport {
            incremental,
            batch,
            samples_received: self.samples_received,
            samples_recorded: self.trajectory.len(),
            messages: tap.messages,
        }
    }
}

impl Default for MeasurementSession {
    fn default() -> Self {
        Self::new(BatchConfig::default())
    }
}

/// Forwards every event and keeps a copy of the messages
struct MessageTap<'a, O: ?Sized> {
    inner: &'a mut O,
    messages: Vec<String>,
}

impl<O: EstimationObserver + ?Sized> EstimationObserver for MessageTap<'_, O> {
    fn sample_recorded(&mut self, point: &Vec3) {
        self.inner.sample_recorded(point);
    }

    fn candidate(&mut self, candidate: &SphereCandidate, is_outlier: bool) {
        self.inner.candidate(candidate, is_outlier);
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
        self.inner.message(text);
    }

    fn center(&mut self, center: Option<&Vec3>) {
        self.inner.center(center);
    }
}
