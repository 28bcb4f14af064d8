//! Session runner
//!
//! Feeds samples through a [`MeasurementSession`] and surfaces the
//! estimator's diagnostics through the `log` facade.

use rand::rngs::StdRng;
use rand::SeedableRng;

use gonio_core::estimation::{EstimationObserver, SphereCandidate};
use gonio_core::session::{MeasurementSession, SessionReport};
use gonio_core::simulation::PositionSensor;
use gonio_core::Vec3;

use crate::config::RunConfig;

/// Observer that writes estimator events to the log
#[derive(Debug, Default)]
pub struct LogObserver {
    pub recorded: usize,
    pub inliers: usize,
    pub outliers: usize,
}

impl EstimationObserver for LogObserver {
    fn sample_recorded(&mut self, point: &Vec3) {
        self.recorded += 1;
        log::trace!("sample recorded: {point:?}");
    }

    fn candidate(&mut self, candidate: &SphereCandidate, is_outlier: bool) {
        if is_outlier {
            self.outliers += 1;
        } else {
            self.inliers += 1;
        }
        log::trace!(
            "candidate {:?} from {:?}: {}",
            candidate.center,
            candidate.indices,
            if is_outlier { "outlier" } else { "inlier" }
        );
    }

    fn message(&mut self, text: &str) {
        log::debug!("{text}");
    }

    fn center(&mut self, center: Option<&Vec3>) {
        match center {
            Some(c) => log::debug!("batch center: [{:.3}, {:.3}, {:.3}]", c.x, c.y, c.z),
            None => log::debug!("batch center: none"),
        }
    }
}

/// Run one session over `samples`
pub fn run_session(
    config: &RunConfig,
    samples: &[Vec3],
    reference: &Vec3,
    observer: &mut LogObserver,
) -> SessionReport {
    let mut session =
        MeasurementSession::new(config.batch.clone()).with_record_spacing(config.record_spacing);

    log::info!("Reading {} sample points...", samples.len());
    for p in samples {
        session.add_sample(*p, observer);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    session.finish(reference, &mut rng, observer)
}

/// Samples of the configured synthetic sweep, with sensor noise
pub fn synthetic_samples(config: &RunConfig) -> Vec<Vec3> {
    let mut sensor = PositionSensor::new(config.noise_std, config.seed.wrapping_add(1));
    config.sweep.measure(&mut sensor)
}
