//! Session results

use serde::{Deserialize, Serialize};

use crate::estimation::BatchOutcome;
use crate::math::{arm_angle, CircleEstimate};
use crate::Vec3;

/// Results of one finished measurement session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Smoothed three point circle estimate, if any fit succeeded
    pub incremental: Option<CircleEstimate>,
    /// Batch sphere estimate and its statistics
    pub batch: BatchOutcome,
    /// Samples passed to the session
    pub samples_received: usize,
    /// Samples kept in the trajectory after spacing
    pub samples_recorded: usize,
    /// User-facing messages in emission order
    pub messages: Vec<String>,
}

impl SessionReport {
    /// Shoulder position from the batch estimator
    pub fn batch_center(&self) -> Option<Vec3> {
        self.batch.center
    }

    /// Shoulder position from the incremental estimator
    pub fn incremental_center(&self) -> Option<Vec3> {
        self.incremental.map(|e| e.center)
    }

    /// Best available shoulder position
    ///
    /// The batch estimate is preferred; the incremental one is used when the
    /// batch run was rejected.
    pub fn shoulder(&self) -> Option<Vec3> {
        self.batch_center().or_else(|| self.incremental_center())
    }

    /// Arm angle of `hand` relative to [`shoulder`](Self::shoulder) [deg]
    pub fn arm_angle(&self, hand: &Vec3) -> Option<f64> {
        self.shoulder().map(|shoulder| arm_angle(hand, &shoulder))
    }
}
