//! Recorded hand trajectory
//!
//! Append-only sequence of hand samples collected during one measurement
//! session. A new trajectory is created per session.

use serde::{Deserialize, Serialize};

use crate::Vec3;

/// Default spacing between recorded samples [m]
pub const DEFAULT_RECORD_SPACING: f64 = 0.1;

/// Ordered hand samples of one session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<Vec3>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample unconditionally
    pub fn push(&mut self, point: Vec3) {
        self.points.push(point);
    }

    /// Append a sample if it is farther than `min_spacing` from the last one
    ///
    /// Returns `true` if the sample was recorded. The first finite sample is
    /// always recorded; samples with a non-finite coordinate never are.
    pub fn record(&mut self, point: Vec3, min_spacing: f64) -> bool {
        if !point.iter().all(|c| c.is_finite()) {
            return false;
        }
        let keep = match self.points.last() {
            None => true,
            Some(last) => (point - last).norm() > min_spacing,
        };
        if keep {
            self.points.push(point);
        }
        keep
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn last(&self) -> Option<&Vec3> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<Vec3> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
