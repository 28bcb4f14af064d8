//! Synthetic arm sweeps
//!
//! A straight arm rotating about the shoulder keeps the hand on a sphere of
//! radius `arm_length`. The sweep interpolates elevation and azimuth
//! linearly, so the path is not confined to one plane.

use serde::{Deserialize, Serialize};

use super::PositionSensor;
use crate::Vec3;

/// Arm sweep configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmSweep {
    /// True shoulder position [m]
    pub shoulder: Vec3,
    /// True arm length [m]
    pub arm_length: f64,
    /// Elevation above horizontal at the start of the sweep [deg]
    pub elevation_start_deg: f64,
    /// Elevation above horizontal at the end of the sweep [deg]
    pub elevation_end_deg: f64,
    /// Heading at the start of the sweep, about the up axis [deg]
    pub azimuth_start_deg: f64,
    /// Heading at the end of the sweep [deg]
    pub azimuth_end_deg: f64,
    /// Number of hand samples
    pub samples: usize,
}

impl Default for ArmSweep {
    fn default() -> Self {
        Self {
            shoulder: Vec3::new(0.0, 1.4, 0.0),
            arm_length: 0.65,
            elevation_start_deg: -80.0,
            elevation_end_deg: 80.0,
            azimuth_start_deg: -30.0,
            azimuth_end_deg: 30.0,
            samples: 200,
        }
    }
}

impl ArmSweep {
    /// Hand position at sweep parameter `s` in [0, 1]
    pub fn position_at(&self, s: f64) -> Vec3 {
        let elevation = lerp(self.elevation_start_deg, self.elevation_end_deg, s).to_radians();
        let azimuth = lerp(self.azimuth_start_deg, self.azimuth_end_deg, s).to_radians();

        let direction = Vec3::new(
            elevation.cos() * azimuth.cos(),
            elevation.sin(),
            elevation.cos() * azimuth.sin(),
        );

        self.shoulder + self.arm_length * direction
    }

    /// Exact hand positions along the sweep
    pub fn positions(&self) -> Vec<Vec3> {
        match self.samples {
            0 => Vec::new(),
            1 => vec![self.position_at(0.0)],
            n => (0..n)
                .map(|i| self.position_at(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }

    /// Hand positions as measured by `sensor`
    pub fn measure(&self, sensor: &mut PositionSensor) -> Vec<Vec3> {
        self.positions().iter().map(|p| sensor.measure(p)).collect()
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
