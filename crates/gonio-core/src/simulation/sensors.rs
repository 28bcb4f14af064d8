//! Sensor models for simulation
//!
//! Provides noisy hand position measurements for realistic sessions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Vec3;

/// Standard normal sample via the Box-Muller transform
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-10); // Avoid log(0)
    let u2: f64 = rng.gen();

    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Isotropic Gaussian vector with the given standard deviation
pub fn gaussian_vec3<R: Rng + ?Sized>(rng: &mut R, std_dev: f64) -> Vec3 {
    Vec3::new(
        gaussian(rng) * std_dev,
        gaussian(rng) * std_dev,
        gaussian(rng) * std_dev,
    )
}

/// Position sensor model (e.g. a tracked VR controller)
#[derive(Debug, Clone)]
pub struct PositionSensor {
    /// Noise standard deviation [m]
    noise_std: f64,
    /// Random number generator
    rng: StdRng,
}

impl PositionSensor {
    pub fn new(noise_std: f64, seed: u64) -> Self {
        Self {
            noise_std,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Get noisy position measurement
    pub fn measure(&mut self, true_position: &Vec3) -> Vec3 {
        if self.noise_std == 0.0 {
            return *true_position;
        }
        true_position + gaussian_vec3(&mut self.rng, self.noise_std)
    }
}
