//! # Gonio Core
//!
//! Shoulder joint estimation from hand trajectories.
//!
//! A user sweeps a tracked hand through an arc with a straight arm. The hand
//! positions lie (approximately) on a sphere centred on the shoulder, so the
//! shoulder position and the arm length can be recovered by fitting circles
//! and spheres through the recorded samples.
//!
//! ## Modules
//!
//! - [`math`]: Geometry primitives (circumcircle, circumsphere, arm angle)
//! - [`estimation`]: Incremental circle estimator and batch sphere estimator
//! - [`session`]: Measurement session coordinating both estimators
//! - [`simulation`]: Synthetic arm sweeps and noisy position sensors

pub mod math;
pub mod estimation;
pub mod session;
pub mod simulation;

// Common type aliases
use nalgebra::Vector3;

/// 3D vector type, used for every sample point and estimated center
pub type Vec3 = Vector3<f64>;

/// World up axis. Heights reported to the user are the Y component.
pub fn world_up() -> Vec3 {
    Vec3::new(0.0, 1.0, 0.0)
}
