//! Arm angle relative to the shoulder
//!
//! The arm angle is measured in the vertical plane that contains the
//! shoulder→hand vector, from straight down (0°) through horizontal (90°)
//! to straight up (180°). Y is the world up axis.

use crate::{world_up, Vec3};

/// Direction of a hanging arm, as an angle in the vertical plane [deg]
const HANGING_ARM_DEG: f64 = -90.0;

/// Shortest signed difference `target - current` between two angles [deg]
///
/// Result lies in (-180, 180].
pub fn delta_angle(current: f64, target: f64) -> f64 {
    let mut delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Elevation of the shoulder→hand vector above the horizontal plane [deg]
///
/// Range [-90, 90]. A zero-length vector gives 0.
pub fn elevation(hand: &Vec3, shoulder: &Vec3) -> f64 {
    let up = world_up();
    let delta = hand - shoulder;
    let vertical = delta.dot(&up);
    let horizontal = (delta - vertical * up).norm();
    vertical.atan2(horizontal).to_degrees()
}

/// Arm angle in degrees, 0 for a hanging arm and 180 for a raised arm
///
/// # Arguments
/// * `hand` - Hand position
/// * `shoulder` - Estimated shoulder position
pub fn arm_angle(hand: &Vec3, shoulder: &Vec3) -> f64 {
    delta_angle(elevation(hand, shoulder), HANGING_ARM_DEG).abs()
}
