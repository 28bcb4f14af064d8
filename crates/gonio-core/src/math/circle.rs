//! Circle through three points in 3D
//!
//! Used by the incremental estimator: three hand samples taken from an arm
//! sweep lie on a circle whose center approximates the shoulder and whose
//! radius approximates the arm length.

use serde::{Deserialize, Serialize};

use crate::Vec3;

/// Relative collinearity threshold.
///
/// `denom / (|v1|² |v2|²)` is `sin²` of the angle between the two edge
/// vectors; fits below this value are rejected.
pub const COLLINEAR_TOLERANCE: f64 = 1e-12;

/// A circle in 3D (center and radius)
///
/// The center is read as the shoulder position and the radius as the arm
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleEstimate {
    /// Circle center [m]
    pub center: Vec3,
    /// Circle radius [m]
    pub radius: f64,
}

impl CircleEstimate {
    pub fn new(center: Vec3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Linear interpolation between two estimates
    ///
    /// Center and radius are blended independently:
    /// `result = self + (other - self) * t`.
    pub fn lerp(&self, other: &CircleEstimate, t: f64) -> CircleEstimate {
        CircleEstimate {
            center: self.center.lerp(&other.center, t),
            radius: self.radius + (other.radius - self.radius) * t,
        }
    }
}

/// Circumcircle of three points in 3D
///
/// With `v1 = p1 - p0` and `v2 = p2 - p0` the center is
/// `p0 + k1·v1 + k2·v2` where
///
/// ```text
/// denom = (v1·v1)(v2·v2) - (v1·v2)²
/// k1    = 0.5·(v2·v2)·(v1·v1 - v1·v2) / denom
/// k2    = 0.5·(v1·v1)·(v2·v2 - v1·v2) / denom
/// ```
///
/// Returns `None` for collinear or coincident points, and whenever the
/// resulting radius is not finite.
pub fn circumcircle(p0: &Vec3, p1: &Vec3, p2: &Vec3) -> Option<CircleEstimate> {
    let v1 = p1 - p0;
    let v2 = p2 - p0;

    let v1v1 = v1.dot(&v1);
    let v2v2 = v2.dot(&v2);
    let v1v2 = v1.dot(&v2);

    let denom = v1v1 * v2v2 - v1v2 * v1v2;

    // Negated comparison so that NaN inputs are rejected as well
    if !(denom > COLLINEAR_TOLERANCE * v1v1 * v2v2) {
        return None;
    }

    let base = 0.5 / denom;
    let k1 = base * v2v2 * (v1v1 - v1v2);
    let k2 = base * v1v1 * (v2v2 - v1v2);

    let center = p0 + v1 * k1 + v2 * k2;
    let radius = (center - p0).norm();

    if !radius.is_finite() {
        return None;
    }

    Some(CircleEstimate { center, radius })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    /// Point on a circle in the plane spanned by orthonormal `u`, `v`
    fn on_circle(center: Vec3, radius: f64, u: Vec3, v: Vec3, theta: f64) -> Vec3 {
        center + radius * (theta.cos() * u + theta.sin() * v)
    }

    #[test]
    fn test_unit_circle_in_xy_plane() {
        let p0 = Vec3::new(1.0, 0.0, 0.0);
        let p1 = Vec3::new(0.0, 1.0, 0.0);
        let p2 = Vec3::new(-1.0, 0.0, 0.0);

        let fit = circumcircle(&p0, &p1, &p2).unwrap();

        assert_relative_eq!(fit.center, Vec3::zeros(), epsilon = 1e-12);
        assert_relative_eq!(fit.radius, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tilted_circle_is_equidistant() {
        let center = Vec3::new(0.3, 1.4, -0.2);
        let radius = 0.65;
        let u = Vec3::new(1.0, 1.0, 0.0).normalize();
        let v = Vec3::new(-1.0, 1.0, 2.0).normalize();

        let p0 = on_circle(center, radius, u, v, 0.1);
        let p1 = on_circle(center, radius, u, v, 0.9);
        let p2 = on_circle(center, radius, u, v, 2.3);

        let fit = circumcircle(&p0, &p1, &p2).unwrap();

        assert_relative_eq!(fit.center, center, epsilon = 1e-9);
        for p in [p0, p1, p2] {
            assert_relative_eq!((p - fit.center).norm(), fit.radius, epsilon = 1e-9);
        }
        assert_relative_eq!(fit.radius, radius, epsilon = 1e-9);
    }

    #[test]
    fn test_short_arc() {
        // Three samples spanning only 10 degrees of arc
        let center = Vec3::new(0.0, 1.5, 0.0);
        let u = Vec3::x();
        let v = Vec3::y();
        let step = 5.0 * PI / 180.0;

        let fit = circumcircle(
            &on_circle(center, 0.7, u, v, -PI / 2.0),
            &on_circle(center, 0.7, u, v, -PI / 2.0 + step),
            &on_circle(center, 0.7, u, v, -PI / 2.0 + 2.0 * step),
        )
        .unwrap();

        assert_relative_eq!(fit.center, center, epsilon = 1e-9);
        assert_relative_eq!(fit.radius, 0.7, epsilon = 1e-9);
    }

    #[test]
    fn test_collinear_points_rejected() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(1.0, 1.0, 1.0);
        let p2 = Vec3::new(2.0, 2.0, 2.0);

        assert!(circumcircle(&p0, &p1, &p2).is_none());
    }

    #[test]
    fn test_nearly_collinear_points_rejected() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(1.0, 0.0, 0.0);
        let p2 = Vec3::new(2.0, 1e-9, 0.0);

        assert!(circumcircle(&p0, &p1, &p2).is_none());
    }

    #[test]
    fn test_coincident_points_rejected() {
        let p = Vec3::new(0.5, 1.0, 0.2);
        assert!(circumcircle(&p, &p, &Vec3::new(1.0, 0.0, 0.0)).is_none());
        assert!(circumcircle(&p, &p, &p).is_none());
    }

    #[test]
    fn test_nan_input_rejected() {
        let p0 = Vec3::new(f64::NAN, 0.0, 0.0);
        let p1 = Vec3::new(0.0, 1.0, 0.0);
        let p2 = Vec3::new(-1.0, 0.0, 0.0);

        assert!(circumcircle(&p0, &p1, &p2).is_none());
    }

    #[test]
    fn test_lerp_half() {
        let a = CircleEstimate::new(Vec3::new(0.0, 0.0, 0.0), 1.0);
        let b = CircleEstimate::new(Vec3::new(2.0, 4.0, -2.0), 3.0);

        let mid = a.lerp(&b, 0.5);

        assert_relative_eq!(mid.center, Vec3::new(1.0, 2.0, -1.0), epsilon = 1e-12);
        assert_relative_eq!(mid.radius, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = CircleEstimate::new(Vec3::new(0.1, 0.2, 0.3), 0.5);
        let b = CircleEstimate::new(Vec3::new(-1.0, 1.0, 2.0), 0.8);

        assert_eq!(a.lerp(&b, 0.0), a);
        assert_relative_eq!(a.lerp(&b, 1.0).center, b.center, epsilon = 1e-12);
        assert_relative_eq!(a.lerp(&b, 1.0).radius, b.radius, epsilon = 1e-12);
    }
}
