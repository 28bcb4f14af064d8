//! Sphere through four points in 3D
//!
//! Classical circumsphere solution. Writing the sphere as
//! `x² + y² + z² + Dx + Ey + Fz + G = 0` and substituting the four points
//! gives a linear system whose solution by Cramer's rule is a ratio of 4×4
//! determinants:
//!
//! ```text
//!     | x1 y1 z1 1 |          | t1 y1 z1 1 |
//! T = | x2 y2 z2 1 |      D = | t2 y2 z2 1 | / T     (t = -(x² + y² + z²))
//!     | x3 y3 z3 1 |          | t3 y3 z3 1 |
//!     | x4 y4 z4 1 |          | t4 y4 z4 1 |
//! ```
//!
//! E, F and G substitute the t column for the y, z and constant columns.
//! The center is `(-D/2, -E/2, -F/2)`.
//!
//! Determinants are evaluated by explicit cofactor expansion along the
//! first row with a fixed term order. Acceptance thresholds downstream were
//! tuned against this evaluation, so it must not be replaced by a pivoting
//! decomposition.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Vec3;

/// Relative coplanarity threshold.
///
/// `T` is six times the signed volume of the tetrahedron spanned by the four
/// points; it is compared against `s³` where `s` is the largest distance from
/// the first point to the others.
pub const COPLANAR_TOLERANCE: f64 = 1e-9;

/// Reasons a four point sphere fit has no unique finite center
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SphereFitError {
    #[error("All four points coincide")]
    Coincident,
    #[error("Points are coplanar (T = {t:e})")]
    Coplanar { t: f64 },
    #[error("Sphere center is not finite")]
    NonFinite,
}

/// Result of a four point sphere fit
///
/// Keeps the intermediate determinants for diagnostics. `d`, `e`, `f` and
/// `g` are already divided by `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereFit {
    /// Sphere center
    pub center: Vec3,
    /// Orientation/scale determinant
    pub t: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
}

impl SphereFit {
    /// Sphere radius, from the quadric coefficients
    ///
    /// `r² = (D² + E² + F²)/4 - G`
    pub fn radius(&self) -> f64 {
        (0.25 * (self.d * self.d + self.e * self.e + self.f * self.f) - self.g)
            .max(0.0)
            .sqrt()
    }
}

/// 4×4 determinant by cofactor expansion along the first row
///
/// Arguments are the matrix in row-major order:
///
/// ```text
/// | a b c d |
/// | e f g h |
/// | i j k l |
/// | m n o p |
/// ```
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub fn det4(
    a: f64, b: f64, c: f64, d: f64,
    e: f64, f: f64, g: f64, h: f64,
    i: f64, j: f64, k: f64, l: f64,
    m: f64, n: f64, o: f64, p: f64,
) -> f64 {
    // a(fkp − flo − gjp + gln + hjo − hkn) − b(ekp − elo − gip + glm + hio − hkm)
    // + c(ejp − eln − fip + flm + hin − hjm) − d(ejo − ekn − fio + fkm + gin − gjm)
    a * (f * k * p - f * l * o - g * j * p + g * l * n + h * j * o - h * k * n)
        - b * (e * k * p - e * l * o - g * i * p + g * l * m + h * i * o - h * k * m)
        + c * (e * j * p - e * l * n - f * i * p + f * l * m + h * i * n - h * j * m)
        - d * (e * j * o - e * k * n - f * i * o + f * k * m + g * i * n - g * j * m)
}

/// Circumsphere of four points in 3D
///
/// # Arguments
/// * `p1`..`p4` - Points on the sphere
///
/// # Returns
/// The fitted center and the raw determinants, or the reason the four
/// points admit no unique finite sphere.
pub fn circumsphere(p1: &Vec3, p2: &Vec3, p3: &Vec3, p4: &Vec3) -> Result<SphereFit, SphereFitError> {
    let scale = [p2, p3, p4]
        .iter()
        .map(|p| (*p - p1).norm())
        .fold(0.0_f64, f64::max);

    if scale == 0.0 {
        return Err(SphereFitError::Coincident);
    }

    let t1 = -p1.norm_squared();
    let t2 = -p2.norm_squared();
    let t3 = -p3.norm_squared();
    let t4 = -p4.norm_squared();

    #[rustfmt::skip]
    let t = det4(
        p1.x, p1.y, p1.z, 1.0,
        p2.x, p2.y, p2.z, 1.0,
        p3.x, p3.y, p3.z, 1.0,
        p4.x, p4.y, p4.z, 1.0,
    );

    // Negated comparison so that NaN volumes are rejected as well
    if !(t.abs() > COPLANAR_TOLERANCE * scale * scale * scale) {
        log::trace!("coplanar sphere sample: T = {t:e}, scale = {scale}");
        return Err(SphereFitError::Coplanar { t });
    }

    #[rustfmt::skip]
    let d = det4(
        t1, p1.y, p1.z, 1.0,
        t2, p2.y, p2.z, 1.0,
        t3, p3.y, p3.z, 1.0,
        t4, p4.y, p4.z, 1.0,
    ) / t;
    #[rustfmt::skip]
    let e = det4(
        p1.x, t1, p1.z, 1.0,
        p2.x, t2, p2.z, 1.0,
        p3.x, t3, p3.z, 1.0,
        p4.x, t4, p4.z, 1.0,
    ) / t;
    #[rustfmt::skip]
    let f = det4(
        p1.x, p1.y, t1, 1.0,
        p2.x, p2.y, t2, 1.0,
        p3.x, p3.y, t3, 1.0,
        p4.x, p4.y, t4, 1.0,
    ) / t;
    #[rustfmt::skip]
    let g = det4(
        p1.x, p1.y, p1.z, t1,
        p2.x, p2.y, p2.z, t2,
        p3.x, p3.y, p3.z, t3,
        p4.x, p4.y, p4.z, t4,
    ) / t;

    let center = Vec3::new(-d / 2.0, -e / 2.0, -f / 2.0);

    if !center.iter().all(|c| c.is_finite()) {
        return Err(SphereFitError::NonFinite);
    }

    Ok(SphereFit { center, t, d, e, f, g })
}
