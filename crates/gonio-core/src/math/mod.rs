//! Geometry primitives for Gonio
//!
//! Implements the closed-form circle through three points, the sphere
//! through four points (via 4×4 determinants) and the arm elevation angle.

pub mod circle;
pub mod sphere;
pub mod angle;

pub use circle::*;
pub use sphere::*;
pub use angle::*;
