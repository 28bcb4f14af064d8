//! Synthetic measurement data
//!
//! Generates arm sweeps on a known sphere and corrupts them with sensor
//! noise, for testing the estimators and for running sessions without a
//! tracked controller.

pub mod sensors;
pub mod sweep;

pub use sensors::*;
pub use sweep::*;
