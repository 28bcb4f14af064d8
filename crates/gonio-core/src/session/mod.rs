//! Measurement sessions
//!
//! A session starts when the user begins sweeping the arm and ends when
//! sampling stops. Every hand sample feeds both estimators; at the end the
//! batch estimator runs over the recorded trajectory and both results are
//! reported.

pub mod coordinator;
pub mod report;

pub use coordinator::*;
pub use report::*;
