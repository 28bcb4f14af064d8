//! Shoulder estimation algorithms
//!
//! Two independent estimators consume hand samples:
//! - Incremental circle estimator: running, smoothed three point fits
//! - Batch sphere estimator: random four point sphere fits over the whole
//!   trajectory with reference-distance outlier rejection

pub mod config;
pub mod incremental;
pub mod trajectory;
pub mod observer;
pub mod batch;

pub use config::*;
pub use incremental::*;
pub use trajectory::*;
pub use observer::*;
pub use batch::*;
