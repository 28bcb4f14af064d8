//! Gonio command-line support
//!
//! Configuration loading, sample input and the session runner behind the
//! `gonio` binary.
//!
//! # Components
//!
//! - [`config`]: JSON runner configuration
//! - [`input`]: Recorded sample files and vector arguments
//! - [`runner`]: Runs a measurement session with logging diagnostics
//! - [`error`]: CLI error type

pub mod config;
pub mod error;
pub mod input;
pub mod runner;

pub use config::{load_config, RunConfig};
pub use error::CliError;
pub use runner::{run_session, synthetic_samples, LogObserver};
