//! CLI errors

use std::path::PathBuf;

use thiserror::Error;

use gonio_core::estimation::ConfigError;

/// Errors surfaced by the `gonio` command-line tool
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Invalid batch configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid vector '{0}': expected x,y,z")]
    InvalidVector(String),
    #[error("A reference point is required when samples are loaded from a file")]
    MissingReference,
}
