//! Error types for CLI commands

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use mce_bundle::BundleError;
use mce_config::ConfigError;
use mce_manifest::ManifestError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Manifest(#[from] ManifestError),

    #[error("Bundle config error: {0}")]
    Bundle(#[from] BundleError),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
