use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rewriting a package manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest root is not a JSON object: {}", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
