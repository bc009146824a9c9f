use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("Failed to serialize bundle configs: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
