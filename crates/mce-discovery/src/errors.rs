use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while listing a plugins root
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Plugins directory not found: {}", .0.display())]
    RootMissing(PathBuf),

    #[error("Plugins path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to walk plugins directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
