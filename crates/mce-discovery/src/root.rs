//! Plugins root providers
//!
//! Discovery only needs two questions answered about the plugins root: which
//! immediate subdirectories exist and whether a given file exists. `FsRoot`
//! answers them from disk, `MemoryRoot` from a fixed list of paths.

use crate::errors::DiscoveryError;
use std::collections::BTreeSet;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Read-only view of a plugins root directory
pub trait RootProvider {
    /// Human readable location, used in log messages
    fn location(&self) -> String;

    /// Names of the immediate subdirectories of the root
    fn list_dirs(&self) -> Result<Vec<String>, DiscoveryError>;

    /// Whether `relative` (relative to the root) names an existing file
    fn is_file(&self, relative: &Path) -> bool;
}

/// Plugins root on the real file system
#[derive(Debug, Clone)]
pub struct FsRoot {
    root: PathBuf,
}

impl FsRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsRoot { root: root.into() }
    }
}

impl RootProvider for FsRoot {
    fn location(&self) -> String {
        self.root.display().to_string()
    }

    fn list_dirs(&self) -> Result<Vec<String>, DiscoveryError> {
        if !self.root.exists() {
            return Err(DiscoveryError::RootMissing(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(DiscoveryError::NotADirectory(self.root.clone()));
        }

        let mut dirs = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => dirs.push(name.to_string()),
                None => debug!("Skipping non UTF-8 directory name: {:?}", entry.path()),
            }
        }
        Ok(dirs)
    }

    fn is_file(&self, relative: &Path) -> bool {
        self.root.join(relative).is_file()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemoryState {
    Present,
    Missing,
    Unreadable,
}

/// In-memory plugins root built from relative file paths
#[derive(Debug, Clone)]
pub struct MemoryRoot {
    files: BTreeSet<PathBuf>,
    dirs: BTreeSet<String>,
    state: MemoryState,
}

impl MemoryRoot {
    /// Build a root holding `files`. Every path's first component becomes a
    /// subdirectory unless the path is a single component (a plain file).
    pub fn from_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut root = MemoryRoot {
            files: BTreeSet::new(),
            dirs: BTreeSet::new(),
            state: MemoryState::Present,
        };
        for file in files {
            root.add_file(file.as_ref());
        }
        root
    }

    /// A root that does not exist
    pub fn missing() -> Self {
        MemoryRoot {
            state: MemoryState::Missing,
            ..Self::from_files(Vec::<PathBuf>::new())
        }
    }

    /// A root whose listing fails with a permission error
    pub fn unreadable() -> Self {
        MemoryRoot {
            state: MemoryState::Unreadable,
            ..Self::from_files(Vec::<PathBuf>::new())
        }
    }

    /// Add an empty subdirectory
    pub fn with_dir(mut self, name: &str) -> Self {
        self.dirs.insert(name.to_string());
        self
    }

    fn add_file(&mut self, path: &Path) {
        let mut components = path.components().filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        });
        let Some(first) = components.next() else {
            return;
        };
        if components.next().is_some() {
            self.dirs.insert(first.to_string());
        }
        self.files.insert(path.to_path_buf());
    }
}

impl RootProvider for MemoryRoot {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn list_dirs(&self) -> Result<Vec<String>, DiscoveryError> {
        match self.state {
            MemoryState::Present => Ok(self.dirs.iter().cloned().collect()),
            MemoryState::Missing => Err(DiscoveryError::RootMissing(PathBuf::from("<memory>"))),
            MemoryState::Unreadable => Err(DiscoveryError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ))),
        }
    }

    fn is_file(&self, relative: &Path) -> bool {
        self.state == MemoryState::Present && self.files.contains(relative)
    }
}
