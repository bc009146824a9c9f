//! Output tree cleanup
//!
//! Clean targets are `<tree>/*` globs: the entries inside each tree are
//! removed, the tree itself is kept. A target without the `/*` suffix
//! removes the path itself.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Paths that cleaning `targets` under `project_root` would remove
pub fn pending_removals(project_root: &Path, targets: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for target in targets {
        match target.strip_suffix("/*") {
            Some(tree) => {
                let dir = project_root.join(tree);
                if !dir.is_dir() {
                    continue;
                }
                let mut entries: Vec<PathBuf> = fs::read_dir(&dir)?
                    .map(|entry| entry.map(|e| e.path()))
                    .collect::<io::Result<_>>()?;
                entries.sort();
                paths.extend(entries);
            }
            None => {
                let path = project_root.join(target);
                if path.exists() {
                    paths.push(path);
                }
            }
        }
    }
    Ok(paths)
}

/// Remove everything matched by `targets`, returning the removed paths
pub fn clean_outputs(project_root: &Path, targets: &[String]) -> io::Result<Vec<PathBuf>> {
    let paths = pending_removals(project_root, targets)?;
    for path in &paths {
        debug!("Removing {:?}", path);
        if path.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
    }
    Ok(paths)
}
