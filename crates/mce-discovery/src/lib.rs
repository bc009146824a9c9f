//! Plugin discovery
//!
//! Scans the immediate subdirectories of a plugins root (by default
//! `src/plugins`) and reports which conventional entry files each one has:
//! `main/js/Main.js` for JavaScript and `main/ts/Main.ts` for TypeScript.
//!
//! Discovery is best effort. A missing root or an unreadable directory is
//! logged as a warning and reported as "no plugins".

pub mod errors;
pub mod root;
pub mod types;

pub use errors::DiscoveryError;
pub use root::{FsRoot, MemoryRoot, RootProvider};
pub use types::{EntryDialect, PluginDescriptor};

use mce_logger as logger;
use std::path::Path;
use tracing::debug;

/// Discover plugins under `root`, sorted by name
pub fn discover<R: RootProvider + ?Sized>(root: &R) -> Vec<PluginDescriptor> {
    let dirs = match root.list_dirs() {
        Ok(dirs) => dirs,
        Err(DiscoveryError::RootMissing(path)) => {
            logger::warn(&format!(
                "Plugins directory not found: {} (no plugins discovered)",
                path.display()
            ));
            return Vec::new();
        }
        Err(e) => {
            logger::warn(&format!("Could not scan plugins directory: {}", e));
            return Vec::new();
        }
    };

    let mut plugins: Vec<PluginDescriptor> = dirs
        .into_iter()
        .filter_map(|name| {
            let has_js = has_entry(root, &name, EntryDialect::Js);
            let has_ts = has_entry(root, &name, EntryDialect::Ts);
            if has_js || has_ts {
                debug!("Discovered plugin '{}' (js: {}, ts: {})", name, has_js, has_ts);
                Some(PluginDescriptor::new(name, has_js, has_ts))
            } else {
                debug!("Skipping '{}': no entry file", name);
                None
            }
        })
        .collect();

    plugins.sort_by(|a, b| a.name.cmp(&b.name));
    logger::debug(&format!(
        "Found {} plugin(s) in {}",
        plugins.len(),
        root.location()
    ));
    plugins
}

/// Discover plugins in a directory on disk
pub fn discover_plugins(plugins_root: &Path) -> Vec<PluginDescriptor> {
    discover(&FsRoot::new(plugins_root))
}

fn has_entry<R: RootProvider + ?Sized>(root: &R, name: &str, dialect: EntryDialect) -> bool {
    root.is_file(&Path::new(name).join(dialect.entry_file()))
}
