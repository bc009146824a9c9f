//! Bundle configuration generation
//!
//! Turns discovery output into records for an external IIFE bundler. Each
//! plugin yields a JavaScript record when it has `main/js/Main.js` and a
//! TypeScript record when it has `main/ts/Main.ts`. Exactly one record per
//! batch, the first, carries the output cleanup targets.

pub mod clean;
pub mod errors;
pub mod mode;
pub mod record;

pub use clean::{clean_outputs, pending_removals};
pub use errors::BundleError;
pub use mode::BuildMode;
pub use record::{banner, BuildConfigRecord, OutputFormat};

use mce_config::ProjectLayout;
use mce_discovery::PluginDescriptor;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Build one record per plugin dialect, JavaScript before TypeScript
pub fn generate(
    plugins: &[PluginDescriptor],
    mode: BuildMode,
    layout: &ProjectLayout,
) -> Vec<BuildConfigRecord> {
    let mut records: Vec<BuildConfigRecord> = plugins
        .iter()
        .flat_map(|plugin| {
            plugin
                .dialects()
                .map(move |dialect| BuildConfigRecord::new(plugin, dialect, mode, layout))
        })
        .collect();

    if let Some(first) = records.first_mut() {
        first.clean_targets = Some(clean_targets(layout));
    }

    debug!(
        "Generated {} bundle config(s) for {} plugin(s) ({:?})",
        records.len(),
        plugins.len(),
        mode
    );
    records
}

/// Globs removed before a build: everything under each output tree
pub fn clean_targets(layout: &ProjectLayout) -> Vec<String> {
    layout
        .output_trees()
        .into_iter()
        .map(|tree| format!("{}/*", tree))
        .collect()
}

pub fn to_json(records: &[BuildConfigRecord]) -> Result<String, BundleError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write the records as pretty JSON with a trailing newline
pub fn write_to_path(records: &[BuildConfigRecord], path: &Path) -> Result<(), BundleError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_json(records)? + "\n")?;
    Ok(())
}
