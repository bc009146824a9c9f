//! Package manifest export maps
//!
//! Rewrites the `exports` and `main` fields of a `package.json` from the
//! plugins found by discovery. Unlike discovery this path is fail-fast: a
//! missing, unreadable or malformed manifest is an error and nothing is
//! written.

pub mod errors;
pub mod exports;
pub mod manifest;

pub use errors::ManifestError;
pub use exports::{build_export_map, bundle_path, main_entry, root_plugin, ExportMap, ROOT_EXPORT};
pub use manifest::PackageManifest;

use mce_config::ProjectLayout;
use mce_discovery::PluginDescriptor;
use std::path::Path;
use tracing::info;

/// Regenerate the export map of the manifest at `manifest_path`.
///
/// Returns the export map that was written.
pub fn update_exports(
    manifest_path: &Path,
    plugins: &[PluginDescriptor],
    layout: &ProjectLayout,
) -> Result<ExportMap, ManifestError> {
    let mut manifest = PackageManifest::read(manifest_path)?;

    let exports = build_export_map(plugins, layout);
    if let Some(main) = main_entry(&exports) {
        manifest.set_main(main);
    }
    manifest.set_exports(&exports);
    manifest.write(manifest_path)?;

    info!(
        "Updated {} export(s) in {:?}",
        exports.len(),
        manifest_path
    );
    Ok(exports)
}
