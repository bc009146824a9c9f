use mce_discovery::discover_plugins;
use mce_logger as logger;
use mce_manifest::ExportMap;

use crate::common::ProjectContext;
use crate::errors::CliError;

/// Prefix of the error banner printed when the rewrite fails
pub const UPDATE_FAILED: &str = "Failed to update package.json exports:";

/// Discover plugins and rewrite the manifest's `exports` and `main` fields.
///
/// Prints a success banner followed by the new export map on stdout.
pub fn update_exports(ctx: &ProjectContext) -> Result<ExportMap, CliError> {
    let plugins = discover_plugins(&ctx.plugins_root());
    logger::step(&format!(
        "Discovered {} plugin(s) in {}",
        plugins.len(),
        ctx.layout.plugins_dir
    ));

    let manifest_path = ctx.manifest_file();
    let exports = mce_manifest::update_exports(&manifest_path, &plugins, &ctx.layout)?;

    logger::success(&format!("Updated {} exports:", ctx.layout.manifest_path));
    println!("{}", exports.to_json_pretty()?);
    Ok(exports)
}
