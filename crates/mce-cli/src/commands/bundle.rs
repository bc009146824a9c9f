use mce_bundle::{generate, BuildMode};
use mce_discovery::discover_plugins;
use mce_logger as logger;
use std::path::Path;

use crate::common::ProjectContext;
use crate::errors::CliError;

/// Emit bundle configs for the external bundler, to stdout or to `output`
pub fn print_bundle_configs(
    ctx: &ProjectContext,
    production: bool,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let mode = if production {
        BuildMode::Production
    } else {
        BuildMode::from_env()
    };

    let plugins = discover_plugins(&ctx.plugins_root());
    let records = generate(&plugins, mode, &ctx.layout);
    if records.is_empty() {
        logger::warn("No plugins found. Nothing to bundle.");
    }

    match output {
        Some(path) => {
            let path = ctx.root.join(path);
            mce_bundle::write_to_path(&records, &path)?;
            logger::success(&format!(
                "Wrote {} bundle config(s) to {}",
                records.len(),
                path.display()
            ));
        }
        None => println!("{}", mce_bundle::to_json(&records)?),
    }
    Ok(())
}
