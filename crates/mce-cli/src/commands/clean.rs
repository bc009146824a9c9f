use colored::Colorize;
use mce_bundle::{clean_targets, pending_removals};
use mce_logger as logger;

use crate::common::ProjectContext;
use crate::errors::CliError;

/// Empty the library and demo output trees
pub fn clean_outputs(ctx: &ProjectContext, yes: bool) -> Result<(), CliError> {
    let targets = clean_targets(&ctx.layout);
    let io_err = |source| CliError::Io {
        path: ctx.root.clone(),
        source,
    };

    let pending = pending_removals(&ctx.root, &targets).map_err(io_err)?;
    if pending.is_empty() {
        logger::warn("Output directories are already clean.");
        return Ok(());
    }

    if !yes {
        for path in &pending {
            let shown = path.strip_prefix(&ctx.root).unwrap_or(path.as_path());
            println!("  {}", shown.display());
        }
        println!("To actually clean, run with --yes flag.");
        return Ok(());
    }

    logger::spinner_start(&format!("Cleaning {}", targets.join(", ")));
    match mce_bundle::clean_outputs(&ctx.root, &targets) {
        Ok(removed) => {
            logger::spinner_stop();
            println!("{}", format!("Removed {} item(s)", removed.len()).dimmed());
            Ok(())
        }
        Err(e) => {
            logger::spinner_error("Cleaning failed");
            Err(io_err(e))
        }
    }
}
