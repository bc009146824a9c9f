use clap::Subcommand;
use colored::Colorize;
use mce_config::Config;
use mce_logger as logger;

use crate::common::{GlobalOpts, ProjectContext};
use crate::errors::CliError;

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Set a key in mce.toml
    Set { key: String, value: String },
    /// Print the path of the config file
    Path,
}

pub fn handle_config(
    action: ConfigAction,
    ctx: &ProjectContext,
    opts: &GlobalOpts,
) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold().green());
            let layout = &ctx.layout;
            let explicit = ctx.config.values_iter();
            for (key, value) in [
                ("plugins-dir", &layout.plugins_dir),
                ("manifest-path", &layout.manifest_path),
                ("default-plugin", &layout.default_plugin),
                ("host-global", &layout.host_global),
                ("dist-dir", &layout.dist_dir),
                ("demo-dist-dir", &layout.demo_dist_dir),
            ] {
                let is_default = !explicit.iter().any(|(k, _)| *k == key);
                if is_default && opts.verbosity_level() > 0 {
                    println!("  {}: {} {}", key.cyan(), value, "(default)".dimmed());
                } else {
                    println!("  {}: {}", key.cyan(), value);
                }
            }
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let mut config = ctx.config.clone();
            config.set(&key, value.clone())?;
            config.save(&ctx.root)?;
            logger::success(&format!("Set {} = {}", key, value));
            Ok(())
        }
        ConfigAction::Path => {
            let path = Config::path(&ctx.root);
            logger::debug(&format!("Config exists: {}", path.exists()));
            println!("{}", path.display());
            Ok(())
        }
    }
}
