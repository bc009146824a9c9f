use colored::Colorize;
use mce_discovery::discover_plugins;

use crate::common::ProjectContext;
use crate::errors::CliError;

/// Print the discovered plugins, as a table or as JSON
pub fn list_plugins(ctx: &ProjectContext, json: bool) -> Result<(), CliError> {
    let plugins = discover_plugins(&ctx.plugins_root());

    if json {
        println!("{}", serde_json::to_string_pretty(&plugins)?);
        return Ok(());
    }

    if plugins.is_empty() {
        println!("{}", "No plugins found.".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!("Plugins in {}:", ctx.layout.plugins_dir).bold().green()
    );
    let width = plugins.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for plugin in &plugins {
        let dialects: Vec<String> = plugin.dialects().map(|d| d.to_string()).collect();
        let name = format!("{:<width$}", plugin.name, width = width);
        println!("  {}  {}", name.cyan(), dialects.join(", ").dimmed());
    }
    Ok(())
}
