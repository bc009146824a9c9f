//! Common types shared across commands

use clap::Parser;
use mce_config::{Config, ProjectLayout};
use std::path::PathBuf;

use crate::errors::CliError;

/// Global CLI options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    #[arg(short, long, global = true, help = "Only show warnings and errors")]
    pub quiet: bool,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase verbosity (-v for debug, -vv for trace)")]
    pub verbose: u8,

    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Project root (defaults to the current directory)"
    )]
    pub root: Option<PathBuf>,
}

impl GlobalOpts {
    /// Get the effective verbosity level
    /// - 0: quiet/warn only
    /// - 1: debug (-v)
    /// - 2: trace (-vv)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

/// Project root plus its resolved configuration
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub config: Config,
    pub layout: ProjectLayout,
}

impl ProjectContext {
    pub fn load(opts: &GlobalOpts) -> Result<Self, CliError> {
        let root = match &opts.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().map_err(|source| CliError::Io {
                path: PathBuf::from("."),
                source,
            })?,
        };
        let config = Config::load(&root)?;
        let layout = config.layout();
        Ok(ProjectContext {
            root,
            config,
            layout,
        })
    }

    pub fn plugins_root(&self) -> PathBuf {
        self.layout.plugins_root(&self.root)
    }

    pub fn manifest_file(&self) -> PathBuf {
        self.layout.manifest_file(&self.root)
    }
}
