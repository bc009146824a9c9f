//! mce library - exposes the command handlers for the binary and for tests

pub mod commands;
pub mod common;
pub mod errors;

pub use common::{GlobalOpts, ProjectContext};
pub use errors::CliError;
