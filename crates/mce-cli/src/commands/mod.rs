pub mod bundle;
pub mod clean;
pub mod config;
pub mod exports;
pub mod list;

pub use bundle::print_bundle_configs;
pub use clean::clean_outputs;
pub use config::{handle_config, ConfigAction};
pub use exports::{update_exports, UPDATE_FAILED};
pub use list::list_plugins;
