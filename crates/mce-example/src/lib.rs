//! Example editor plugin
//!
//! On editor initialization the plugin registers the `mceExample` command and
//! an `example` toolbar button and menu item that both run it.

pub mod api;
pub mod ui;

use mce_host::{Editor, Plugin, PluginMetadata, PluginRegistry};

pub const PLUGIN_NAME: &str = "example";
pub const DOCS_URL: &str = "https://example.com/docs/example";

/// Instance handed back to the host for every editor the plugin is added to
#[derive(Debug, Clone, Copy, Default)]
pub struct ExamplePlugin;

impl Plugin for ExamplePlugin {
    fn get_metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: PLUGIN_NAME.to_string(),
            url: DOCS_URL.to_string(),
        }
    }
}

/// Wire the plugin into one editor instance
pub fn init(editor: &mut dyn Editor, _url: &str) -> ExamplePlugin {
    api::commands::register(editor);
    ui::buttons::register(editor);
    ExamplePlugin
}

/// Add the plugin to the host's registry
pub fn setup(registry: &mut dyn PluginRegistry) {
    registry.register(
        PLUGIN_NAME,
        Box::new(|editor: &mut dyn Editor, url: &str| -> Box<dyn Plugin> {
            Box::new(init(editor, url))
        }),
    );
}
