//! Host editor capabilities
//!
//! Plugins never own or construct the editor or the plugin registry. They
//! receive them through these traits and only register callbacks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Body of an editor command
pub type CommandCallback = Box<dyn Fn()>;

/// Invoked when a button or menu item is activated
pub type ActionCallback = Rc<dyn Fn(&dyn Editor)>;

/// Builds a plugin instance for an editor; the second argument is the
/// plugin's base URL.
pub type PluginFactory = Box<dyn Fn(&mut dyn Editor, &str) -> Box<dyn Plugin>>;

#[derive(Clone)]
pub struct ButtonSpec {
    pub text: String,
    pub on_action: ActionCallback,
}

#[derive(Clone)]
pub struct MenuItemSpec {
    pub text: String,
    pub on_action: ActionCallback,
}

impl fmt::Debug for ButtonSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonSpec").field("text", &self.text).finish_non_exhaustive()
    }
}

impl fmt::Debug for MenuItemSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItemSpec").field("text", &self.text).finish_non_exhaustive()
    }
}

/// Toolbar and menu registration
pub trait UiRegistry {
    fn add_button(&mut self, name: &str, spec: ButtonSpec);
    fn add_menu_item(&mut self, name: &str, spec: MenuItemSpec);
}

/// The slice of an editor instance plugins rely on
pub trait Editor {
    fn add_command(&mut self, name: &str, callback: CommandCallback);

    /// Run a registered command; `false` if no such command exists
    fn exec_command(&self, name: &str) -> bool;

    fn ui(&mut self) -> &mut dyn UiRegistry;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMetadata {
    pub name: String,
    pub url: String,
}

/// A plugin instance as returned by its factory
pub trait Plugin {
    fn get_metadata(&self) -> PluginMetadata;
}

/// The host's global plugin registry
pub trait PluginRegistry {
    fn register(&mut self, name: &str, factory: PluginFactory);
}
