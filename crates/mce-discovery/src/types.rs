//! Discovery output types
//!
//! These types are shared by the bundle and manifest generators, which is why
//! the per-dialect naming conventions live next to the descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source dialect of a plugin entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryDialect {
    /// Plain JavaScript, entry `main/js/Main.js`
    Js,
    /// TypeScript, entry `main/ts/Main.ts`
    Ts,
}

impl EntryDialect {
    /// Dialects in the order records and exports are emitted
    pub const ALL: [EntryDialect; 2] = [EntryDialect::Js, EntryDialect::Ts];

    /// Entry file relative to the plugin directory
    pub fn entry_file(self) -> &'static str {
        match self {
            EntryDialect::Js => "main/js/Main.js",
            EntryDialect::Ts => "main/ts/Main.ts",
        }
    }

    /// Bundle file name without the `.js` / `.min.js` suffix
    pub fn bundle_stem(self) -> &'static str {
        match self {
            EntryDialect::Js => "plugin",
            EntryDialect::Ts => "plugin-ts",
        }
    }

    /// Sub-path used for the dialect-specific export key
    pub fn export_key(self) -> &'static str {
        match self {
            EntryDialect::Js => "js",
            EntryDialect::Ts => "ts",
        }
    }

    /// Qualifier appended to the bundle banner
    pub fn banner_label(self) -> Option<&'static str> {
        match self {
            EntryDialect::Js => None,
            EntryDialect::Ts => Some("TypeScript"),
        }
    }
}

impl fmt::Display for EntryDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.export_key())
    }
}

/// A plugin directory carrying at least one entry file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Directory name, unique within one discovery run
    pub name: String,
    pub has_js: bool,
    pub has_ts: bool,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>, has_js: bool, has_ts: bool) -> Self {
        PluginDescriptor {
            name: name.into(),
            has_js,
            has_ts,
        }
    }

    pub fn has(&self, dialect: EntryDialect) -> bool {
        match dialect {
            EntryDialect::Js => self.has_js,
            EntryDialect::Ts => self.has_ts,
        }
    }

    /// Dialects this plugin provides, JavaScript first
    pub fn dialects(&self) -> impl Iterator<Item = EntryDialect> + '_ {
        EntryDialect::ALL.into_iter().filter(|d| self.has(*d))
    }

    /// Entry file path relative to the plugins root, always `/`-separated
    pub fn entry_path(&self, dialect: EntryDialect) -> String {
        format!("{}/{}", self.name, dialect.entry_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialects_order_js_first() {
        let both = PluginDescriptor::new("alpha", true, true);
        assert_eq!(
            both.dialects().collect::<Vec<_>>(),
            vec![EntryDialect::Js, EntryDialect::Ts]
        );

        let ts_only = PluginDescriptor::new("beta", false, true);
        assert_eq!(ts_only.dialects().collect::<Vec<_>>(), vec![EntryDialect::Ts]);
    }

    #[test]
    fn test_entry_path() {
        let plugin = PluginDescriptor::new("alpha", true, true);
        assert_eq!(plugin.entry_path(EntryDialect::Js), "alpha/main/js/Main.js");
        assert_eq!(plugin.entry_path(EntryDialect::Ts), "alpha/main/ts/Main.ts");
    }
}
