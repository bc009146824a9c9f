//! Export map generation
//!
//! Every export points at a production bundle:
//!
//! - `.` resolves to the JavaScript bundle of the first plugin with a
//!   JavaScript entry, else of the first with a TypeScript entry, else of the
//!   configured default plugin
//! - `./{name}` and `./{name}/js` resolve to the JavaScript bundle
//! - `./{name}/ts` resolves to the TypeScript bundle

use indexmap::IndexMap;
use mce_config::ProjectLayout;
use mce_discovery::{EntryDialect, PluginDescriptor};
use serde::{Deserialize, Serialize};

pub const ROOT_EXPORT: &str = ".";

/// Ordered export-key to bundle-path map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportMap(IndexMap<String, String>);

impl ExportMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, path: impl Into<String>) {
        self.0.insert(key.into(), path.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn root(&self) -> Option<&str> {
        self.get(ROOT_EXPORT)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pretty JSON, two-space indented
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Plugin the root export and `main` resolve to: the first with a
/// JavaScript entry, else the first with a TypeScript entry, else
/// `default_plugin`.
pub fn root_plugin<'a>(plugins: &'a [PluginDescriptor], default_plugin: &'a str) -> &'a str {
    plugins
        .iter()
        .find(|p| p.has_js)
        .or_else(|| plugins.iter().find(|p| p.has_ts))
        .map_or(default_plugin, |p| p.name.as_str())
}

/// `dist/plugins/{name}/{stem}.min.js`, relative to the package root
pub fn bundle_path(layout: &ProjectLayout, name: &str, dialect: EntryDialect) -> String {
    format!(
        "{}/{}/{}.min.js",
        layout.dist_dir.trim_end_matches('/'),
        name,
        dialect.bundle_stem()
    )
}

fn export_target(layout: &ProjectLayout, name: &str, dialect: EntryDialect) -> String {
    format!("./{}", bundle_path(layout, name, dialect))
}

pub fn build_export_map(plugins: &[PluginDescriptor], layout: &ProjectLayout) -> ExportMap {
    let root = root_plugin(plugins, &layout.default_plugin);

    let mut exports = ExportMap::new();
    // The root always names the JavaScript bundle, whichever plugin it picks
    exports.insert(ROOT_EXPORT, export_target(layout, root, EntryDialect::Js));

    for plugin in plugins {
        if plugin.has_js {
            let target = export_target(layout, &plugin.name, EntryDialect::Js);
            exports.insert(format!("./{}", plugin.name), target.clone());
            exports.insert(
                format!("./{}/{}", plugin.name, EntryDialect::Js.export_key()),
                target,
            );
        }
        if plugin.has_ts {
            exports.insert(
                format!("./{}/{}", plugin.name, EntryDialect::Ts.export_key()),
                export_target(layout, &plugin.name, EntryDialect::Ts),
            );
        }
    }

    exports
}

/// Value for the manifest's `main` field: the root export without `./`
pub fn main_entry(exports: &ExportMap) -> Option<&str> {
    exports
        .root()
        .map(|root| root.strip_prefix("./").unwrap_or(root))
}
