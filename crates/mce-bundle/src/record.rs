//! Bundle configuration records
//!
//! A record describes one bundler invocation: one entry file, written to the
//! library tree and the demo tree, as an IIFE that takes the host editor from
//! a global binding.

use mce_config::ProjectLayout;
use mce_discovery::{EntryDialect, PluginDescriptor};
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::collections::{BTreeMap, BTreeSet};

use crate::mode::BuildMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Iife,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfigRecord {
    pub plugin: String,
    pub entry_path: String,
    /// Library output first, demo output second
    pub output_paths: SmallVec<[String; 2]>,
    pub external_names: BTreeSet<String>,
    /// External module name -> global binding
    pub globals: BTreeMap<String, String>,
    pub format: OutputFormat,
    pub banner: String,
    pub sourcemap: bool,
    pub is_minified: bool,
    /// Set on exactly one record per batch: output trees to empty before building
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_targets: Option<Vec<String>>,
}

impl BuildConfigRecord {
    pub fn new(
        plugin: &PluginDescriptor,
        dialect: EntryDialect,
        mode: BuildMode,
        layout: &ProjectLayout,
    ) -> Self {
        let file_name = format!("{}{}", dialect.bundle_stem(), mode.suffix());
        let host = layout.host_global.clone();

        BuildConfigRecord {
            plugin: plugin.name.clone(),
            entry_path: format!("{}/{}", layout.plugins_dir, plugin.entry_path(dialect)),
            output_paths: smallvec![
                format!("{}/{}/{}", layout.dist_dir, plugin.name, file_name),
                format!("{}/{}/{}", layout.demo_dist_dir, plugin.name, file_name),
            ],
            external_names: BTreeSet::from([host.clone()]),
            globals: BTreeMap::from([(host.clone(), host)]),
            format: OutputFormat::Iife,
            banner: banner(&plugin.name, dialect),
            sourcemap: !mode.is_production(),
            is_minified: mode.is_production(),
            clean_targets: None,
        }
    }

    /// Dialect of the entry file, read back from `entry_path`
    pub fn dialect(&self) -> EntryDialect {
        if self.entry_path.ends_with(EntryDialect::Ts.entry_file()) {
            EntryDialect::Ts
        } else {
            EntryDialect::Js
        }
    }

    pub fn cleans_output(&self) -> bool {
        self.clean_targets.is_some()
    }
}

/// `/*! TinyMCE Example Plugin */`, with a dialect qualifier for TypeScript
pub fn banner(plugin_name: &str, dialect: EntryDialect) -> String {
    let title = title_case(plugin_name);
    match dialect.banner_label() {
        Some(label) => format!("/*! TinyMCE {} Plugin ({}) */", title, label),
        None => format!("/*! TinyMCE {} Plugin */", title),
    }
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        assert_eq!(
            banner("example", EntryDialect::Js),
            "/*! TinyMCE Example Plugin */"
        );
        assert_eq!(
            banner("example", EntryDialect::Ts),
            "/*! TinyMCE Example Plugin (TypeScript) */"
        );
        assert_eq!(banner("", EntryDialect::Js), "/*! TinyMCE  Plugin */");
    }

    #[test]
    fn test_development_record() {
        let plugin = PluginDescriptor::new("example", true, false);
        let record = BuildConfigRecord::new(
            &plugin,
            EntryDialect::Js,
            BuildMode::Development,
            &ProjectLayout::default(),
        );

        assert_eq!(record.entry_path, "src/plugins/example/main/js/Main.js");
        assert_eq!(
            record.output_paths.as_slice(),
            [
                "dist/plugins/example/plugin.js",
                "demo/public/dist/plugins/example/plugin.js"
            ]
        );
        assert!(record.external_names.contains("tinymce"));
        assert_eq!(record.globals.get("tinymce").map(String::as_str), Some("tinymce"));
        assert!(record.sourcemap);
        assert!(!record.is_minified);
        assert!(!record.cleans_output());
    }

    #[test]
    fn test_production_typescript_record() {
        let plugin = PluginDescriptor::new("example", false, true);
        let record = BuildConfigRecord::new(
            &plugin,
            EntryDialect::Ts,
            BuildMode::Production,
            &ProjectLayout::default(),
        );

        assert_eq!(record.entry_path, "src/plugins/example/main/ts/Main.ts");
        assert_eq!(record.dialect(), EntryDialect::Ts);
        assert_eq!(
            record.output_paths.as_slice(),
            [
                "dist/plugins/example/plugin-ts.min.js",
                "demo/public/dist/plugins/example/plugin-ts.min.js"
            ]
        );
        assert!(!record.sourcemap);
        assert!(record.is_minified);
    }
}
