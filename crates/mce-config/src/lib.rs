//! Project configuration for the mce CLI
//!
//! Configuration lives in `mce.toml` at the project root. Every key is
//! optional; unset keys fall back to the conventional scaffold layout:
//!
//! ```toml
//! plugins-dir = "src/plugins"
//! manifest-path = "package.json"
//! default-plugin = "example"
//! host-global = "tinymce"
//! dist-dir = "dist/plugins"
//! demo-dist-dir = "demo/public/dist/plugins"
//! ```
//!
//! `MCE_CONFIG` overrides the config file location.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "mce.toml";
pub const CONFIG_ENV_VAR: &str = "MCE_CONFIG";

pub const DEFAULT_PLUGINS_DIR: &str = "src/plugins";
pub const DEFAULT_MANIFEST_PATH: &str = "package.json";
pub const DEFAULT_PLUGIN_NAME: &str = "example";
pub const DEFAULT_HOST_GLOBAL: &str = "tinymce";
pub const DEFAULT_DIST_DIR: &str = "dist/plugins";
pub const DEFAULT_DEMO_DIST_DIR: &str = "demo/public/dist/plugins";

/// Keys accepted by `Config::get` / `Config::set`
pub const KEYS: &[&str] = &[
    "plugins-dir",
    "manifest-path",
    "default-plugin",
    "host-global",
    "dist-dir",
    "demo-dist-dir",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown config key: {0}. Supported keys: {keys}", keys = KEYS.join(", "))]
    UnknownKey(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_plugin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_global: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_dist_dir: Option<String>,
}

impl Config {
    /// Resolve the config file for a project root.
    ///
    /// A non-empty `MCE_CONFIG` wins over `<root>/mce.toml`.
    pub fn path(project_root: &Path) -> PathBuf {
        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }
        project_root.join(CONFIG_FILE_NAME)
    }

    /// Load the config for a project root, returning defaults if no file exists
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        Self::load_from_path(&Self::path(project_root))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, project_root: &Path) -> Result<(), ConfigError> {
        self.save_to_path(&Self::path(project_root))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "plugins-dir" => self.plugins_dir.clone(),
            "manifest-path" => self.manifest_path.clone(),
            "default-plugin" => self.default_plugin.clone(),
            "host-global" => self.host_global.clone(),
            "dist-dir" => self.dist_dir.clone(),
            "demo-dist-dir" => self.demo_dist_dir.clone(),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        let slot = match key {
            "plugins-dir" => &mut self.plugins_dir,
            "manifest-path" => &mut self.manifest_path,
            "default-plugin" => &mut self.default_plugin,
            "host-global" => &mut self.host_global,
            "dist-dir" => &mut self.dist_dir,
            "demo-dist-dir" => &mut self.demo_dist_dir,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        *slot = Some(value);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        KEYS.iter().all(|key| self.get(key).is_none())
    }

    /// Explicitly configured values, in key order
    pub fn values_iter(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    /// Resolve every setting, applying defaults for unset keys
    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout {
            plugins_dir: self
                .plugins_dir
                .clone()
                .unwrap_or_else(|| DEFAULT_PLUGINS_DIR.to_string()),
            manifest_path: self
                .manifest_path
                .clone()
                .unwrap_or_else(|| DEFAULT_MANIFEST_PATH.to_string()),
            default_plugin: self
                .default_plugin
                .clone()
                .unwrap_or_else(|| DEFAULT_PLUGIN_NAME.to_string()),
            host_global: self
                .host_global
                .clone()
                .unwrap_or_else(|| DEFAULT_HOST_GLOBAL.to_string()),
            dist_dir: self
                .dist_dir
                .clone()
                .unwrap_or_else(|| DEFAULT_DIST_DIR.to_string()),
            demo_dist_dir: self
                .demo_dist_dir
                .clone()
                .unwrap_or_else(|| DEFAULT_DEMO_DIST_DIR.to_string()),
        }
    }
}

/// Fully resolved project layout. Paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub plugins_dir: String,
    pub manifest_path: String,
    pub default_plugin: String,
    pub host_global: String,
    pub dist_dir: String,
    pub demo_dist_dir: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Config::default().layout()
    }
}

impl ProjectLayout {
    pub fn plugins_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.plugins_dir)
    }

    pub fn manifest_file(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.manifest_path)
    }

    /// Output trees emptied before a build: library first, then demo.
    ///
    /// The conventional roots clean their enclosing build trees (`dist`,
    /// `demo/public/dist`). Any other root cleans only itself. Roots that do
    /// not name a subdirectory of the project (`.`, absolute paths, `..`)
    /// are never cleaned.
    pub fn output_trees(&self) -> Vec<String> {
        [
            (&self.dist_dir, DEFAULT_DIST_DIR, "dist"),
            (&self.demo_dist_dir, DEFAULT_DEMO_DIST_DIR, "demo/public/dist"),
        ]
        .into_iter()
        .filter_map(|(dir, default, tree)| {
            let dir = dir.trim_end_matches('/');
            if dir == default {
                Some(tree.to_string())
            } else if is_project_subdir(dir) {
                Some(dir.replace('\\', "/"))
            } else {
                None
            }
        })
        .collect()
    }
}

fn is_project_subdir(dir: &str) -> bool {
    let mut has_normal = false;
    for component in Path::new(dir).components() {
        match component {
            Component::Normal(_) => has_normal = true,
            Component::CurDir => {}
            _ => return false,
        }
    }
    has_normal
}
