//! The package manifest (`package.json`) as an ordered JSON object
//!
//! Only `main` and `exports` are ever replaced. All other top-level fields
//! keep their values and their position.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::ManifestError;
use crate::exports::ExportMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageManifest {
    fields: Map<String, Value>,
}

impl PackageManifest {
    pub fn read(path: &Path) -> Result<Self, ManifestError> {
        debug!("Reading manifest from: {:?}", path);
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse manifest text; `origin` is only used in error messages
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ManifestError> {
        let value: Value =
            serde_json::from_str(content).map_err(|source| ManifestError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        match value {
            Value::Object(fields) => Ok(PackageManifest { fields }),
            _ => Err(ManifestError::NotAnObject {
                path: origin.to_path_buf(),
            }),
        }
    }

    /// Two-space indented JSON with a trailing newline
    pub fn to_json_string(&self) -> Result<String, ManifestError> {
        let mut out = serde_json::to_string_pretty(&self.fields).map_err(ManifestError::Serialize)?;
        out.push('\n');
        Ok(out)
    }

    /// Overwrite `path` in place. The write is not atomic.
    pub fn write(&self, path: &Path) -> Result<(), ManifestError> {
        let content = self.to_json_string()?;
        fs::write(path, content).map_err(|source| ManifestError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Manifest written to: {:?}", path);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn main(&self) -> Option<&str> {
        self.fields.get("main").and_then(Value::as_str)
    }

    pub fn set_main(&mut self, main: &str) {
        self.fields
            .insert("main".to_string(), Value::String(main.to_string()));
    }

    pub fn exports(&self) -> Option<&Value> {
        self.fields.get("exports")
    }

    /// Replace the whole `exports` field
    pub fn set_exports(&mut self, exports: &ExportMap) {
        let map: Map<String, Value> = exports
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        self.fields.insert("exports".to_string(), Value::Object(map));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
