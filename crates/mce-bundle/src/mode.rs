use serde::{Deserialize, Serialize};

/// Development or production build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl BuildMode {
    /// `NODE_ENV=production` selects a production build, anything else development
    pub fn from_env() -> Self {
        Self::from_node_env(std::env::var("NODE_ENV").ok().as_deref())
    }

    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("production") => BuildMode::Production,
            _ => BuildMode::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == BuildMode::Production
    }

    /// Output file suffix, including the extension
    pub fn suffix(self) -> &'static str {
        match self {
            BuildMode::Development => ".js",
            BuildMode::Production => ".min.js",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_env() {
        assert_eq!(BuildMode::from_node_env(Some("production")), BuildMode::Production);
        assert_eq!(BuildMode::from_node_env(Some("development")), BuildMode::Development);
        assert_eq!(BuildMode::from_node_env(None), BuildMode::Development);
        assert_eq!(BuildMode::Production.suffix(), ".min.js");
        assert_eq!(BuildMode::Development.suffix(), ".js");
    }
}
