use crate::backend::utils::paths::app_file;
use crate::utils::Result;
use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "BWLP_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub routing: RoutingConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Prepended to every route title.
    pub title_prefix: String,
    /// Landing route for an authenticated session.
    pub home_path: String,
    pub login_path: String,
    /// Redirect hops allowed for one navigation before it is abandoned.
    pub max_redirects: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            routing: RoutingConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            title_prefix: "BWLP • ".to_string(),
            home_path: "/image".to_string(),
            login_path: "/login".to_string(),
            max_redirects: 8,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "BWLP".to_string(),
            width: 1280.0,
            height: 832.0,
            resizable: true,
        }
    }
}

impl AppConfig {
    /// Config file location: `$BWLP_CONFIG`, else `config.json` in the app dir.
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| app_file("config.json"))
    }

    /// Reads a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads the config from its default location, falling back to the
    /// defaults when the file cannot be used.
    pub fn load() -> Self {
        let path = Self::config_path();
        Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring config at {}: {e}", path.display());
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_the_bwlp_brand() {
        let config = AppConfig::default();
        assert_eq!(config.routing.title_prefix, "BWLP • ");
        assert_eq!(config.routing.home_path, "/image");
        assert_eq!(config.routing.login_path, "/login");
        assert_eq!(config.routing.max_redirects, 8);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = config_file(r#"{ "routing": { "max_redirects": 3 } }"#);
        let config = AppConfig::load_from(file.path()).unwrap();

        assert_eq!(config.routing.max_redirects, 3);
        assert_eq!(config.routing.title_prefix, "BWLP • ");
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = config_file("{ routing");
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
