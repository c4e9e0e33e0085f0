// src/config.rs
//
// Runtime configuration.
//
// Precedence (lowest to highest):
// 1. Built-in defaults
// 2. JSON config file (explicit path, or <config_dir>/artworks-table/config.json)
// 3. Environment variables

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const ENV_API_URL: &str = "ARTWORKS_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "ARTWORKS_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "ARTWORKS_LOG_LEVEL";

const CONFIG_DIR_NAME: &str = "artworks-table";
const CONFIG_FILE_NAME: &str = "config.json";
const SUPPORTED_LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Collection API root, without the `/artworks` suffix
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Minimum spacing between two requests to the collection API
    pub min_request_interval_ms: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.artic.edu/api/v1".to_string(),
            request_timeout_secs: 30,
            min_request_interval_ms: 1000,
            user_agent: format!("artworks-table/{}", env!("CARGO_PKG_VERSION")),
            log_level: "info".to_string(),
        }
    }
}

/// `<config_dir>/artworks-table/config.json`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl AppConfig {
    /// Loads defaults, then the config file, then env overrides.
    ///
    /// An explicit `path` must exist. The default location is optional.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => match default_config_path() {
                Some(p) if p.is_file() => Self::from_file(&p)?,
                _ => Self::default(),
            },
        };

        config.apply_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    /// Applies overrides from `lookup`, normally `std::env::var`.
    pub fn apply_env<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = raw.trim().parse().map_err(|_| {
                AppError::Config(format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        let level = self.log_level.trim().to_ascii_lowercase();
        if !SUPPORTED_LOG_LEVELS.contains(&level.as_str()) {
            return Err(AppError::Config(format!(
                "unsupported log level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    /// `{api_base_url}/artworks`
    pub fn artworks_url(&self) -> String {
        format!("{}/artworks", self.api_base_url.trim().trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.artworks_url(), "https://api.artic.edu/api/v1/artworks");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"api_base_url": "http://localhost:8080/v1/", "log_level": "debug"}}"#).unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.artworks_url(), "http://localhost:8080/v1/artworks");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::from_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [(ENV_TIMEOUT_SECS, "5"), (ENV_LOG_LEVEL, "warn")]
            .into_iter()
            .collect();
        let mut config = AppConfig::default();
        config
            .apply_env(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_bad_timeout_env_fails() {
        let mut config = AppConfig::default();
        let result = config.apply_env(|key| (key == ENV_TIMEOUT_SECS).then(|| "soon".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
