//! Application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory (or the path in `CATALOG_CONFIG`) and includes:
//! - The catalog API base URL
//! - The per-request timeout

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CatalogError, Result};

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "CATALOG_API_URL";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the catalog API, e.g. `https://dummyjson.com`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (default: 30, 0 = no timeout)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            request_timeout: default_request_timeout(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }

        directories::ProjectDirs::from("", "", "catalog")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from an explicit path, or return default if the
    /// file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;

        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the API base URL.
    ///
    /// Precedence: explicit override (CLI flag), then `CATALOG_API_URL`, then
    /// the config file. A missing or malformed URL is fatal.
    pub fn api_base_url(&self, override_url: Option<&str>) -> Result<Url> {
        let raw = override_url
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .or_else(|| env::var(API_URL_ENV).ok().filter(|s| !s.trim().is_empty()))
            .or_else(|| self.api_url.clone().filter(|s| !s.trim().is_empty()))
            .ok_or_else(|| {
                CatalogError::Config(format!(
                    "catalog API URL not configured. Set {API_URL_ENV}, pass --api-url, or add api_url to the config file"
                ))
            })?;

        parse_base_url(&raw)
    }

    /// Get the request timeout, `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Set the request timeout in seconds
    pub fn set_request_timeout(&mut self, seconds: u64) {
        self.request_timeout = seconds;
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| CatalogError::Config(format!("invalid API URL '{raw}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CatalogError::Config(format!(
            "invalid API URL '{raw}': unsupported scheme '{other}'"
        ))),
    }
}
