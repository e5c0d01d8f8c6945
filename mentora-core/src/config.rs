//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/mentora/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/mentora/` (~/.config/mentora/)
//! - State/Logs: `$XDG_STATE_HOME/mentora/` (~/.local/state/mentora/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Collaborator API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Front-end behavior configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Collaborator API configuration
///
/// One explicit object holds everything the HTTP layer needs; there is no
/// module-level mutable client state anywhere in the crate.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `http://localhost:8080/api/v1`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Send session cookies with every request
    #[serde(default = "default_with_credentials")]
    pub with_credentials: bool,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Route of the recommendation endpoint. Deployments expose the same
    /// capability as either `/chat` or `/recommend_videos`.
    #[serde(default = "default_chat_route")]
    pub chat_route: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            with_credentials: default_with_credentials(),
            timeout_secs: default_timeout_secs(),
            chat_route: default_chat_route(),
        }
    }
}

impl ApiConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("api.base_url must not be empty".to_string()));
        }
        if !self.chat_route.starts_with('/') {
            return Err(Error::Config(
                "api.chat_route must start with '/'".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}

fn default_with_credentials() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_chat_route() -> String {
    "/chat".to_string()
}

/// Front-end behavior configuration
#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Query shown as the seed placeholder before a conversation starts
    #[serde(default = "default_placeholder_query")]
    pub placeholder_query: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder_query: default_placeholder_query(),
        }
    }
}

fn default_placeholder_query() -> String {
    "I want to learn Go".to_string()
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.api.validate()?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/mentora/config.toml` (~/.config/mentora/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("mentora").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/mentora/` (~/.local/state/mentora/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("mentora")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/mentora/mentora.log` (~/.local/state/mentora/mentora.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("mentora.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8080/api/v1");
        assert!(config.api.with_credentials);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.chat_route, "/chat");
        assert_eq!(config.ui.placeholder_query, "I want to learn Go");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[api]
base_url = "https://mentora.example.com/api/v1"
with_credentials = true
chat_route = "/recommend_videos"

[ui]
placeholder_query = "Lets learn rust today"

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.api.base_url, "https://mentora.example.com/api/v1");
        assert_eq!(config.api.chat_route, "/recommend_videos");
        assert_eq!(config.ui.placeholder_query, "Lets learn rust today");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_api_config_validation() {
        let config = ApiConfig::default();
        assert!(config.validate().is_ok());

        let config = ApiConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ApiConfig {
            chat_route: "recommend_videos".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://127.0.0.1:9000\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        // Untouched sections fall back to defaults
        assert_eq!(config.api.chat_route, "/chat");
    }
}
