//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides. The
//! environment is read exactly once, here; everything downstream takes
//! explicit configuration values.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::ClientConfig;
use crate::endpoint::DeploymentConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub deployment: DeploymentConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("octofit").join("config.toml")),
            Some(PathBuf::from("./octofit.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Deployment overrides. OCTOFIT_CODESPACE_NAME wins over the
        // CODESPACE_NAME variable GitHub sets in a Codespace.
        if let Ok(name) = std::env::var("OCTOFIT_CODESPACE_NAME") {
            self.deployment.codespace_name = Some(name);
        } else if self.deployment.codespace_name.is_none() {
            if let Ok(name) = std::env::var("CODESPACE_NAME") {
                self.deployment.codespace_name = Some(name);
            }
        }
        if let Ok(suffix) = std::env::var("OCTOFIT_HOST_SUFFIX") {
            self.deployment.host_suffix = suffix;
        }
        if let Ok(port) = std::env::var("OCTOFIT_API_PORT") {
            if let Ok(p) = port.parse() {
                self.deployment.api_port = p;
            }
        }
        if let Ok(url) = std::env::var("OCTOFIT_API_URL") {
            self.deployment.api_url = Some(url);
        }

        // Client overrides
        if let Ok(timeout) = std::env::var("OCTOFIT_REQUEST_TIMEOUT_MS") {
            if let Ok(t) = timeout.parse() {
                self.client.request_timeout_ms = t;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("OCTOFIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("OCTOFIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# OctoFit Dashboard Configuration
#
# Environment variables override these settings:
# - OCTOFIT_CODESPACE_NAME (falls back to CODESPACE_NAME)
# - OCTOFIT_HOST_SUFFIX
# - OCTOFIT_API_PORT
# - OCTOFIT_API_URL
# - OCTOFIT_REQUEST_TIMEOUT_MS
# - OCTOFIT_LOG_LEVEL
# - OCTOFIT_LOG_FORMAT

[deployment]
# Cloud workspace identifier. When set, the API base becomes
# https://{codespace_name}-{api_port}.{host_suffix}
# codespace_name = ""

# Host suffix for forwarded Codespace ports
host_suffix = "app.github.dev"

# Port the OctoFit backend listens on
api_port = 8000

# Explicit base URL override (bypasses the Codespace/localhost logic)
# api_url = "http://localhost:8000"

[client]
# Request timeout in milliseconds
request_timeout_ms = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
