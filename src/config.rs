//! Configuration System
//!
//! Settings for the terminal client: where the backend lives, where the
//! login is kept and how logs are written. Read from `config.toml` in the
//! user config dir, then overridden by `CHRONOLEARN_*` variables.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default backend address
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Where the terminal client keeps its login
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Session file; defaults to `session.toml` next to the config file
    pub file: Option<String>,
}

impl SessionConfig {
    pub fn path(&self) -> Option<PathBuf> {
        match &self.file {
            Some(file) => Some(PathBuf::from(file)),
            None => config_dir().map(|dir| dir.join("session.toml")),
        }
    }
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

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    /// Filter directive used when `RUST_LOG` is unset
    pub fn filter(&self) -> String {
        format!("chronolearn={}", self.level)
    }
}

/// `~/.config/chronolearn` (platform equivalent)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("chronolearn"))
}

impl Config {
    /// Read a TOML file
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

    /// Defaults plus environment overrides, no file
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Read a TOML file, then apply environment overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// `config.toml` in the config dir if present, else defaults; env applies either way
    pub fn load_default() -> Self {
        let config_paths = [
            config_dir().map(|p| p.join("config.toml")),
            Some(PathBuf::from("./chronolearn.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("CHRONOLEARN_API_URL") {
            self.api.base_url = url;
        }
        if let Some(file) = lookup("CHRONOLEARN_SESSION_FILE") {
            self.session.file = Some(file);
        }
        if let Some(level) = lookup("CHRONOLEARN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CHRONOLEARN_LOG_FORMAT") {
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

/// Commented `config.toml` printed by `chronolearn config`
pub fn generate_default_config() -> String {
    r#"# ChronoLearn Configuration
#
# Environment variables override these settings:
# - CHRONOLEARN_API_URL
# - CHRONOLEARN_SESSION_FILE
# - CHRONOLEARN_LOG_LEVEL
# - CHRONOLEARN_LOG_FORMAT

[api]
# Backend base URL
base_url = "http://localhost:8000"

[session]
# Where the login token is stored (defaults to session.toml in this directory)
# file = "~/.config/chronolearn/session.toml"

[logging]
# One of trace, debug, info, warn, error
level = "info"

# "pretty" for terminals, "json" for log collectors
format = "pretty"
"#
    .to_string()
}
