//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::ApiConfig;
use crate::pages::DEFAULT_BASE_PATH;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Show error details on pages and log HTTP traffic
    #[serde(default)]
    pub debug: bool,

    #[serde(default = "default_base_path")]
    pub base_path: String,

    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_assets_dir() -> String {
    "./assets".to_string()
}

fn default_max_sessions() -> usize {
    1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            base_path: default_base_path(),
            assets_dir: default_assets_dir(),
            max_sessions: default_max_sessions(),
        }
    }
}

impl ServerConfig {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            host: self.host.clone(),
            port: self.port,
            debug: self.debug,
            base_path: self.base_path.clone(),
            assets_dir: PathBuf::from(&self.assets_dir),
            max_sessions: self.max_sessions,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
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

    /// First existing file among the default locations
    pub fn find_default_path() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("informe").join("config.toml")),
            Some(PathBuf::from("/etc/informe/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        config_paths.into_iter().flatten().find(|path| path.exists())
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let (config, source) = Self::discover();
        source.log();
        config
    }

    /// Load from default locations, reporting where the config came from
    ///
    /// Nothing is logged, so this can run before the subscriber is set up.
    pub fn discover() -> (Self, ConfigSource) {
        let Some(path) = Self::find_default_path() else {
            return (Self::from_env(), ConfigSource::Environment);
        };

        match Self::load_with_env(&path) {
            Ok(config) => (config, ConfigSource::File(path)),
            Err(error) => (Self::from_env(), ConfigSource::Fallback { path, error }),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(host) = lookup("INFORME_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("INFORME_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(debug) = lookup("INFORME_DEBUG") {
            self.server.debug = matches!(debug.as_str(), "1" | "true" | "yes");
        }
        if let Some(base_path) = lookup("INFORME_BASE_PATH") {
            self.server.base_path = base_path;
        }
        if let Some(assets_dir) = lookup("INFORME_ASSETS_DIR") {
            self.server.assets_dir = assets_dir;
        }

        // Logging overrides
        if let Some(level) = lookup("INFORME_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("INFORME_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where the loaded configuration came from
#[derive(Debug)]
pub enum ConfigSource {
    /// Given explicitly or found in a default location
    File(PathBuf),
    /// No file found; defaults with environment overrides
    Environment,
    /// A file was found but could not be loaded
    Fallback { path: PathBuf, error: ConfigError },
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigSource::Environment => {
                tracing::info!("Using default config with environment overrides")
            }
            ConfigSource::Fallback { path, error } => {
                tracing::warn!("Failed to load config from {:?}: {}", path, error);
                tracing::info!("Using default config with environment overrides");
            }
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
    r#"# Informe Económico de Chile Configuration
#
# Environment variables override these settings:
# - INFORME_HOST
# - INFORME_PORT
# - INFORME_DEBUG
# - INFORME_BASE_PATH
# - INFORME_ASSETS_DIR
# - INFORME_LOG_LEVEL
# - INFORME_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 8050

# Show error details on pages and log HTTP traffic
debug = false

# Prefix of every page path
base_path = "/informe-economico-chile"

# Directory served under /assets (style.css, icons/)
assets_dir = "./assets"

# Sessions kept in memory before the oldest is evicted
max_sessions = 1024

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.server.base_path, "/informe-economico-chile");
        assert!(!config.server.debug);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.server.host, defaults.server.host);
        assert_eq!(config.server.port, defaults.server.port);
        assert_eq!(config.server.assets_dir, defaults.server.assets_dir);
        assert_eq!(config.server.max_sessions, defaults.server.max_sessions);
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9000\ndebug = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(config.server.debug);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("INFORME_PORT", "9100"),
            ("INFORME_DEBUG", "true"),
            ("INFORME_BASE_PATH", "/informe"),
            ("INFORME_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 9100);
        assert!(config.server.debug);
        assert_eq!(config.server.base_path, "/informe");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "INFORME_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 8050);
    }

    #[test]
    fn test_config_source_variants() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();

        let error = Config::load(&broken).unwrap_err();
        let source = ConfigSource::Fallback {
            path: broken.clone(),
            error,
        };
        assert!(matches!(
            source,
            ConfigSource::Fallback { ref path, error: ConfigError::Parse { .. } } if *path == broken
        ));
        source.log();
        ConfigSource::Environment.log();
    }

    #[test]
    fn test_api_config() {
        let api = ServerConfig::default().api_config();
        assert_eq!(api.addr(), "0.0.0.0:8050");
        assert_eq!(api.assets_dir, PathBuf::from("./assets"));
    }
}
