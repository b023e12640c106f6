//! Configuration System
//!
//! Handles loading server configuration from a TOML file with environment
//! variable overrides. Every field has a default so a missing config file
//! just means defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset file locations
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding the three CSV files
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory with the built frontend bundle
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "fuelscope=info,tower_http=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from an explicit path, or from the default
    /// location if it exists, falling back to defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p),
                _ => Ok(Config::default()),
            },
        }
    }

    /// Parse configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Default config location: `<config dir>/fuelscope/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fuelscope").join("config.toml"))
    }

    /// Apply environment variable overrides (`FUELSCOPE_HOST`,
    /// `FUELSCOPE_PORT`, `FUELSCOPE_DATA_DIR`, `FUELSCOPE_STATIC_DIR`)
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("FUELSCOPE_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("FUELSCOPE_PORT") {
            if let Ok(port) = port.parse() {
                self.api.port = port;
            } else {
                tracing::warn!("ignoring invalid FUELSCOPE_PORT: {}", port);
            }
        }
        if let Ok(dir) = std::env::var("FUELSCOPE_DATA_DIR") {
            self.data.dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("FUELSCOPE_STATIC_DIR") {
            self.api.static_dir = PathBuf::from(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.port, 8090);
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert!(config.logging.filter.contains("fuelscope=info"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            port = 9000

            [data]
            dir = "/srv/fuelscope/data"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.data.dir, PathBuf::from("/srv/fuelscope/data"));
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.port, Config::default().api.port);
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nport = 7777\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.api.port, 7777);
    }
}
