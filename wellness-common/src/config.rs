//! Bootstrap configuration loading and resolution
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument or its `WELLNESS_*` environment fallback
//!    (both applied by the binary's clap parser)
//! 2. TOML config file
//! 3. Compiled default (fallback)
//!
//! A missing config file at the default location is not an error. A config
//! file that was asked for explicitly must exist and parse.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Bootstrap configuration loaded from TOML file
///
/// ```toml
/// host = "0.0.0.0"
/// port = 8000
/// max_body_bytes = 65536
///
/// [logging]
/// level = "debug"
///
/// [cors]
/// allowed_origins = ["http://localhost:3000"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TomlConfig {
    /// IP address to bind the HTTP server to
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted request body, in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub cors: CorsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Cross-origin access configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API; `["*"]` allows any origin
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// True when any origin is allowed
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            logging: LoggingConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid TOML in {}: {}", path.display(), e)))
    }
}

/// Platform config file location (`~/.config/wellness/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("wellness").join("config.toml"))
}

/// Values supplied on the command line (or its environment fallbacks)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Fully resolved server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub max_body_bytes: usize,
    pub cors: CorsConfig,
    /// Config file the settings were read from, if any
    pub source: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let toml = TomlConfig::default();
        Self {
            host: toml.host,
            port: toml.port,
            log_level: toml.logging.level,
            max_body_bytes: toml.max_body_bytes,
            cors: toml.cors,
            source: None,
        }
    }
}

impl ServerConfig {
    /// Resolve settings from CLI, TOML file and defaults, looking for the
    /// config file at the platform location when none is named
    pub fn resolve(cli: CliOverrides) -> Result<Self> {
        Self::resolve_with_default_path(cli, default_config_path())
    }

    /// Resolve settings, using `default_path` when no config file is named
    pub fn resolve_with_default_path(cli: CliOverrides, default_path: Option<PathBuf>) -> Result<Self> {
        let (toml, source) = match cli.config {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                (TomlConfig::load(&path)?, Some(path))
            }
            None => match default_path.filter(|p| p.exists()) {
                Some(path) => (TomlConfig::load(&path)?, Some(path)),
                None => (TomlConfig::default(), None),
            },
        };

        Ok(Self {
            host: cli.host.unwrap_or(toml.host),
            port: cli.port.unwrap_or(toml.port),
            log_level: cli.log_level.unwrap_or(toml.logging.level),
            max_body_bytes: toml.max_body_bytes,
            cors: toml.cors,
            source,
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid bind address {}:{}: {}", self.host, self.port, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
        assert!(config.cors.is_permissive());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = TomlConfig::from_toml_str("port = 9100\n[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.max_body_bytes, 65536);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("port = \"not a number\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_cors_restricted_origins() {
        let config = TomlConfig::from_toml_str(
            "[cors]\nallowed_origins = [\"http://localhost:3000\"]\n",
        )
        .unwrap();
        assert!(!config.cors.is_permissive());
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_default_config_path_location() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("wellness/config.toml"));
        }
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8000");

        let bad = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(bad.bind_addr().is_err());
    }
}
