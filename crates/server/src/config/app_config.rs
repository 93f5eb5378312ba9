//! Application Configuration
//!
//! Centralized configuration for the impact service. Values come from a YAML
//! file, an inline YAML document, or individual environment variables, in
//! that order of precedence.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Unified application configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and file
    pub fn load() -> Result<Self> {
        let config = match (
            std::env::var("NEO_IMPACT_CONFIG_PATH").ok(),
            std::env::var("NEO_IMPACT_CONFIG_YAML").ok(),
        ) {
            (Some(path), _) => Self::from_file(PathBuf::from(path))?,
            (None, Some(yaml)) => Self::from_yaml(&yaml)?,
            (None, None) => Self::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path));
        }
        let content = std::fs::read_to_string(&path).map_err(ConfigError::FileRead)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(ConfigError::ParseYaml)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let port = std::env::var("NEO_IMPACT_PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("NEO_IMPACT_PORT".to_string()))?;

        let host = std::env::var("NEO_IMPACT_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        Ok(Self { host, port })
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue("port must be > 0".to_string()));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "host must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "unknown log format: {}",
                other
            ))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    pub level: String,

    /// Log format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self> {
        let level = std::env::var("NEO_IMPACT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let format = std::env::var("NEO_IMPACT_LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .parse::<LogFormat>()
            .map_err(|_| ConfigError::InvalidValue("NEO_IMPACT_LOG_FORMAT".to_string()))?;

        Ok(Self { level, format })
    }

    pub fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "log level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    FileRead(std::io::Error),

    #[error("Failed to parse YAML configuration: {0}")]
    ParseYaml(serde_yaml::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
