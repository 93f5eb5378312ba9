//! Configuration Management
//!
//! Environment and YAML driven configuration for the impact service.

pub mod app_config;


pub use app_config::{
    AppConfig, ConfigError, DEFAULT_HOST, DEFAULT_PORT, LogFormat, LoggingConfig, Result,
    ServerConfig,
};
