//! Server Bootstrap - Configuration and Logging Initialization

use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{AppConfig, ConfigError, LogFormat, LoggingConfig};

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BootstrapError>;

#[derive(Debug, Clone)]
pub struct ServerComponents {
    pub config: AppConfig,
}

impl ServerComponents {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Returns `false` when a global
/// subscriber was already installed, in which case that one stays in place.
pub fn init_tracing(logging: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match logging.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer()).try_init(),
    };
    installed.is_ok()
}

pub async fn initialize_server() -> Result<ServerComponents> {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            // No configured subscriber yet; fall back to defaults so the failure is visible.
            init_tracing(&LoggingConfig::default());
            error!("❌ Failed to load configuration: {}", e);
            return Err(BootstrapError::Config(e));
        }
    };

    init_tracing(&config.logging);
    info!("🚀 Initializing NEO Impact Server");
    info!("✅ Configuration loaded successfully");

    Ok(ServerComponents::new(config))
}

pub async fn bind_listener(config: &AppConfig) -> Result<tokio::net::TcpListener> {
    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        error!("❌ Failed to bind {}: {}", address, e);
        BootstrapError::Io(e)
    })?;
    Ok(listener)
}

pub fn log_config_summary(config: &AppConfig) {
    info!("📋 Configuration summary:");
    info!("   Bind address: {}", config.server.bind_address());
    info!("   Log level: {}", config.logging.level);
    info!("   Log format: {:?}", config.logging.format);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_init_tracing_installs_once() {
        init_tracing(&LoggingConfig::default());
        assert!(tracing::dispatcher::has_been_set());

        let reinstalled = init_tracing(&LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Json,
        });
        assert!(!reinstalled);
    }

    #[tokio::test]
    #[serial]
    async fn test_config_failure_is_logged_and_returned() {
        unsafe {
            std::env::remove_var("NEO_IMPACT_CONFIG_PATH");
            std::env::remove_var("NEO_IMPACT_CONFIG_YAML");
            std::env::set_var("NEO_IMPACT_PORT", "not-a-port");
        }

        let result = initialize_server().await;

        unsafe {
            std::env::remove_var("NEO_IMPACT_PORT");
        }

        assert!(matches!(result, Err(BootstrapError::Config(_))));
        assert!(tracing::dispatcher::has_been_set());
    }

    #[tokio::test]
    async fn test_bind_listener_on_ephemeral_port() {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;

        let listener = bind_listener(&config).await.unwrap();
        assert!(listener.local_addr().unwrap().port() > 0);
    }

    #[test]
    fn test_config_error_converts() {
        let error: BootstrapError = ConfigError::InvalidValue("NEO_IMPACT_PORT".to_string()).into();
        assert!(error.to_string().contains("NEO_IMPACT_PORT"));
    }
}
