//! NEO Impact Server - Production Bootstrap

use tracing::info;

use neo_impact_server::bootstrap::{bind_listener, initialize_server, log_config_summary};
use neo_impact_server::create_api_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let server_components = initialize_server().await?;

    log_config_summary(&server_components.config);
    info!("🌐 Setting up HTTP routes...");

    let app = create_api_router(&server_components);
    let listener = bind_listener(&server_components.config).await?;
    info!(
        "✅ Server listening on http://{}",
        server_components.config.server.bind_address()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C signal: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("🛑 Received Ctrl-C, initiating graceful shutdown..."),
        _ = terminate => info!("🛑 Received SIGTERM, initiating graceful shutdown..."),
    }
}
