//! Centralized API Router
//!
//! Single point of entry for all routes, used by both the binary and the
//! integration tests.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::bootstrap::ServerComponents;
use crate::impact_api::impact_api_routes;

pub fn create_api_router(components: &ServerComponents) -> Router {
    info!(
        "🌐 Mounting routes for {}",
        components.config.server.bind_address()
    );

    Router::new()
        .merge(impact_api_routes())
        .layer(
            TraceLayer::new_for_http()
                .on_request(|request: &axum::http::Request<_>, _: &tracing::Span| {
                    tracing::info!(
                        "{} {} {:?}",
                        request.method(),
                        request.uri(),
                        request.version()
                    );
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _: &tracing::Span| {
                        tracing::info!("Response: {} latency: {:?}", response.status(), latency);
                    },
                ),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
