//! Impact Calculation API Module
//!
//! Exposes `POST /calculate`, which turns asteroid telemetry into an impact
//! energy estimate and severity classification.

use axum::{
    Router,
    body::Bytes,
    extract::rejection::BytesRejection,
    response::Json,
    routing::post,
};
use neo_impact_core::{ImpactRequest, estimate_impact};
use tracing::{info, warn};

use crate::dtos::{ImpactRequestDto, ImpactResponseDto};

/// Calculate impact energy
///
/// The body is parsed as JSON whatever the `Content-Type` says. Missing,
/// empty or malformed bodies are treated as `{}` so the request always
/// succeeds with default inputs.
#[utoipa::path(
    post,
    path = "/calculate",
    request_body = ImpactRequestDto,
    responses(
        (status = 200, description = "Impact estimate", body = ImpactResponseDto)
    ),
    tag = "impact"
)]
pub async fn calculate_impact_handler(
    body: Result<Bytes, BytesRejection>,
) -> Json<ImpactResponseDto> {
    let body = body.unwrap_or_else(|rejection| {
        warn!(error = %rejection, "Unreadable request body, using defaults");
        Bytes::new()
    });

    let request = ImpactRequest::from_body(&body);
    info!(
        id = %request.id,
        name = %request.name,
        velocity_km_s = ?request.velocity_km_s,
        diameter_m = ?request.diameter_m,
        "Received impact telemetry"
    );

    let result = estimate_impact(&request);
    info!(
        impact_energy = %result.impact_energy,
        status = %result.status,
        "Impact calculated"
    );

    Json(result.into())
}

pub fn impact_api_routes() -> Router {
    Router::new().route("/calculate", post(calculate_impact_handler))
}
