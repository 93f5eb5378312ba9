//! API Documentation using OpenAPI 3.0 with utoipa
//!
//! Describes the impact calculation contract for clients and contract tests.

use utoipa::OpenApi;

use crate::dtos::{ImpactRequestDto, ImpactResponseDto, ImpactStatusDto};

#[derive(OpenApi)]
#[openapi(
    paths(crate::impact_api::calculate_impact_handler),
    components(schemas(ImpactRequestDto, ImpactResponseDto, ImpactStatusDto)),
    tags(
        (name = "impact", description = "Asteroid impact energy estimation")
    ),
    info(
        title = "NEO Impact API",
        description = "Kinetic energy yield and severity of asteroid impacts"
    )
)]
pub struct ApiDoc;

/// Render the OpenAPI document as pretty-printed JSON.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}
