use neo_impact_core::{ImpactResult, ImpactStatus};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

// --- Request ---

/// Impact telemetry accepted by `POST /calculate`.
///
/// Every field is optional and the body is decoded leniently, so this type
/// documents the contract rather than driving deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "c0a8012e-7f3b-4d2a-9a55-1b7e7c1d9f10",
    "name": "2025-BF",
    "distanceKm": 38123.5,
    "velocityKmS": 20.0,
    "diameterM": 100.0
}))]
pub struct ImpactRequestDto {
    /// Opaque identifier, echoed back unchanged
    #[schema(value_type = Object)]
    pub id: Value,
    /// Asteroid designation, echoed back unchanged
    pub name: Option<String>,
    /// Distance from Earth in kilometres, echoed back unchanged
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    /// Entry velocity in km/s (defaults to 0)
    #[serde(rename = "velocityKmS")]
    pub velocity_km_s: Option<f64>,
    /// Diameter in metres (defaults to 10)
    #[serde(rename = "diameterM")]
    pub diameter_m: Option<f64>,
}

// --- Response ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactStatusDto {
    Catastrophic,
    Manageable,
}

impl From<ImpactStatus> for ImpactStatusDto {
    fn from(status: ImpactStatus) -> Self {
        match status {
            ImpactStatus::Catastrophic => ImpactStatusDto::Catastrophic,
            ImpactStatus::Manageable => ImpactStatusDto::Manageable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "c0a8012e-7f3b-4d2a-9a55-1b7e7c1d9f10",
    "name": "2025-BF",
    "distanceKm": 38123.5,
    "asteroid_size": "100 meters",
    "impact_energy": "75085.80 Kilotons of TNT",
    "status": "CATASTROPHIC"
}))]
pub struct ImpactResponseDto {
    #[schema(value_type = Object)]
    pub id: Value,
    #[schema(value_type = Object)]
    pub name: Value,
    #[serde(rename = "distanceKm")]
    #[schema(value_type = Object)]
    pub distance_km: Value,
    /// Diameter, e.g. `"100 meters"`
    pub asteroid_size: String,
    /// Yield rounded to two decimals, e.g. `"75085.80 Kilotons of TNT"`
    pub impact_energy: String,
    pub status: ImpactStatusDto,
}

impl From<ImpactResult> for ImpactResponseDto {
    fn from(result: ImpactResult) -> Self {
        Self {
            id: result.id,
            name: result.name,
            distance_km: result.distance_km,
            asteroid_size: result.asteroid_size,
            impact_energy: result.impact_energy,
            status: result.status.into(),
        }
    }
}
