//! Impact Energy Estimation
//!
//! Converts an asteroid's velocity and diameter into a kinetic energy yield in
//! kilotons of TNT and classifies the result against a fixed severity
//! threshold. The body is modelled as a sphere of uniform rock.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

/// Low-precision pi used by the yield model. Output reproducibility depends
/// on this exact literal, so `std::f64::consts::PI` must not be substituted.
#[allow(clippy::approx_constant)]
pub const PI_APPROX: f64 = 3.14159;

/// Assumed density of the impactor in kg/m³
pub const ROCK_DENSITY_KG_M3: f64 = 3000.0;

/// One kiloton of TNT expressed in joules
pub const JOULES_PER_KILOTON: f64 = 4.184e12;

/// Yields strictly above this many kilotons are catastrophic
pub const CATASTROPHIC_THRESHOLD_KT: f64 = 1000.0;

pub const DEFAULT_VELOCITY_KM_S: f64 = 0.0;
pub const DEFAULT_DIAMETER_M: f64 = 10.0;

/// Incoming impact telemetry.
///
/// `id`, `name` and `distance_km` are echoed back untouched, so they keep the
/// raw JSON value the caller sent (`Value::Null` when absent).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImpactRequest {
    pub id: Value,
    pub name: Value,
    pub distance_km: Value,
    pub velocity_km_s: Option<f64>,
    pub diameter_m: Option<f64>,
}

impl ImpactRequest {
    pub fn new(velocity_km_s: f64, diameter_m: f64) -> Self {
        Self {
            velocity_km_s: Some(velocity_km_s),
            diameter_m: Some(diameter_m),
            ..Self::default()
        }
    }

    /// Decode a request from an arbitrary JSON value.
    ///
    /// Never fails: anything that is not an object is read as `{}` and
    /// numeric fields that cannot be coerced fall back to their defaults.
    pub fn from_json(payload: &Value) -> Self {
        let empty = Map::new();
        let fields = payload.as_object().unwrap_or(&empty);

        Self {
            id: fields.get("id").cloned().unwrap_or(Value::Null),
            name: fields.get("name").cloned().unwrap_or(Value::Null),
            distance_km: fields.get("distanceKm").cloned().unwrap_or(Value::Null),
            velocity_km_s: coerce_f64(fields.get("velocityKmS")),
            diameter_m: coerce_f64(fields.get("diameterM")),
        }
    }

    /// Decode a request from a raw HTTP body. Empty or malformed bodies
    /// produce the all-defaults request.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(payload) => Self::from_json(&payload),
            Err(_) => Self::default(),
        }
    }

    pub fn velocity_km_s_or_default(&self) -> f64 {
        self.velocity_km_s.unwrap_or(DEFAULT_VELOCITY_KM_S)
    }

    pub fn diameter_m_or_default(&self) -> f64 {
        self.diameter_m.unwrap_or(DEFAULT_DIAMETER_M)
    }
}

/// JSON numbers pass through; numeric strings such as `"12.5"` are accepted
/// as well. Everything else (null, bools, objects, garbage) is treated as
/// missing.
fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Intermediate quantities of the yield model, in SI units unless the name
/// says otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactEstimate {
    pub radius_m: f64,
    pub volume_m3: f64,
    pub mass_kg: f64,
    pub velocity_m_s: f64,
    pub kinetic_energy_joules: f64,
    pub kilotons: f64,
}

impl ImpactEstimate {
    /// Evaluate the model. The operation order is fixed so results match
    /// the reference figures bit for bit on IEEE doubles.
    pub fn compute(velocity_km_s: f64, diameter_m: f64) -> Self {
        let radius_m = diameter_m / 2.0;
        let volume_m3 = (4.0 / 3.0) * PI_APPROX * radius_m.powf(3.0);
        let mass_kg = volume_m3 * ROCK_DENSITY_KG_M3;

        let velocity_m_s = velocity_km_s * 1000.0;
        let kinetic_energy_joules = 0.5 * mass_kg * velocity_m_s.powf(2.0);

        let kilotons = kinetic_energy_joules / JOULES_PER_KILOTON;

        Self {
            radius_m,
            volume_m3,
            mass_kg,
            velocity_m_s,
            kinetic_energy_joules,
            kilotons,
        }
    }

    pub fn status(&self) -> ImpactStatus {
        ImpactStatus::classify(self.kilotons)
    }
}

/// Severity of an impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactStatus {
    Catastrophic,
    Manageable,
}

impl ImpactStatus {
    /// Exactly 1000 kilotons is still manageable.
    pub fn classify(kilotons: f64) -> Self {
        if kilotons > CATASTROPHIC_THRESHOLD_KT {
            ImpactStatus::Catastrophic
        } else {
            ImpactStatus::Manageable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactStatus::Catastrophic => "CATASTROPHIC",
            ImpactStatus::Manageable => "MANAGEABLE",
        }
    }
}

impl fmt::Display for ImpactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response record returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub id: Value,
    pub name: Value,
    #[serde(rename = "distanceKm")]
    pub distance_km: Value,
    pub asteroid_size: String,
    pub impact_energy: String,
    pub status: ImpactStatus,
}

/// Apply defaults, run the yield model and format the result.
pub fn estimate_impact(request: &ImpactRequest) -> ImpactResult {
    let velocity_km_s = request.velocity_km_s_or_default();
    let diameter_m = request.diameter_m_or_default();

    let estimate = ImpactEstimate::compute(velocity_km_s, diameter_m);
    let status = estimate.status();

    debug!(
        velocity_km_s,
        diameter_m,
        mass_kg = estimate.mass_kg,
        kinetic_energy_joules = estimate.kinetic_energy_joules,
        kilotons = estimate.kilotons,
        %status,
        "Impact estimate computed"
    );

    ImpactResult {
        id: request.id.clone(),
        name: request.name.clone(),
        distance_km: request.distance_km.clone(),
        asteroid_size: format!("{} meters", diameter_m),
        impact_energy: format!("{:.2} Kilotons of TNT", estimate.kilotons),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_scenario() {
        let estimate = ImpactEstimate::compute(20.0, 100.0);

        assert_eq!(estimate.radius_m, 50.0);
        assert!((estimate.volume_m3 - 523_598.333_333).abs() < 1e-3);
        assert!((estimate.mass_kg - 1_570_795_000.0).abs() < 1.0);
        assert_eq!(estimate.velocity_m_s, 20_000.0);
        assert!((estimate.kinetic_energy_joules - 3.14159e17).abs() < 1e6);
        assert!((estimate.kilotons - 75_085.803_059).abs() < 1e-5);
        assert_eq!(estimate.status(), ImpactStatus::Catastrophic);

        let result = estimate_impact(&ImpactRequest::new(20.0, 100.0));
        assert_eq!(result.asteroid_size, "100 meters");
        assert_eq!(result.impact_energy, "75085.80 Kilotons of TNT");
        assert_eq!(result.status, ImpactStatus::Catastrophic);
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_uses_low_precision_pi() {
        let estimate = ImpactEstimate::compute(0.0, 2.0);
        assert_eq!(estimate.volume_m3, (4.0 / 3.0) * 3.14159);
        assert_ne!(estimate.volume_m3, (4.0 / 3.0) * std::f64::consts::PI);
    }

    #[test]
    fn test_zero_diameter_yields_nothing() {
        let result = estimate_impact(&ImpactRequest::new(30.0, 0.0));

        assert_eq!(result.asteroid_size, "0 meters");
        assert_eq!(result.impact_energy, "0.00 Kilotons of TNT");
        assert_eq!(result.status, ImpactStatus::Manageable);
        assert_eq!(ImpactEstimate::compute(30.0, 0.0).mass_kg, 0.0);
    }

    #[test]
    fn test_zero_velocity_yields_nothing() {
        let estimate = ImpactEstimate::compute(0.0, 250.0);

        assert!(estimate.mass_kg > 0.0);
        assert_eq!(estimate.kinetic_energy_joules, 0.0);
        assert_eq!(estimate.status(), ImpactStatus::Manageable);
    }

    #[test]
    fn test_classification_threshold_is_strict() {
        assert_eq!(ImpactStatus::classify(1000.0), ImpactStatus::Manageable);
        assert_eq!(ImpactStatus::classify(1000.01), ImpactStatus::Catastrophic);
        assert_eq!(ImpactStatus::classify(0.0), ImpactStatus::Manageable);
    }

    #[test]
    fn test_threshold_neighbourhood_from_inputs() {
        let below = estimate_impact(&ImpactRequest::new(2.30808, 100.0));
        assert_eq!(below.impact_energy, "1000.00 Kilotons of TNT");
        assert_eq!(below.status, ImpactStatus::Manageable);

        let above = estimate_impact(&ImpactRequest::new(2.30809, 100.0));
        assert_eq!(above.impact_energy, "1000.01 Kilotons of TNT");
        assert_eq!(above.status, ImpactStatus::Catastrophic);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let request = ImpactRequest::from_json(&json!({}));
        let result = estimate_impact(&request);

        assert_eq!(result.id, Value::Null);
        assert_eq!(result.name, Value::Null);
        assert_eq!(result.distance_km, Value::Null);
        assert_eq!(result.asteroid_size, "10 meters");
        assert_eq!(result.impact_energy, "0.00 Kilotons of TNT");
        assert_eq!(result.status, ImpactStatus::Manageable);
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let request = ImpactRequest::from_json(&json!({
            "velocityKmS": null,
            "diameterM": null
        }));

        assert_eq!(request.velocity_km_s_or_default(), 0.0);
        assert_eq!(request.diameter_m_or_default(), 10.0);
    }

    #[test]
    fn test_explicit_zero_diameter_is_kept() {
        let request = ImpactRequest::from_json(&json!({ "diameterM": 0 }));
        assert_eq!(request.diameter_m, Some(0.0));
        assert_eq!(estimate_impact(&request).asteroid_size, "0 meters");
    }

    #[test]
    fn test_pass_through_fields_are_echoed() {
        let request = ImpactRequest::from_json(&json!({
            "id": "3f2a-77",
            "name": "2025-BF",
            "distanceKm": 38123.5,
            "velocityKmS": 17,
            "diameterM": 40
        }));
        let result = estimate_impact(&request);

        assert_eq!(result.id, json!("3f2a-77"));
        assert_eq!(result.name, json!("2025-BF"));
        assert_eq!(result.distance_km, json!(38123.5));
        assert_eq!(result.asteroid_size, "40 meters");
        assert_eq!(result.impact_energy, "3471.97 Kilotons of TNT");
        assert_eq!(result.status, ImpactStatus::Catastrophic);
    }

    #[test]
    fn test_fractional_diameter_formatting() {
        let result = estimate_impact(&ImpactRequest::new(12.5, 20.0));
        assert_eq!(result.impact_energy, "234.64 Kilotons of TNT");

        let result = estimate_impact(&ImpactRequest::new(1.0, 12.5));
        assert_eq!(result.asteroid_size, "12.5 meters");
    }

    #[test]
    fn test_extreme_diameter_formatting_is_positional() {
        let result = estimate_impact(&ImpactRequest::new(0.0, 1e16));
        assert_eq!(result.asteroid_size, "10000000000000000 meters");

        let result = estimate_impact(&ImpactRequest::new(0.0, 1e-5));
        assert_eq!(result.asteroid_size, "0.00001 meters");
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let request = ImpactRequest::from_json(&json!({
            "velocityKmS": "5",
            "diameterM": " 50 "
        }));

        assert_eq!(request.velocity_km_s, Some(5.0));
        assert_eq!(request.diameter_m, Some(50.0));
        assert_eq!(
            estimate_impact(&request).impact_energy,
            "586.61 Kilotons of TNT"
        );
    }

    #[test]
    fn test_unusable_values_fall_back() {
        let request = ImpactRequest::from_json(&json!({
            "velocityKmS": "fast",
            "diameterM": { "value": 3 }
        }));

        assert_eq!(request.velocity_km_s, None);
        assert_eq!(request.diameter_m, None);
        assert_eq!(estimate_impact(&request).asteroid_size, "10 meters");
    }

    #[test]
    fn test_non_object_payload_is_empty_request() {
        assert_eq!(ImpactRequest::from_json(&json!([1, 2, 3])), ImpactRequest::default());
        assert_eq!(ImpactRequest::from_json(&Value::Null), ImpactRequest::default());
    }

    #[test]
    fn test_from_body_tolerates_garbage() {
        assert_eq!(ImpactRequest::from_body(b""), ImpactRequest::default());
        assert_eq!(ImpactRequest::from_body(b"{not json"), ImpactRequest::default());

        let request = ImpactRequest::from_body(br#"{"velocityKmS": 20, "diameterM": 100}"#);
        assert_eq!(request, ImpactRequest::new(20.0, 100.0));
    }

    #[test]
    fn test_result_serialization_keys() {
        let result = estimate_impact(&ImpactRequest::new(20.0, 100.0));
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(
            value,
            json!({
                "id": null,
                "name": null,
                "distanceKm": null,
                "asteroid_size": "100 meters",
                "impact_energy": "75085.80 Kilotons of TNT",
                "status": "CATASTROPHIC"
            })
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ImpactStatus::Catastrophic.to_string(), "CATASTROPHIC");
        assert_eq!(ImpactStatus::Manageable.to_string(), "MANAGEABLE");
        assert_eq!(
            serde_json::to_string(&ImpactStatus::Manageable).unwrap(),
            "\"MANAGEABLE\""
        );
    }
}
