//! Domain Core - Impact Physics
//!
//! This crate contains the impact request/result records and the closed-form
//! kinetic energy estimate used by the HTTP service.

pub mod impact;

pub use crate::impact::{
    CATASTROPHIC_THRESHOLD_KT, DEFAULT_DIAMETER_M, DEFAULT_VELOCITY_KM_S, ImpactEstimate,
    ImpactRequest, ImpactResult, ImpactStatus, JOULES_PER_KILOTON, PI_APPROX,
    ROCK_DENSITY_KG_M3, estimate_impact,
};
