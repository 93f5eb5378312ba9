//! NEO Impact Server Library
//!
//! HTTP surface, configuration and bootstrap for the impact estimation
//! service. The physics lives in `neo_impact_core`.

pub mod api_docs;
pub mod api_router;
pub mod bootstrap;
pub mod config;
pub mod dtos;
pub mod impact_api;

pub use bootstrap::{
    BootstrapError, Result as BootstrapResult, ServerComponents, bind_listener, init_tracing,
    initialize_server, log_config_summary,
};

// Re-export create_api_router for testing
pub use crate::api_router::create_api_router;
