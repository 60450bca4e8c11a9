//! gowhere Service Library
//!
//! HTTP handlers, types and the router for the geocoding service.
//! This library is used by both the gowhere-service binary and integration tests.

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use gowhere::GeocodeGateway;

/// Application state shared across handlers.
pub struct AppState {
    /// Gateway to the geocoding provider, built once at startup.
    pub gateway: GeocodeGateway,
}

impl AppState {
    /// Wrap a gateway in shareable state.
    pub fn new(gateway: GeocodeGateway) -> Arc<Self> {
        Arc::new(Self { gateway })
    }
}

/// Build the application router.
///
/// The lookup endpoints are served both at the root and under `/api`.
pub fn router(state: Arc<AppState>) -> Router {
    let lookups = Router::new()
        .route("/geocode", post(handlers::geocode_location))
        .route("/reverse-geocode", post(handlers::reverse_geocode))
        .route("/distance", post(handlers::calculate_distance));

    Router::new()
        .merge(lookups.clone())
        .nest("/api", lookups)
        .route("/health", get(handlers::health_check))
        .with_state(state)
}

// Re-export commonly used types for convenience
pub use handlers::{
    DistanceRequest, DistanceResponse, GeocodeRequest, GeocodeResponse, HealthResponse,
    ReverseGeocodeRequest, ReverseGeocodeResponse,
};
