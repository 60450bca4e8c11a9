//! HTTP request handlers for the geocoding service.
//!
//! Every lookup endpoint answers `200 OK`. Logical failures, including missing
//! fields and undecodable bodies, are reported as `success: false` with an
//! `error` message.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use gowhere::{DistanceResult, GeoError, GeocodeResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;

/// Forward geocoding request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GeocodeRequest {
    /// Place name or address to resolve.
    pub location: Option<String>,
}

/// Forward geocoding response.
#[derive(Debug, Serialize, ToSchema)]
pub struct GeocodeResponse {
    /// Whether a location was found.
    pub success: bool,
    /// Latitude of the best match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude of the best match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Provider-formatted address of the best match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GeocodeResponse {
    fn failure(error: impl ToString) -> Self {
        Self {
            success: false,
            latitude: None,
            longitude: None,
            address: None,
            error: Some(error.to_string()),
        }
    }
}

impl From<GeocodeResult> for GeocodeResponse {
    fn from(result: GeocodeResult) -> Self {
        match result {
            GeocodeResult::Found(place) => Self {
                success: true,
                latitude: Some(place.latitude),
                longitude: Some(place.longitude),
                address: Some(place.address),
                error: None,
            },
            other => Self::failure(other.error_message().unwrap_or_default()),
        }
    }
}

/// Reverse geocoding request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReverseGeocodeRequest {
    /// Latitude in decimal degrees (-90 to 90).
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees (-180 to 180).
    pub longitude: Option<f64>,
}

/// Reverse geocoding response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReverseGeocodeResponse {
    /// Whether an address was resolved.
    pub success: bool,
    /// Resolved address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReverseGeocodeResponse {
    fn failure(error: impl ToString) -> Self {
        Self {
            success: false,
            address: None,
            error: Some(error.to_string()),
        }
    }
}

impl From<GeocodeResult> for ReverseGeocodeResponse {
    fn from(result: GeocodeResult) -> Self {
        match result {
            GeocodeResult::Found(place) => Self {
                success: true,
                address: Some(place.address),
                error: None,
            },
            other => Self::failure(other.error_message().unwrap_or_default()),
        }
    }
}

/// Distance request: two points in decimal degrees.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DistanceRequest {
    /// Latitude of the first point (-90 to 90).
    pub lat1: Option<f64>,
    /// Longitude of the first point (-180 to 180).
    pub lon1: Option<f64>,
    /// Latitude of the second point (-90 to 90).
    pub lat2: Option<f64>,
    /// Longitude of the second point (-180 to 180).
    pub lon2: Option<f64>,
}

/// Distance response.
#[derive(Debug, Serialize, ToSchema)]
pub struct DistanceResponse {
    /// Whether the distance could be computed.
    pub success: bool,
    /// Geodesic distance in kilometers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Geodesic distance in miles (`distance_km * 0.621371`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    /// Failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<gowhere::Result<DistanceResult>> for DistanceResponse {
    fn from(result: gowhere::Result<DistanceResult>) -> Self {
        match result {
            Ok(d) => Self {
                success: true,
                distance_km: Some(d.kilometers),
                distance_miles: Some(d.miles),
                error: None,
            },
            Err(e) => Self {
                success: false,
                distance_km: None,
                distance_miles: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

fn rejection_error(rejection: JsonRejection) -> GeoError {
    GeoError::InvalidRequest(rejection.body_text())
}

fn require(value: Option<f64>, field: &'static str) -> gowhere::Result<f64> {
    value.ok_or(GeoError::MissingField(field))
}

/// Convert a location name to coordinates.
///
/// # Returns
///
/// - `success: true` with `latitude`, `longitude` and `address` on a match
/// - `success: false` with `error: "Location not found"` when nothing matched
/// - `success: false` with the failure message on validation or provider errors
#[utoipa::path(
    post,
    path = "/geocode",
    tag = "geocoding",
    request_body = GeocodeRequest,
    responses((status = 200, description = "Lookup outcome", body = GeocodeResponse))
)]
pub async fn geocode_location(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GeocodeRequest>, JsonRejection>,
) -> Json<GeocodeResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let e = rejection_error(rejection);
            tracing::warn!(error = %e, "Rejected geocode request");
            return Json(GeocodeResponse::failure(e));
        }
    };

    let result = state
        .gateway
        .geocode_location(request.location.as_deref())
        .await;

    if let GeocodeResult::Found(place) = &result {
        tracing::info!(
            location = request.location.as_deref().unwrap_or_default(),
            lat = place.latitude,
            lon = place.longitude,
            "Location found"
        );
    }

    Json(result.into())
}

/// Convert coordinates to an address.
#[utoipa::path(
    post,
    path = "/reverse-geocode",
    tag = "geocoding",
    request_body = ReverseGeocodeRequest,
    responses((status = 200, description = "Lookup outcome", body = ReverseGeocodeResponse))
)]
pub async fn reverse_geocode(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReverseGeocodeRequest>, JsonRejection>,
) -> Json<ReverseGeocodeResponse> {
    let coordinates = payload.map_err(rejection_error).and_then(|Json(request)| {
        Ok((
            require(request.latitude, "latitude")?,
            require(request.longitude, "longitude")?,
        ))
    });

    let (lat, lon) = match coordinates {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected reverse geocode request");
            return Json(ReverseGeocodeResponse::failure(e));
        }
    };

    let result = state.gateway.reverse_geocode(lat, lon).await;
    if result.is_found() {
        tracing::info!(lat = lat, lon = lon, "Address found");
    }

    Json(result.into())
}

/// Calculate the geodesic distance between two points.
#[utoipa::path(
    post,
    path = "/distance",
    tag = "distance",
    request_body = DistanceRequest,
    responses((status = 200, description = "Distance outcome", body = DistanceResponse))
)]
pub async fn calculate_distance(
    payload: Result<Json<DistanceRequest>, JsonRejection>,
) -> Json<DistanceResponse> {
    let result = payload.map_err(rejection_error).and_then(|Json(request)| {
        gowhere::calculate_distance(
            require(request.lat1, "lat1")?,
            require(request.lon1, "lon1")?,
            require(request.lat2, "lat2")?,
            require(request.lon2, "lon2")?,
        )
    });

    match &result {
        Ok(d) => tracing::debug!(km = d.kilometers, "Distance calculated"),
        Err(e) => tracing::warn!(error = %e, "Distance calculation failed"),
    }

    Json(result.into())
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
