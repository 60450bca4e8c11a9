//! Integration tests for the HTTP API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use gowhere::geocode::BoxFuture;
use gowhere::{Coordinate, GeoError, GeocodeGateway, GeocodingProvider, Place};
use gowhere_service::{router, AppState};
use serde_json::{json, Value};

/// Provider with canned answers, counting outbound calls.
#[derive(Default)]
struct StubProvider {
    calls: AtomicUsize,
}

impl GeocodingProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, gowhere::Result<Option<Place>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            match query {
                "London" => Ok(Some(Place {
                    latitude: 51.5074456,
                    longitude: -0.1277653,
                    address: "London, Greater London, England, United Kingdom".to_string(),
                })),
                "rate limited" => Err(GeoError::RateLimited),
                "timeout" => Err(GeoError::Timeout {
                    timeout: Duration::from_secs(10),
                }),
                _ => Ok(None),
            }
        })
    }

    fn reverse(&self, coordinate: Coordinate) -> BoxFuture<'_, gowhere::Result<Option<Place>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            if coordinate.latitude == 0.0 && coordinate.longitude == 0.0 {
                Ok(Some(Place {
                    latitude: 0.0,
                    longitude: 0.0,
                    address: "Null Island".to_string(),
                }))
            } else if coordinate.latitude < -60.0 {
                Err(GeoError::ProviderStatus { status: 503 })
            } else {
                Ok(None)
            }
        })
    }
}

/// Create a test server over the real router with a stub provider.
fn create_test_server() -> (TestServer, Arc<StubProvider>) {
    let provider = Arc::new(StubProvider::default());
    let shared: Arc<dyn GeocodingProvider> = provider.clone();
    let state = AppState::new(GeocodeGateway::from_arc(shared));

    (TestServer::new(router(state)).unwrap(), provider)
}

// Geocode endpoint tests

#[tokio::test]
async fn test_geocode_success() {
    let (server, _) = create_test_server();

    let response = server
        .post("/geocode")
        .json(&json!({"location": "London"}))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], true);
    assert_eq!(json["latitude"], 51.5074456);
    assert_eq!(json["longitude"], -0.1277653);
    assert_eq!(
        json["address"],
        "London, Greater London, England, United Kingdom"
    );
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn test_geocode_not_found() {
    let (server, _) = create_test_server();

    let response = server
        .post("/geocode")
        .json(&json!({"location": "Qwxzyplk"}))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Location not found");
    assert!(json.get("latitude").is_none());
}

#[tokio::test]
async fn test_geocode_missing_location() {
    let (server, provider) = create_test_server();

    for body in [json!({}), json!({"location": ""}), json!({"location": null})] {
        let response = server.post("/geocode").json(&body).await;
        response.assert_status_ok();
        let json: Value = response.json();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "missing location");
    }

    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_geocode_provider_errors() {
    let (server, _) = create_test_server();

    let response = server
        .post("/geocode")
        .json(&json!({"location": "rate limited"}))
        .await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("rate limit"));

    let response = server
        .post("/geocode")
        .json(&json!({"location": "timeout"}))
        .await;
    let json: Value = response.json();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("timed out"));
}

#[tokio::test]
async fn test_geocode_malformed_body() {
    let (server, provider) = create_test_server();

    // Not JSON at all
    let response = server.post("/geocode").text("London").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().starts_with("invalid request"));

    // Wrong field type
    let response = server.post("/geocode").json(&json!({"location": 42})).await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], false);

    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

// Reverse geocode endpoint tests

#[tokio::test]
async fn test_reverse_geocode_null_island() {
    let (server, _) = create_test_server();

    let response = server
        .post("/reverse-geocode")
        .json(&json!({"latitude": 0.0, "longitude": 0.0}))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], true);
    assert!(!json["address"].as_str().unwrap().is_empty());
    assert!(json.get("latitude").is_none());
}

#[tokio::test]
async fn test_reverse_geocode_missing_fields() {
    let (server, provider) = create_test_server();

    let response = server
        .post("/reverse-geocode")
        .json(&json!({"latitude": 10.0}))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "missing field: longitude");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_reverse_geocode_out_of_bounds() {
    let (server, provider) = create_test_server();

    let response = server
        .post("/reverse-geocode")
        .json(&json!({"latitude": 91.0, "longitude": 0.0}))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("out of bounds"));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_reverse_geocode_provider_outcomes() {
    let (server, _) = create_test_server();

    let response = server
        .post("/reverse-geocode")
        .json(&json!({"latitude": -70.0, "longitude": 10.0}))
        .await;
    let json: Value = response.json();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("503"));

    let response = server
        .post("/reverse-geocode")
        .json(&json!({"latitude": 10.0, "longitude": 10.0}))
        .await;
    let json: Value = response.json();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Location not found");
}

// Distance endpoint tests

#[tokio::test]
async fn test_distance_new_york_london() {
    let (server, _) = create_test_server();

    let response = server
        .post("/distance")
        .json(&json!({"lat1": 40.7128, "lon1": -74.0060, "lat2": 51.5074, "lon2": -0.1278}))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], true);

    let km = json["distance_km"].as_f64().unwrap();
    let miles = json["distance_miles"].as_f64().unwrap();
    assert!((km - 5570.0).abs() < 20.0, "unexpected distance {}", km);
    assert_eq!(miles, km * 0.621371);
}

#[tokio::test]
async fn test_distance_same_point() {
    let (server, _) = create_test_server();

    let response = server
        .post("/distance")
        .json(&json!({"lat1": 35.6762, "lon1": 139.6503, "lat2": 35.6762, "lon2": 139.6503}))
        .await;

    let json: Value = response.json();
    assert_eq!(json["success"], true);
    assert_eq!(json["distance_km"].as_f64().unwrap(), 0.0);
    assert_eq!(json["distance_miles"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn test_distance_invalid_inputs() {
    let (server, _) = create_test_server();

    // Missing coordinate
    let response = server
        .post("/distance")
        .json(&json!({"lat1": 0.0, "lon1": 0.0, "lat2": 1.0}))
        .await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "missing field: lon2");
    assert!(json.get("distance_km").is_none());

    // Out of range
    let response = server
        .post("/distance")
        .json(&json!({"lat1": 0.0, "lon1": 200.0, "lat2": 1.0, "lon2": 1.0}))
        .await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("out of bounds"));
}

#[tokio::test]
async fn test_distance_does_not_call_provider() {
    let (server, provider) = create_test_server();

    server
        .post("/distance")
        .json(&json!({"lat1": 1.0, "lon1": 2.0, "lat2": 3.0, "lon2": 4.0}))
        .await
        .assert_status_ok();

    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

// Routing tests

#[tokio::test]
async fn test_api_prefix_routes() {
    let (server, _) = create_test_server();

    let response = server
        .post("/api/geocode")
        .json(&json!({"location": "London"}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["success"], true);

    let response = server
        .post("/api/reverse-geocode")
        .json(&json!({"latitude": 0.0, "longitude": 0.0}))
        .await;
    assert_eq!(response.json::<Value>()["address"], "Null Island");

    let response = server
        .post("/api/distance")
        .json(&json!({"lat1": 0.0, "lon1": 0.0, "lat2": 0.0, "lon2": 1.0}))
        .await;
    let km = response.json::<Value>()["distance_km"].as_f64().unwrap();
    assert!((km - 111.32).abs() < 0.1);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].as_str().is_some());
}
