//! gowhere Service - HTTP microservice for geocoding and geodesic distance.
//!
//! A small REST API that resolves place names through Nominatim and measures
//! distances on the WGS84 ellipsoid.
//!
//! ## Environment Variables
//!
//! A `.env` file in the working directory is loaded first when present.
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GOWHERE_PORT` | HTTP server port | 5000 |
//! | `GOWHERE_USER_AGENT` | Client tag sent to the geocoding provider | `gowhere_app` |
//! | `GOWHERE_GEOCODER_URL` | Nominatim base URL | `https://nominatim.openstreetmap.org` |
//! | `GOWHERE_GEOCODER_TIMEOUT` | Provider request timeout in seconds | 10 |
//! | `GOWHERE_GEOCODER_MIN_INTERVAL_MS` | Minimum gap between provider requests | 1000 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `POST /geocode` - Location name to coordinates
//! - `POST /reverse-geocode` - Coordinates to address
//! - `POST /distance` - Geodesic distance between two points
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)
//!
//! The three lookup endpoints are also served under `/api`.

use std::net::SocketAddr;

use gowhere::geocode::nominatim::{NominatimConfig, NominatimProvider};
use gowhere::GeocodeGateway;
use gowhere_service::{handlers, router, AppState};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation for the gowhere service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "gowhere Geocoding Service",
        version = "0.1.0",
        description = "Forward/reverse geocoding and geodesic distance over a JSON API.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::geocode_location,
        handlers::reverse_geocode,
        handlers::calculate_distance,
        handlers::health_check,
    ),
    components(
        schemas(
            handlers::GeocodeRequest,
            handlers::GeocodeResponse,
            handlers::ReverseGeocodeRequest,
            handlers::ReverseGeocodeResponse,
            handlers::DistanceRequest,
            handlers::DistanceResponse,
            handlers::HealthResponse,
        )
    ),
    tags(
        (name = "geocoding", description = "Forward and reverse geocoding"),
        (name = "distance", description = "Geodesic distance"),
        (name = "system", description = "System and health endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is not an error
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gowhere_service=info,gowhere=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    // Load port from environment (service-specific config)
    let port: u16 = std::env::var("GOWHERE_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000);

    // Provider settings: GOWHERE_USER_AGENT, GOWHERE_GEOCODER_URL,
    // GOWHERE_GEOCODER_TIMEOUT, GOWHERE_GEOCODER_MIN_INTERVAL_MS
    let config = NominatimConfig::from_env();

    tracing::info!(
        provider_url = %config.base_url,
        user_agent = %config.user_agent,
        timeout_ms = config.timeout.as_millis() as u64,
        min_interval_ms = config.min_interval.as_millis() as u64,
        port = port,
        "Starting gowhere service"
    );

    let gateway = GeocodeGateway::new(NominatimProvider::new(config)?);
    let state = AppState::new(gateway);

    // Build router
    let app = router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
