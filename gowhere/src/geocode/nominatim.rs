//! Nominatim (OpenStreetMap) geocoding provider.
//!
//! Only available when the `nominatim` feature is enabled (on by default).
//!
//! # Usage Policy
//!
//! The public Nominatim instance requires every client to identify itself
//! with a `User-Agent` and to send at most one request per second. Both are
//! fixed at construction time through [`NominatimConfig`]. Requests issued
//! faster than `min_interval` wait for their slot, as long as the slot starts
//! within `timeout`; later slots fail locally with [`GeoError::RateLimited`].
//!
//! See <https://operations.osmfoundation.org/policies/nominatim/>.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::Instant;

use super::{BoxFuture, GeocodingProvider, Place};
use crate::coord::Coordinate;
use crate::error::{GeoError, Result};

/// Public OpenStreetMap Nominatim endpoint.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Client tag sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "gowhere_app";

/// Default timeout for HTTP requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default gap between successive requests in milliseconds.
const DEFAULT_MIN_INTERVAL_MS: u64 = 1000;

/// Configuration for the Nominatim provider.
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Identifying client tag required by the usage policy.
    pub user_agent: String,
    /// Per-request timeout, covering both the throttle wait and the HTTP call.
    pub timeout: Duration,
    /// Minimum time between the start of two outbound requests.
    pub min_interval: Duration,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            min_interval: Duration::from_millis(DEFAULT_MIN_INTERVAL_MS),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration for the public instance with the given client tag.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `GOWHERE_USER_AGENT` | Client tag sent to the provider | `gowhere_app` |
    /// | `GOWHERE_GEOCODER_URL` | Provider base URL | `https://nominatim.openstreetmap.org` |
    /// | `GOWHERE_GEOCODER_TIMEOUT` | Request timeout in seconds | 10 |
    /// | `GOWHERE_GEOCODER_MIN_INTERVAL_MS` | Minimum gap between requests | 1000 |
    ///
    /// Unset or unparsable values fall back to the defaults. A timeout of `0`
    /// counts as unparsable; a minimum interval of `0` disables throttling.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(user_agent) = std::env::var("GOWHERE_USER_AGENT") {
            if !user_agent.trim().is_empty() {
                config.user_agent = user_agent;
            }
        }
        if let Ok(url) = std::env::var("GOWHERE_GEOCODER_URL") {
            if !url.trim().is_empty() {
                config = config.with_base_url(url);
            }
        }
        if let Some(secs) = env_u64("GOWHERE_GEOCODER_TIMEOUT").filter(|&secs| secs > 0) {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = env_u64("GOWHERE_GEOCODER_MIN_INTERVAL_MS") {
            config.min_interval = Duration::from_millis(ms);
        }

        config
    }

    /// Point the provider at another Nominatim-compatible instance.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the minimum gap between requests. `Duration::ZERO` disables throttling.
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

/// Raw search/reverse hit. Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct RawPlace {
    lat: String,
    lon: String,
    display_name: String,
}

impl RawPlace {
    fn into_place(self) -> Result<Place> {
        let latitude = self
            .lat
            .parse::<f64>()
            .map_err(|e| GeoError::MalformedResponse {
                reason: format!("invalid lat {:?}: {}", self.lat, e),
            })?;
        let longitude = self
            .lon
            .parse::<f64>()
            .map_err(|e| GeoError::MalformedResponse {
                reason: format!("invalid lon {:?}: {}", self.lon, e),
            })?;

        Ok(Place {
            latitude,
            longitude,
            address: self.display_name,
        })
    }
}

/// Reverse lookups answer with either a place or `{"error": "..."}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReversePayload {
    Place(RawPlace),
    Error {
        #[allow(dead_code)]
        error: String,
    },
}

/// Parse the body of a `/search` response into its best match.
pub fn parse_search_response(body: &str) -> Result<Option<Place>> {
    let hits: Vec<RawPlace> =
        serde_json::from_str(body).map_err(|e| GeoError::MalformedResponse {
            reason: e.to_string(),
        })?;

    hits.into_iter().next().map(RawPlace::into_place).transpose()
}

/// Parse the body of a `/reverse` response.
pub fn parse_reverse_response(body: &str) -> Result<Option<Place>> {
    let payload: ReversePayload =
        serde_json::from_str(body).map_err(|e| GeoError::MalformedResponse {
            reason: e.to_string(),
        })?;

    match payload {
        ReversePayload::Place(raw) => raw.into_place().map(Some),
        ReversePayload::Error { .. } => Ok(None),
    }
}

/// Geocoding provider backed by a Nominatim HTTP API.
///
/// Holds one pooled HTTP client; build it once at startup and share it.
pub struct NominatimProvider {
    client: Client,
    config: NominatimConfig,
    /// Start time of the most recently reserved request slot.
    last_request: Mutex<Option<Instant>>,
}

impl NominatimProvider {
    /// Create a new provider with the given configuration.
    pub fn new(config: NominatimConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeoError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            config,
            last_request: Mutex::new(None),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &NominatimConfig {
        &self.config
    }

    /// Reserve the next request slot and sleep until it starts.
    ///
    /// Returns the instant by which the request must complete. A slot starting
    /// at or after that instant is not reserved and the call fails with
    /// [`GeoError::RateLimited`]. The lock is released before sleeping.
    async fn acquire_slot(&self) -> Result<Instant> {
        let now = Instant::now();
        let deadline = now + self.config.timeout;
        if self.config.min_interval.is_zero() {
            return Ok(deadline);
        }

        let slot = {
            let mut last = self.last_request.lock().await;
            let slot = match *last {
                Some(previous) => (previous + self.config.min_interval).max(now),
                None => now,
            };
            if slot >= deadline {
                tracing::debug!(
                    wait_ms = (slot - now).as_millis() as u64,
                    "Request slot beyond timeout"
                );
                return Err(GeoError::RateLimited);
            }
            *last = Some(slot);
            slot
        };

        tokio::time::sleep_until(slot).await;
        Ok(deadline)
    }

    /// Issue a GET against `path` and return the body of a successful response.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let deadline = self.acquire_slot().await?;

        let url = format!("{}/{}", self.config.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .timeout(deadline.saturating_duration_since(Instant::now()))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeoError::RateLimited);
        }
        if !status.is_success() {
            return Err(GeoError::ProviderStatus {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, e: reqwest::Error) -> GeoError {
        if e.is_timeout() {
            GeoError::Timeout {
                timeout: self.config.timeout,
            }
        } else {
            GeoError::Http(e)
        }
    }

    async fn search_inner(&self, query: &str) -> Result<Option<Place>> {
        let params = [
            ("q", query.to_string()),
            ("format", "jsonv2".to_string()),
            ("limit", "1".to_string()),
        ];
        let body = self.get("search", &params).await?;
        parse_search_response(&body)
    }

    async fn reverse_inner(&self, coordinate: Coordinate) -> Result<Option<Place>> {
        let params = [
            ("lat", coordinate.latitude.to_string()),
            ("lon", coordinate.longitude.to_string()),
            ("format", "jsonv2".to_string()),
        ];
        let body = self.get("reverse", &params).await?;
        parse_reverse_response(&body)
    }
}

impl GeocodingProvider for NominatimProvider {
    fn name(&self) -> &str {
        "nominatim"
    }

    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Option<Place>>> {
        Box::pin(self.search_inner(query))
    }

    fn reverse(&self, coordinate: Coordinate) -> BoxFuture<'_, Result<Option<Place>>> {
        Box::pin(self.reverse_inner(coordinate))
    }
}
