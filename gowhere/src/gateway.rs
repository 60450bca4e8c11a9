//! Uniform geocoding results over any [`GeocodingProvider`].
//!
//! [`GeocodeGateway`] validates caller input, performs at most one provider
//! call and folds every outcome into a [`GeocodeResult`]. It never returns an
//! error and never panics, so request handlers can serialize its output
//! directly.

use std::sync::Arc;

use crate::coord::Coordinate;
use crate::error::GeoError;
use crate::geocode::{GeocodingProvider, Place};

/// Message reported when the provider has no match.
pub const NOT_FOUND_MESSAGE: &str = "Location not found";

/// Outcome of a single geocoding lookup.
#[derive(Debug)]
pub enum GeocodeResult {
    /// The provider resolved the query.
    Found(Place),
    /// The provider answered but had no match. Not a failure.
    NotFound,
    /// Validation or provider failure.
    Error(GeoError),
}

impl GeocodeResult {
    /// Returns `true` for [`GeocodeResult::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, GeocodeResult::Found(_))
    }

    /// Human-readable failure message, or `None` when a place was found.
    pub fn error_message(&self) -> Option<String> {
        match self {
            GeocodeResult::Found(_) => None,
            GeocodeResult::NotFound => Some(NOT_FOUND_MESSAGE.to_string()),
            GeocodeResult::Error(e) => Some(e.to_string()),
        }
    }
}

impl From<crate::error::Result<Option<Place>>> for GeocodeResult {
    fn from(result: crate::error::Result<Option<Place>>) -> Self {
        match result {
            Ok(Some(place)) => GeocodeResult::Found(place),
            Ok(None) => GeocodeResult::NotFound,
            Err(e) => GeocodeResult::Error(e),
        }
    }
}

/// Process-wide geocoding entry point.
///
/// Cheap to clone; all clones share the same provider (and therefore the same
/// HTTP client and throttle).
#[derive(Clone)]
pub struct GeocodeGateway {
    provider: Arc<dyn GeocodingProvider>,
}

impl GeocodeGateway {
    /// Create a gateway over `provider`.
    pub fn new<P: GeocodingProvider>(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Create a gateway over an already shared provider.
    pub fn from_arc(provider: Arc<dyn GeocodingProvider>) -> Self {
        Self { provider }
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Resolve a place name to coordinates.
    ///
    /// A missing or blank `name` yields [`GeoError::MissingLocation`] without
    /// contacting the provider. The name is sent as given (surrounding
    /// whitespace trimmed) and the provider's best match is returned verbatim.
    pub async fn geocode_location(&self, name: Option<&str>) -> GeocodeResult {
        let query = match name.map(str::trim) {
            Some(q) if !q.is_empty() => q,
            _ => return GeocodeResult::Error(GeoError::MissingLocation),
        };

        tracing::debug!(location = query, provider = self.provider_name(), "Geocode lookup");

        let result = GeocodeResult::from(self.provider.search(query).await);
        if let GeocodeResult::Error(e) = &result {
            tracing::warn!(location = query, error = %e, "Geocode lookup failed");
        }
        result
    }

    /// Resolve coordinates to an address.
    ///
    /// Both values must be finite and inside ±90° / ±180°; invalid input is
    /// rejected before any provider call.
    pub async fn reverse_geocode(&self, lat: f64, lon: f64) -> GeocodeResult {
        let coordinate = match Coordinate::new(lat, lon) {
            Ok(c) => c,
            Err(e) => return GeocodeResult::Error(e),
        };

        tracing::debug!(lat, lon, provider = self.provider_name(), "Reverse geocode lookup");

        let result = GeocodeResult::from(self.provider.reverse(coordinate).await);
        if let GeocodeResult::Error(e) = &result {
            tracing::warn!(lat, lon, error = %e, "Reverse geocode lookup failed");
        }
        result
    }
}
