//! Geocoding providers.
//!
//! A [`GeocodingProvider`] performs exactly one outbound lookup per call and
//! reports "no match" as `Ok(None)`. Error normalization into uniform results
//! happens one layer up, in [`crate::gateway`].

#[cfg(feature = "nominatim")]
pub mod nominatim;

use std::future::Future;
use std::pin::Pin;

use serde::Serialize;

use crate::coord::Coordinate;
use crate::error::Result;

/// Boxed future returned by provider methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A provider match: position plus human-readable address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// Latitude of the match in decimal degrees.
    pub latitude: f64,
    /// Longitude of the match in decimal degrees.
    pub longitude: f64,
    /// Provider-formatted address, passed through verbatim.
    pub address: String,
}

/// An external service that resolves place names to coordinates and back.
pub trait GeocodingProvider: Send + Sync + 'static {
    /// Short provider name used in log output.
    fn name(&self) -> &str;

    /// Forward geocode: best match for `query`, or `None` if nothing matched.
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Option<Place>>>;

    /// Reverse geocode: address at `coordinate`, or `None` if nothing is there.
    fn reverse(&self, coordinate: Coordinate) -> BoxFuture<'_, Result<Option<Place>>>;
}
