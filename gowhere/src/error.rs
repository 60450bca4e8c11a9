//! Error types for the gowhere library.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while validating input or talking to a geocoding provider.
#[derive(Error, Debug)]
pub enum GeoError {
    /// The location query was absent or blank.
    #[error("missing location")]
    MissingLocation,

    /// A required request field was absent.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A coordinate component was NaN or infinite.
    #[error("Coordinate is not a finite number: {field}={value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Coordinates are outside the valid latitude/longitude ranges.
    #[error("Coordinates out of bounds: lat={lat}, lon={lon} (valid: lat ±90°, lon ±180°)")]
    OutOfBounds { lat: f64, lon: f64 },

    /// The request body could not be decoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Transport-level failure reaching the provider.
    #[cfg(feature = "nominatim")]
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider did not answer within the configured timeout.
    #[error("geocoding provider timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// The provider rejected the request under its usage policy, or the next
    /// free request slot lies beyond the configured timeout.
    #[error("geocoding provider rate limit exceeded")]
    RateLimited,

    /// The provider answered with a non-success HTTP status.
    #[error("geocoding provider returned status {status}")]
    ProviderStatus { status: u16 },

    /// The provider answered with a body we could not interpret.
    #[error("malformed geocoding response: {reason}")]
    MalformedResponse { reason: String },

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {reason}")]
    ClientBuild { reason: String },
}

/// Coarse classification of a [`GeoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing caller input. No provider call was made.
    Validation,
    /// Network failure, timeout, or provider-side rejection.
    Provider,
}

impl GeoError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeoError::MissingLocation
            | GeoError::MissingField(_)
            | GeoError::NonFinite { .. }
            | GeoError::OutOfBounds { .. }
            | GeoError::InvalidRequest(_) => ErrorKind::Validation,
            _ => ErrorKind::Provider,
        }
    }
}

/// Result type alias using [`GeoError`].
pub type Result<T> = std::result::Result<T, GeoError>;
