//! # gowhere - Geocoding Gateway and Geodesic Distance
//!
//! Small library behind the gowhere HTTP service and CLI. It resolves place
//! names to coordinates (and back) through an external geocoding provider and
//! computes ellipsoidal distances between coordinate pairs.
//!
//! ## Features
//!
//! - **Uniform results**: every gateway call yields a [`GeocodeResult`], never a panic
//! - **Pluggable providers**: anything implementing [`GeocodingProvider`]
//! - **Nominatim**: OpenStreetMap provider with a usage-policy throttle (default `nominatim` feature)
//! - **Geodesic distance**: WGS84 ellipsoid, stable for antipodal points
//!
//! ## Quick Start
//!
//! ```ignore
//! use gowhere::{GeocodeGateway, GeocodeResult};
//! use gowhere::geocode::nominatim::{NominatimConfig, NominatimProvider};
//!
//! let provider = NominatimProvider::new(NominatimConfig::new("my_app"))?;
//! let gateway = GeocodeGateway::new(provider);
//!
//! match gateway.geocode_location(Some("Lisbon")).await {
//!     GeocodeResult::Found(place) => println!("{}: {}, {}", place.address, place.latitude, place.longitude),
//!     GeocodeResult::NotFound => println!("Location not found"),
//!     GeocodeResult::Error(e) => eprintln!("{e}"),
//! }
//!
//! let d = gowhere::calculate_distance(40.7128, -74.0060, 51.5074, -0.1278)?;
//! println!("{:.1} km / {:.1} mi", d.kilometers, d.miles);
//! ```

pub mod coord;
pub mod distance;
pub mod error;
pub mod gateway;
pub mod geocode;

// Re-export main types at crate root for convenience
pub use coord::Coordinate;
pub use distance::{calculate_distance, distance_between, DistanceResult, KM_TO_MILES};
pub use error::{ErrorKind, GeoError, Result};
pub use gateway::{GeocodeGateway, GeocodeResult, NOT_FOUND_MESSAGE};
pub use geocode::{GeocodingProvider, Place};
