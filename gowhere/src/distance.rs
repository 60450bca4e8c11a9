//! Geodesic distance between two coordinates.
//!
//! Distances are measured on the WGS84 ellipsoid using Karney's geodesic
//! algorithm (through the `geo` crate), which converges for every pair of
//! points including exact antipodes. Should it ever yield a non-finite value
//! the calculator falls back to the haversine great-circle distance.

use geo::{Distance, Geodesic, Haversine, Point};
use serde::Serialize;

use crate::coord::Coordinate;
use crate::error::Result;

/// Fixed kilometers-to-miles factor used for every [`DistanceResult`].
pub const KM_TO_MILES: f64 = 0.621371;

/// Distance between two coordinates in both units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceResult {
    /// Distance in kilometers.
    pub kilometers: f64,
    /// Distance in miles, always `kilometers * KM_TO_MILES`.
    pub miles: f64,
}

impl DistanceResult {
    /// Build a result from a kilometer value.
    pub fn from_kilometers(kilometers: f64) -> Self {
        Self {
            kilometers,
            miles: kilometers * KM_TO_MILES,
        }
    }
}

/// Compute the distance between two validated coordinates.
///
/// # Example
///
/// ```
/// use gowhere::{distance_between, Coordinate};
///
/// let a = Coordinate::new(48.8566, 2.3522).unwrap();
/// assert_eq!(distance_between(&a, &a).kilometers, 0.0);
/// ```
pub fn distance_between(a: &Coordinate, b: &Coordinate) -> DistanceResult {
    if a == b {
        return DistanceResult::from_kilometers(0.0);
    }

    let (p1, p2) = (a.to_point(), b.to_point());
    let meters = finite_or_great_circle(Geodesic.distance(p1, p2), p1, p2);

    DistanceResult::from_kilometers(meters / 1000.0)
}

/// Keep a finite geodesic length, otherwise measure the haversine distance.
fn finite_or_great_circle(meters: f64, p1: Point<f64>, p2: Point<f64>) -> f64 {
    if meters.is_finite() {
        return meters;
    }

    tracing::warn!(
        lat1 = p1.y(),
        lon1 = p1.x(),
        lat2 = p2.y(),
        lon2 = p2.x(),
        "Geodesic did not converge, using great-circle distance"
    );
    Haversine.distance(p1, p2)
}

/// Validate two raw latitude/longitude pairs and compute their distance.
///
/// # Arguments
///
/// * `lat1`, `lon1` - First point in decimal degrees
/// * `lat2`, `lon2` - Second point in decimal degrees
///
/// # Errors
///
/// Returns a validation error if any value is non-finite or out of range.
///
/// # Example
///
/// ```
/// // New York to London
/// let d = gowhere::calculate_distance(40.7128, -74.0060, 51.5074, -0.1278).unwrap();
/// assert!((d.kilometers - 5570.0).abs() < 20.0);
/// ```
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<DistanceResult> {
    let a = Coordinate::new(lat1, lon1)?;
    let b = Coordinate::new(lat2, lon2)?;
    Ok(distance_between(&a, &b))
}
