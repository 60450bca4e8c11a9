//! Validated latitude/longitude pairs.

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, Result};

/// A point on the Earth's surface in decimal degrees (WGS84).
///
/// Construct with [`Coordinate::new`] to guarantee both components are finite
/// and inside their valid ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180).
    pub longitude: f64,
}

impl Coordinate {
    /// Create a validated coordinate.
    ///
    /// # Errors
    ///
    /// - [`GeoError::NonFinite`] if either value is NaN or infinite
    /// - [`GeoError::OutOfBounds`] if latitude is outside ±90° or longitude outside ±180°
    ///
    /// # Examples
    ///
    /// ```
    /// use gowhere::Coordinate;
    ///
    /// assert!(Coordinate::new(40.7128, -74.0060).is_ok());
    /// assert!(Coordinate::new(91.0, 0.0).is_err());
    /// assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() {
            return Err(GeoError::NonFinite {
                field: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() {
            return Err(GeoError::NonFinite {
                field: "longitude",
                value: longitude,
            });
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::OutOfBounds {
                lat: latitude,
                lon: longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Convert to a `geo` point (x = longitude, y = latitude).
    pub fn to_point(self) -> geo::Point<f64> {
        geo::Point::new(self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let c = Coordinate::new(51.5074, -0.1278).unwrap();
        assert_eq!(c.latitude, 51.5074);
        assert_eq!(c.longitude, -0.1278);

        // Range limits are inclusive
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(matches!(
            Coordinate::new(90.5, 0.0),
            Err(GeoError::OutOfBounds { .. })
        ));
        assert!(matches!(
            Coordinate::new(0.0, -180.1),
            Err(GeoError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_non_finite() {
        assert!(matches!(
            Coordinate::new(f64::NAN, 0.0),
            Err(GeoError::NonFinite {
                field: "latitude",
                ..
            })
        ));
        assert!(matches!(
            Coordinate::new(0.0, f64::INFINITY),
            Err(GeoError::NonFinite {
                field: "longitude",
                ..
            })
        ));
    }

    #[test]
    fn test_to_point_axis_order() {
        let p = Coordinate::new(35.5, 138.7).unwrap().to_point();
        assert_eq!(p.x(), 138.7);
        assert_eq!(p.y(), 35.5);
    }
}
