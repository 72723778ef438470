//! Core data types for azimuth-calc

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point on the ellipsoid in decimal degrees
///
/// No range validation is performed on construction; callers supply
/// sensible geodetic values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Creates a new coordinate from latitude/longitude in degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Outcome of a single target calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AzimuthCalculationResult {
    /// Target position reached from point A
    pub target: GeoCoordinate,
    /// Azimuth from point B to the target, degrees in [0, 360), two decimals
    pub azimuth_from_b: f64,
}

/// Fully parsed inputs of a calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Starting point
    pub point_a: GeoCoordinate,
    /// Azimuth from A in degrees, clockwise from true north
    pub azimuth_from_a: f64,
    /// Distance from A in kilometers
    pub distance_km: f64,
    /// Observer point
    pub point_b: GeoCoordinate,
}
