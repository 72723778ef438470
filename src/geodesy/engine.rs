use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};
use tracing::warn;

use crate::error::{Error, Result};
use crate::geodesy::ellipsoid::Ellipsoid;
use crate::types::GeoCoordinate;

/// Meters in one kilometer; the solver works in meters
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Unrounded inverse solution between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSolution {
    /// Geodesic distance in meters
    pub distance_m: f64,
    /// Initial azimuth at the first point as returned by the solver, (-180, 180]
    pub azimuth_deg: f64,
}

impl InverseSolution {
    /// Geodesic distance in kilometers
    pub fn distance_km(&self) -> f64 {
        self.distance_m / METERS_PER_KILOMETER
    }
}

/// Solves the direct and inverse geodetic problems on an ellipsoid
///
/// Uses Karney's algorithms, accurate to well below a millimeter for
/// terrestrial distances. The engine holds only precomputed series
/// coefficients and can be copied and shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct GeodesyEngine {
    geodesic: Geodesic,
    ellipsoid: Ellipsoid,
}

impl GeodesyEngine {
    /// Creates an engine for the given ellipsoid
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            geodesic: Geodesic::new(ellipsoid.semi_major_axis(), ellipsoid.flattening()),
            ellipsoid,
        }
    }

    /// Creates an engine on the WGS84 ellipsoid
    pub fn wgs84() -> Self {
        Self::new(Ellipsoid::Wgs84)
    }

    /// Returns the ellipsoid this engine solves on
    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    /// Destination reached from a start point along an initial azimuth
    ///
    /// # Arguments
    /// * `lat_a`, `lon_a` - start point in degrees
    /// * `azimuth_from_a` - initial bearing in degrees, clockwise from true north
    /// * `distance_km` - distance along the geodesic in kilometers
    ///
    /// Returns `(latitude, longitude)` of the destination in degrees at full
    /// solver precision.
    pub fn direct_geodesic(
        &self,
        lat_a: f64,
        lon_a: f64,
        azimuth_from_a: f64,
        distance_km: f64,
    ) -> (f64, f64) {
        let distance_m = distance_km * METERS_PER_KILOMETER;
        self.geodesic.direct(lat_a, lon_a, azimuth_from_a, distance_m)
    }

    /// Azimuth from the first point to the second, in [0, 360) rounded to
    /// two decimals
    pub fn inverse_geodesic(&self, lat_b: f64, lon_b: f64, lat_target: f64, lon_target: f64) -> f64 {
        let solution = self.inverse_solution(lat_b, lon_b, lat_target, lon_target);
        round_azimuth(solution.azimuth_deg)
    }

    /// Unrounded distance and initial azimuth between two points
    pub fn inverse_solution(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> InverseSolution {
        let (distance_m, azimuth_deg, _azi2, _a12): (f64, f64, f64, f64) =
            self.geodesic.inverse(lat1, lon1, lat2, lon2);

        InverseSolution {
            distance_m,
            azimuth_deg,
        }
    }

    /// Geodesic distance between two coordinates in kilometers
    pub fn distance_km(&self, from: GeoCoordinate, to: GeoCoordinate) -> f64 {
        self.inverse_solution(from.latitude, from.longitude, to.latitude, to.longitude)
            .distance_km()
    }

    /// Like [`direct_geodesic`](Self::direct_geodesic), but rejects
    /// non-finite inputs and outputs
    pub fn try_direct_geodesic(
        &self,
        lat_a: f64,
        lon_a: f64,
        azimuth_from_a: f64,
        distance_km: f64,
    ) -> Result<(f64, f64)> {
        ensure_finite(&[
            ("latitude", lat_a),
            ("longitude", lon_a),
            ("azimuth", azimuth_from_a),
            ("distance", distance_km),
        ])?;

        let (lat, lon) = self.direct_geodesic(lat_a, lon_a, azimuth_from_a, distance_km);
        if !(lat.is_finite() && lon.is_finite()) {
            warn!(lat_a, lon_a, azimuth_from_a, distance_km, "direct solution is not finite");
            return Err(Error::NonConvergent(format!(
                "direct problem from ({}, {}) along {} for {} km",
                lat_a, lon_a, azimuth_from_a, distance_km
            )));
        }

        Ok((lat, lon))
    }

    /// Like [`inverse_geodesic`](Self::inverse_geodesic), but rejects
    /// non-finite inputs and outputs
    pub fn try_inverse_geodesic(
        &self,
        lat_b: f64,
        lon_b: f64,
        lat_target: f64,
        lon_target: f64,
    ) -> Result<f64> {
        ensure_finite(&[
            ("latitude", lat_b),
            ("longitude", lon_b),
            ("target latitude", lat_target),
            ("target longitude", lon_target),
        ])?;

        let solution = self.inverse_solution(lat_b, lon_b, lat_target, lon_target);
        if !solution.azimuth_deg.is_finite() {
            warn!(lat_b, lon_b, lat_target, lon_target, "inverse solution is not finite");
            return Err(Error::NonConvergent(format!(
                "inverse problem from ({}, {}) to ({}, {})",
                lat_b, lon_b, lat_target, lon_target
            )));
        }

        Ok(round_azimuth(solution.azimuth_deg))
    }
}

impl Default for GeodesyEngine {
    fn default() -> Self {
        Self::wgs84()
    }
}

/// Shifts a signed solver azimuth in (-180, 180] into [0, 360)
pub fn normalize_azimuth(azimuth_deg: f64) -> f64 {
    if azimuth_deg < 0.0 {
        azimuth_deg + 360.0
    } else {
        azimuth_deg
    }
}

/// Rounds half away from zero to two decimal places
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round_azimuth(azimuth_deg: f64) -> f64 {
    let rounded = round_to_hundredths(normalize_azimuth(azimuth_deg));

    // 359.995.. rounds up to 360.00; == 0.0 also folds -0.0
    if rounded >= 360.0 || rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn ensure_finite(values: &[(&str, f64)]) -> Result<()> {
    match values.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, value)) => Err(Error::NonFinite(format!("{} is {}", name, value))),
        None => Ok(()),
    }
}
