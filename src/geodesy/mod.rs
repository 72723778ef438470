//! Direct and inverse geodetic problems on a reference ellipsoid
//!
//! The free functions here solve on a process-wide WGS84 engine. Build a
//! [`GeodesyEngine`] directly to solve on another [`Ellipsoid`].

pub mod ellipsoid;
pub mod engine;

use std::sync::OnceLock;

pub use ellipsoid::Ellipsoid;
pub use engine::{
    normalize_azimuth, round_to_hundredths, GeodesyEngine, InverseSolution, METERS_PER_KILOMETER,
};

static WGS84: OnceLock<GeodesyEngine> = OnceLock::new();

/// Shared WGS84 engine
pub fn wgs84() -> &'static GeodesyEngine {
    WGS84.get_or_init(GeodesyEngine::wgs84)
}

/// Destination from `(lat_a, lon_a)` along `azimuth_from_a` for `distance_km` on WGS84
pub fn direct_geodesic(lat_a: f64, lon_a: f64, azimuth_from_a: f64, distance_km: f64) -> (f64, f64) {
    wgs84().direct_geodesic(lat_a, lon_a, azimuth_from_a, distance_km)
}

/// Azimuth from `(lat_b, lon_b)` to the target on WGS84, [0, 360) to two decimals
pub fn inverse_geodesic(lat_b: f64, lon_b: f64, lat_target: f64, lon_target: f64) -> f64 {
    wgs84().inverse_geodesic(lat_b, lon_b, lat_target, lon_target)
}
