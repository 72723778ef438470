//! Invariants of the calculation over generated inputs

use approx::assert_abs_diff_eq;
use azimuth_calc::geodesy::GeodesyEngine;
use azimuth_calc::{calculate, parse_coordinate, GeoCoordinate};
use proptest::prelude::*;

fn angular_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

proptest! {
    #[test]
    fn azimuth_from_b_is_in_range(
        lat_a in -80.0f64..80.0,
        lon_a in -180.0f64..180.0,
        azimuth in 0.0f64..360.0,
        distance_km in 0.0f64..5000.0,
        lat_b in -80.0f64..80.0,
        lon_b in -180.0f64..180.0,
    ) {
        let result = calculate(
            GeoCoordinate::new(lat_a, lon_a),
            azimuth,
            distance_km,
            GeoCoordinate::new(lat_b, lon_b),
        );

        prop_assert!(result.azimuth_from_b >= 0.0);
        prop_assert!(result.azimuth_from_b < 360.0);
    }

    #[test]
    fn inverse_from_a_recovers_initial_azimuth(
        lat_a in -70.0f64..70.0,
        lon_a in -180.0f64..180.0,
        azimuth in 0.0f64..360.0,
        distance_km in 1.0f64..2000.0,
    ) {
        let engine = GeodesyEngine::wgs84();
        let (lat_t, lon_t) = engine.direct_geodesic(lat_a, lon_a, azimuth, distance_km);
        let recovered = engine.inverse_geodesic(lat_a, lon_a, lat_t, lon_t);

        prop_assert!(angular_difference(recovered, azimuth) <= 0.0051);
    }

    #[test]
    fn direct_distance_is_preserved(
        lat_a in -70.0f64..70.0,
        lon_a in -180.0f64..180.0,
        azimuth in 0.0f64..360.0,
        distance_km in 1.0f64..2000.0,
    ) {
        let engine = GeodesyEngine::wgs84();
        let (lat_t, lon_t) = engine.direct_geodesic(lat_a, lon_a, azimuth, distance_km);
        let back = engine.distance_km(GeoCoordinate::new(lat_a, lon_a), GeoCoordinate::new(lat_t, lon_t));

        prop_assert!((back - distance_km).abs() < 1e-6);
    }

    #[test]
    fn comma_and_dot_parse_alike(whole in -90i32..90, frac in 0u32..1000) {
        let dot = format!("{}.{:03}", whole, frac);
        let comma = format!("{},{:03}", whole, frac);
        prop_assert_eq!(parse_coordinate(&dot, &dot), parse_coordinate(&comma, &comma));
    }
}

#[test]
fn zero_distance_returns_point_a() {
    for &(lat, lon, azimuth) in &[(50.0, 10.0, 90.0), (-33.9, 151.2, 0.0), (0.0, 0.0, 225.0)] {
        let result = calculate(
            GeoCoordinate::new(lat, lon),
            azimuth,
            0.0,
            GeoCoordinate::new(lat + 1.0, lon),
        );

        assert_abs_diff_eq!(result.target.latitude, lat, epsilon = 1e-9);
        assert_abs_diff_eq!(result.target.longitude, lon, epsilon = 1e-9);
    }
}
