//! Target position and back-azimuth calculation
//!
//! Given a point A, an azimuth and distance from A, and an observer at B:
//! the target is found with the direct problem from A, then the azimuth
//! from B to the target with the inverse problem.

use tracing::debug;

use crate::error::Result;
use crate::geodesy::{self, GeodesyEngine};
use crate::input::CalculationInput;
use crate::types::{AzimuthCalculationResult, CalculationRequest, GeoCoordinate};

/// Composes the direct and inverse solutions into one calculation
#[derive(Debug, Clone, Copy, Default)]
pub struct AzimuthCalculator {
    engine: GeodesyEngine,
}

impl AzimuthCalculator {
    /// Creates a calculator on top of the given engine
    pub fn new(engine: GeodesyEngine) -> Self {
        Self { engine }
    }

    /// Creates a calculator on the WGS84 ellipsoid
    pub fn wgs84() -> Self {
        Self::new(*geodesy::wgs84())
    }

    /// Returns the underlying engine
    pub fn engine(&self) -> &GeodesyEngine {
        &self.engine
    }

    /// Computes the target reached from `point_a` and the azimuth to it from `point_b`
    ///
    /// # Arguments
    /// * `point_a` - start point
    /// * `azimuth_from_a` - bearing from A in degrees, clockwise from true north
    /// * `distance_km` - distance from A in kilometers
    /// * `point_b` - observer point
    pub fn calculate(
        &self,
        point_a: GeoCoordinate,
        azimuth_from_a: f64,
        distance_km: f64,
        point_b: GeoCoordinate,
    ) -> AzimuthCalculationResult {
        let (lat_target, lon_target) = self.engine.direct_geodesic(
            point_a.latitude,
            point_a.longitude,
            azimuth_from_a,
            distance_km,
        );

        let azimuth_from_b = self.engine.inverse_geodesic(
            point_b.latitude,
            point_b.longitude,
            lat_target,
            lon_target,
        );

        debug!(
            %point_a, azimuth_from_a, distance_km, %point_b,
            lat_target, lon_target, azimuth_from_b,
            "calculated target"
        );

        AzimuthCalculationResult {
            target: GeoCoordinate::new(lat_target, lon_target),
            azimuth_from_b,
        }
    }

    /// Like [`calculate`](Self::calculate), but fails on non-finite inputs
    /// or solver output instead of returning NaN coordinates
    pub fn try_calculate(
        &self,
        point_a: GeoCoordinate,
        azimuth_from_a: f64,
        distance_km: f64,
        point_b: GeoCoordinate,
    ) -> Result<AzimuthCalculationResult> {
        let (lat_target, lon_target) = self.engine.try_direct_geodesic(
            point_a.latitude,
            point_a.longitude,
            azimuth_from_a,
            distance_km,
        )?;

        let azimuth_from_b = self.engine.try_inverse_geodesic(
            point_b.latitude,
            point_b.longitude,
            lat_target,
            lon_target,
        )?;

        Ok(AzimuthCalculationResult {
            target: GeoCoordinate::new(lat_target, lon_target),
            azimuth_from_b,
        })
    }

    /// Checked calculation of an already parsed request
    pub fn try_calculate_request(&self, request: &CalculationRequest) -> Result<AzimuthCalculationResult> {
        self.try_calculate(
            request.point_a,
            request.azimuth_from_a,
            request.distance_km,
            request.point_b,
        )
    }

    /// Calculates straight from raw text; `None` if any field is unreadable
    pub fn calculate_raw(&self, input: &CalculationInput) -> Option<AzimuthCalculationResult> {
        let request = input.parse()?;
        Some(self.calculate(
            request.point_a,
            request.azimuth_from_a,
            request.distance_km,
            request.point_b,
        ))
    }
}

/// [`AzimuthCalculator::calculate`] on the shared WGS84 engine
pub fn calculate(
    point_a: GeoCoordinate,
    azimuth_from_a: f64,
    distance_km: f64,
    point_b: GeoCoordinate,
) -> AzimuthCalculationResult {
    AzimuthCalculator::wgs84().calculate(point_a, azimuth_from_a, distance_km, point_b)
}
