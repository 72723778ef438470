use serde::{Deserialize, Serialize};

use crate::types::{AzimuthCalculationResult, GeoCoordinate};

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub target: GeoCoordinate,
    pub azimuth_from_b: f64,
    /// Geodesic distance from B to the target
    pub distance_from_b_km: f64,
    pub execution_time_ms: f64,
}

impl CalculateResponse {
    pub fn new(result: AzimuthCalculationResult, distance_from_b_km: f64, execution_time_ms: f64) -> Self {
        Self {
            target: result.target,
            azimuth_from_b: result.azimuth_from_b,
            distance_from_b_km,
            execution_time_ms,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub ellipsoid: String,
}

/// Error body returned by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
