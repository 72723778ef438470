//! Parsing of raw user input into numbers
//!
//! Input typed on devices with a comma decimal separator (`50,20`) is
//! accepted alongside the dot form. A value that cannot be read is reported
//! as `None`; callers treat that as "not enough input yet", not as an error.
//! No range checks happen here, a latitude of 200 parses fine.

use serde::{Deserialize, Serialize};

use crate::types::{CalculationRequest, GeoCoordinate};

/// Parses a latitude/longitude pair; `None` unless both parse
pub fn parse_coordinate(lat_raw: &str, lon_raw: &str) -> Option<GeoCoordinate> {
    let latitude = parse_number(lat_raw)?;
    let longitude = parse_number(lon_raw)?;
    Some(GeoCoordinate::new(latitude, longitude))
}

/// Parses an azimuth in degrees
pub fn parse_azimuth(azimuth_raw: &str) -> Option<f64> {
    parse_number(azimuth_raw)
}

/// Parses a distance in kilometers
pub fn parse_distance(distance_raw: &str) -> Option<f64> {
    parse_number(distance_raw)
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', ".").trim().parse::<f64>().ok()
}

/// The six raw text fields of one calculation, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    #[serde(default)]
    pub lat_a: String,
    #[serde(default)]
    pub lon_a: String,
    #[serde(default)]
    pub azimuth: String,
    #[serde(default)]
    pub distance_km: String,
    #[serde(default)]
    pub lat_b: String,
    #[serde(default)]
    pub lon_b: String,
}

impl CalculationInput {
    /// Parses every field; `None` if any of them is unreadable
    pub fn parse(&self) -> Option<CalculationRequest> {
        Some(CalculationRequest {
            point_a: parse_coordinate(&self.lat_a, &self.lon_a)?,
            azimuth_from_a: parse_azimuth(&self.azimuth)?,
            distance_km: parse_distance(&self.distance_km)?,
            point_b: parse_coordinate(&self.lat_b, &self.lon_b)?,
        })
    }
}
