//! azimuth-calc - target position and back-azimuth on the WGS84 ellipsoid
//!
//! From a point A, an azimuth and a distance, azimuth-calc finds the target
//! position with the direct geodetic problem, then the azimuth from an
//! observer at B to that target with the inverse problem.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use azimuth_calc::{calculate, GeoCoordinate};
//!
//! let result = calculate(
//!     GeoCoordinate::new(50.0, 10.0),
//!     90.0,
//!     100.0,
//!     GeoCoordinate::new(50.0, 11.0),
//! );
//!
//! assert!((result.target.latitude - 49.991618).abs() < 1e-4);
//! assert!((result.azimuth_from_b - 91.74).abs() < 0.01);
//! ```
//!
//! ## Raw User Input
//!
//! ```
//! use azimuth_calc::{AzimuthCalculator, CalculationInput};
//!
//! let input = CalculationInput {
//!     lat_a: "50,0".into(),
//!     lon_a: "10".into(),
//!     azimuth: "90".into(),
//!     distance_km: "100".into(),
//!     lat_b: "50".into(),
//!     lon_b: "eleven".into(),
//! };
//!
//! match AzimuthCalculator::wgs84().calculate_raw(&input) {
//!     Some(result) => println!("Azimuth from B: {:.2}", result.azimuth_from_b),
//!     None => println!("Please enter valid values"),
//! }
//! ```

pub mod error;
pub mod types;
pub mod input;
pub mod geodesy;
pub mod calculator;
pub mod batch;
pub mod config;
pub mod logging;
pub mod api;

pub use error::{Error, Result};
pub use types::{AzimuthCalculationResult, CalculationRequest, GeoCoordinate};
pub use input::{parse_azimuth, parse_coordinate, parse_distance, CalculationInput};
pub use geodesy::{direct_geodesic, inverse_geodesic, Ellipsoid, GeodesyEngine, InverseSolution};
pub use calculator::{calculate, AzimuthCalculator};
pub use config::ServerConfig;
