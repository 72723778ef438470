use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Reference ellipsoids the engine can solve on
///
/// Deserialisation goes through [`Ellipsoid::custom`], so a configured
/// custom ellipsoid is validated the same way as one built in code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EllipsoidRepr", into = "EllipsoidRepr")]
pub enum Ellipsoid {
    /// World Geodetic System 1984
    #[default]
    Wgs84,
    /// Geodetic Reference System 1980
    Grs80,
    /// Arbitrary ellipsoid
    Custom {
        semi_major_axis_m: f64,
        flattening: f64,
    },
}

impl Ellipsoid {
    /// Creates a custom ellipsoid from its semi-major axis (meters) and flattening
    pub fn custom(semi_major_axis_m: f64, flattening: f64) -> Result<Self> {
        if !(semi_major_axis_m.is_finite() && semi_major_axis_m > 0.0) {
            return Err(Error::Config(format!(
                "Semi-major axis must be positive, got {}",
                semi_major_axis_m
            )));
        }
        if !(flattening.is_finite() && flattening < 1.0) {
            return Err(Error::Config(format!(
                "Flattening must be below 1, got {}",
                flattening
            )));
        }

        Ok(Ellipsoid::Custom {
            semi_major_axis_m,
            flattening,
        })
    }

    /// Semi-major axis in meters
    pub fn semi_major_axis(&self) -> f64 {
        match self {
            Ellipsoid::Wgs84 | Ellipsoid::Grs80 => 6_378_137.0,
            Ellipsoid::Custom { semi_major_axis_m, .. } => *semi_major_axis_m,
        }
    }

    /// Flattening (a - b) / a
    pub fn flattening(&self) -> f64 {
        match self {
            Ellipsoid::Wgs84 => 1.0 / 298.257_223_563,
            Ellipsoid::Grs80 => 1.0 / 298.257_222_101,
            Ellipsoid::Custom { flattening, .. } => *flattening,
        }
    }

    /// Short name used in configuration and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Ellipsoid::Wgs84 => "wgs84",
            Ellipsoid::Grs80 => "grs80",
            Ellipsoid::Custom { .. } => "custom",
        }
    }
}

/// Serialised form of [`Ellipsoid`]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EllipsoidRepr {
    Wgs84,
    Grs80,
    Custom {
        semi_major_axis_m: f64,
        flattening: f64,
    },
}

impl TryFrom<EllipsoidRepr> for Ellipsoid {
    type Error = Error;

    fn try_from(repr: EllipsoidRepr) -> Result<Self> {
        match repr {
            EllipsoidRepr::Wgs84 => Ok(Ellipsoid::Wgs84),
            EllipsoidRepr::Grs80 => Ok(Ellipsoid::Grs80),
            EllipsoidRepr::Custom { semi_major_axis_m, flattening } => {
                Ellipsoid::custom(semi_major_axis_m, flattening)
            }
        }
    }
}

impl From<Ellipsoid> for EllipsoidRepr {
    fn from(ellipsoid: Ellipsoid) -> Self {
        match ellipsoid {
            Ellipsoid::Wgs84 => EllipsoidRepr::Wgs84,
            Ellipsoid::Grs80 => EllipsoidRepr::Grs80,
            Ellipsoid::Custom { semi_major_axis_m, flattening } => EllipsoidRepr::Custom {
                semi_major_axis_m,
                flattening,
            },
        }
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ellipsoid::Custom { semi_major_axis_m, flattening } => {
                write!(f, "custom (a={}, f={})", semi_major_axis_m, flattening)
            }
            named => f.write_str(named.name()),
        }
    }
}

impl FromStr for Ellipsoid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs84" | "wgs-84" => Ok(Ellipsoid::Wgs84),
            "grs80" | "grs-80" => Ok(Ellipsoid::Grs80),
            other => Err(Error::Config(format!("Unknown ellipsoid: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wgs84_parameters() {
        let e = Ellipsoid::Wgs84;
        assert_eq!(e.semi_major_axis(), 6378137.0);
        assert_eq!(e.flattening(), 1.0 / 298.257223563);
        assert_eq!(Ellipsoid::default(), Ellipsoid::Wgs84);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("WGS84".parse::<Ellipsoid>().unwrap(), Ellipsoid::Wgs84);
        assert_eq!(" grs80 ".parse::<Ellipsoid>().unwrap(), Ellipsoid::Grs80);
        assert!("clarke1866".parse::<Ellipsoid>().is_err());
    }

    #[test]
    fn test_custom_validation() {
        assert!(Ellipsoid::custom(6378137.0, 0.0).is_ok());
        assert!(Ellipsoid::custom(-1.0, 0.0).is_err());
        assert!(Ellipsoid::custom(6378137.0, 1.0).is_err());
        assert!(Ellipsoid::custom(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_deserialize_validates_custom() {
        let ok: Ellipsoid =
            serde_json::from_str(r#"{"custom":{"semi_major_axis_m":6378137.0,"flattening":0.0}}"#).unwrap();
        assert_eq!(ok.semi_major_axis(), 6378137.0);

        let negative = serde_json::from_str::<Ellipsoid>(
            r#"{"custom":{"semi_major_axis_m":-5.0,"flattening":0.0}}"#,
        );
        assert!(negative.is_err());

        let degenerate = serde_json::from_str::<Ellipsoid>(
            r#"{"custom":{"semi_major_axis_m":6378137.0,"flattening":1.0}}"#,
        );
        assert!(degenerate.is_err());
    }

    #[test]
    fn test_serialize_round_trip_named() {
        assert_eq!(serde_json::to_string(&Ellipsoid::Grs80).unwrap(), r#""grs80""#);
        let parsed: Ellipsoid = serde_json::from_str(r#""wgs84""#).unwrap();
        assert_eq!(parsed, Ellipsoid::Wgs84);
    }

    #[test]
    fn test_display() {
        assert_eq!(Ellipsoid::Wgs84.to_string(), "wgs84");
        let custom = Ellipsoid::custom(1.0, 0.0).unwrap();
        assert_eq!(custom.to_string(), "custom (a=1, f=0)");
    }
}
