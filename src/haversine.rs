// src/haversine.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::geopoint::Coordinate;

/// Mean radius of the spherical Earth model, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Miles per kilometer.
pub const KM_TO_MILES: f64 = 0.621371192;

/// Unit in which a distance is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "miles",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "km" => Ok(DistanceUnit::Kilometers),
            "miles" => Ok(DistanceUnit::Miles),
            other => Err(GeoError::InvalidUnit(other.to_string())),
        }
    }
}

pub fn km_to_miles(km: f64) -> f64 {
    km * KM_TO_MILES
}

/// Great-circle distance between two coordinates using the haversine formula.
///
/// `a` is clamped to `[0, 1]` before taking square roots: for (near-)identical or antipodal
/// points rounding can push it just outside that range, and `sqrt(1 - a)` would be NaN.
pub fn distance(a: Coordinate, b: Coordinate, unit: DistanceUnit) -> f64 {
    let phi1 = a.lat_radians();
    let phi2 = b.lat_radians();
    let delta_phi = (a.lat - b.lat).to_radians();
    let delta_lambda = (a.lng - b.lng).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    let km = EARTH_RADIUS_KM * c;
    match unit {
        DistanceUnit::Kilometers => km,
        DistanceUnit::Miles => km_to_miles(km),
    }
}
