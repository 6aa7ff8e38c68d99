// src/geopoint.rs

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// A point on the Earth's surface in decimal degrees.
///
/// Coordinates returned by the geocoding provider are trusted as-is; use
/// [`Coordinate::new`] when building one from untrusted input.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Creates a new `Coordinate`.
    ///
    /// # Errors
    /// Returns `GeoError::InvalidInput` if latitude is not between -90 and 90, or longitude is
    /// not between -180 and 180 degrees.
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::InvalidInput(format!(
                "Latitude must be between -90 and 90 degrees, got {}",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::InvalidInput(format!(
                "Longitude must be between -180 and 180 degrees, got {}",
                lng
            )));
        }
        Ok(Coordinate { lat, lng })
    }

    pub fn lat_radians(&self) -> f64 {
        self.lat.to_radians()
    }

    pub fn lng_radians(&self) -> f64 {
        self.lng.to_radians()
    }
}

/// A coordinate together with the provider's canonical address for the query that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub coordinate: Coordinate,
    pub formatted_address: String,
}

impl ResolvedLocation {
    pub fn new(coordinate: Coordinate, formatted_address: impl Into<String>) -> Self {
        ResolvedLocation {
            coordinate,
            formatted_address: formatted_address.into(),
        }
    }
}

/// Outcome of a single geocode call. Transport and decode failures travel in the
/// surrounding `Result`; an empty candidate list is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(ResolvedLocation),
    NotFound,
}

impl Lookup {
    pub fn found(self) -> Option<ResolvedLocation> {
        match self {
            Lookup::Found(location) => Some(location),
            Lookup::NotFound => None,
        }
    }
}
