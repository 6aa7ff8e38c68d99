use serde::{Deserialize, Serialize};

use crate::geopoint::Coordinate;

/// A latitude/longitude pair as the geocoding provider encodes it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Coordinate {
    fn from(value: LatLng) -> Self {
        Coordinate {
            lat: value.lat,
            lng: value.lng,
        }
    }
}

/// A bounding box given by its north-east and south-west corners.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Geometry {
    pub location: LatLng,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Viewport>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}
