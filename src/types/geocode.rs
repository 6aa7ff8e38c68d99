// src/types/geocode.rs

use serde::{Deserialize, Serialize};

use super::common::{AddressComponent, Geometry};
use crate::geopoint::{Lookup, ResolvedLocation};

/// Status codes reported in the geocoding envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeocodeStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ZERO_RESULTS")]
    ZeroResults,
    #[serde(rename = "OVER_DAILY_LIMIT")]
    OverDailyLimit,
    #[serde(rename = "OVER_QUERY_LIMIT")]
    OverQueryLimit,
    #[serde(rename = "REQUEST_DENIED")]
    RequestDenied,
    #[serde(rename = "INVALID_REQUEST")]
    InvalidRequest,
    #[serde(rename = "UNKNOWN_ERROR")]
    UnknownError,
    #[serde(other)]
    Other,
}

/// One candidate match for a query.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

impl From<GeocodeResult> for ResolvedLocation {
    fn from(result: GeocodeResult) -> Self {
        ResolvedLocation::new(result.geometry.location.into(), result.formatted_address)
    }
}

/// The response envelope: a status and the provider-ranked list of candidates.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeocodeResponse {
    pub status: GeocodeStatus,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl GeocodeResponse {
    /// Takes the provider's top-ranked candidate. No further disambiguation is done.
    pub fn into_lookup(self) -> Lookup {
        match self.results.into_iter().next() {
            Some(first) => Lookup::Found(first.into()),
            None => Lookup::NotFound,
        }
    }
}
