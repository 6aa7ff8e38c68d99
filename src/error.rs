// src/error.rs
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("URL parsing failed: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Failed to decode geocoding response: {0}")]
    Decode(String),

    #[error("No geocoding results for \"{0}\"")]
    NotFound(String),

    #[error("Geocoding lookups did not complete within {0:?}")]
    Timeout(Duration),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid distance unit: {0} (expected \"km\" or \"miles\")")]
    InvalidUnit(String),

    #[error("Lookup task failed: {0}")]
    TaskFailed(String),
}

impl GeoError {
    /// Builds a `Decode` error from a serde failure, keeping a short snippet of the body
    /// so truncated or HTML responses are recognisable in logs.
    pub(crate) fn from_body(err: serde_json::Error, body: &str) -> Self {
        let snippet: String = body.chars().take(100).collect();
        GeoError::Decode(format!("{}. Body: {}", err, snippet))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GeoError::NotFound(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, GeoError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, GeoError::Decode(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, GeoError::Timeout(_))
    }
}
