use reqwest::Url;

use crate::error::GeoError;
use crate::geopoint::Lookup;
use crate::types::{GeocodeResponse, GeocodeStatus};

impl crate::GeoClient {
    // Builds `<endpoint>?sensor=false&address=<query>[&key=<api key>]`, form-encoding the values.
    pub(crate) fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("sensor", "false");
            pairs.append_pair("address", query);
            if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
                pairs.append_pair("key", key);
            }
        }
        url
    }

    // Same URL with the key value masked, for logging.
    pub(crate) fn redacted(&self, url: &Url) -> String {
        let mut masked = url.clone();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| {
                let v = if k == "key" {
                    "REDACTED".to_string()
                } else {
                    v.into_owned()
                };
                (k.into_owned(), v)
            })
            .collect();
        masked.query_pairs_mut().clear().extend_pairs(pairs);
        masked.to_string()
    }

    // Decodes a successful response body into a lookup outcome.
    pub(crate) fn process_body(&self, query: &str, body: &str) -> Result<Lookup, GeoError> {
        let response: GeocodeResponse = serde_json::from_str(body).map_err(|e| {
            log::error!(
                "JSON deserialization failed for geocoding response to '{}'. Error: {}. Body: {}",
                query,
                e,
                body
            );
            GeoError::from_body(e, body)
        })?;

        if !matches!(response.status, GeocodeStatus::Ok | GeocodeStatus::ZeroResults) {
            log::warn!(
                "Geocoding provider returned status {:?} for '{}': {}",
                response.status,
                query,
                response.error_message.as_deref().unwrap_or("no message")
            );
        }

        let lookup = response.into_lookup();
        match &lookup {
            Lookup::Found(location) => log::debug!(
                "Resolved '{}' to '{}' ({}, {})",
                query,
                location.formatted_address,
                location.coordinate.lat,
                location.coordinate.lng
            ),
            Lookup::NotFound => log::warn!("No geocoding results for '{}'", query),
        }
        Ok(lookup)
    }
}
