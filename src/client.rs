// src/client.rs

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Url};

use crate::config::ClientConfig;
use crate::error::GeoError;
use crate::geopoint::Lookup;

/// Client for the geocoding endpoint.
///
/// `GeoClient` holds the endpoint URL, the optional API key and a shared `reqwest::Client`.
/// It is cheap to clone: clones share the same connection pool, which is how the two
/// concurrent lookups of [`GeoClient::get_distance`] each get their own handle.
///
/// ```rust,no_run
/// use city_distance::{DistanceUnit, GeoClient, GeoError};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), GeoError> {
/// let client = GeoClient::new(std::env::var("GOOGLE_API_KEY").ok().as_deref())?;
/// let km = client.get_distance("London", "Paris", DistanceUnit::Kilometers).await?;
/// println!("{:.6}", km);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GeoClient {
    pub(crate) endpoint: Url,
    pub(crate) api_key: Option<String>,
    pub(crate) lookup_timeout: Option<Duration>,
    pub(crate) http_client: Client,
}

impl fmt::Debug for GeoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("lookup_timeout", &self.lookup_timeout)
            .finish()
    }
}

impl GeoClient {
    /// Creates a client for the default endpoint.
    ///
    /// An empty `api_key` is treated the same as `None`: requests are sent unauthenticated and
    /// are subject to the provider's anonymous rate limits.
    pub fn new(api_key: Option<&str>) -> Result<Self, GeoError> {
        Self::from_config(ClientConfig::default().with_api_key(api_key.map(str::to_string)))
    }

    /// Creates a client from a [`ClientConfig`].
    ///
    /// # Errors
    /// Returns `GeoError::UrlParse` if the endpoint is not a valid URL, or
    /// `GeoError::InvalidInput` if it cannot carry query parameters.
    pub fn from_config(config: ClientConfig) -> Result<Self, GeoError> {
        let endpoint = Url::parse(&config.endpoint)?;
        if endpoint.cannot_be_a_base() || !matches!(endpoint.scheme(), "http" | "https") {
            return Err(GeoError::InvalidInput(format!(
                "Geocoding endpoint '{}' must be an http(s) URL",
                config.endpoint
            )));
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("city-distance/", env!("CARGO_PKG_VERSION"))),
        );

        let http_client = Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(GeoError::Transport)?;

        let api_key = config.api_key.filter(|k| !k.is_empty());

        log::debug!(
            "GeoClient initialized with endpoint: {} (api key {})",
            endpoint,
            if api_key.is_some() { "set" } else { "not set" }
        );

        Ok(Self {
            endpoint,
            api_key,
            lookup_timeout: config.lookup_timeout,
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout
    }

    /// Resolves a free-text place name to the provider's best match.
    ///
    /// Issues exactly one GET request; nothing is retried or cached.
    ///
    /// # Returns
    /// `Lookup::Found` with the first candidate's coordinate and formatted address, or
    /// `Lookup::NotFound` when the provider returned no candidates.
    ///
    /// # Errors
    /// * `GeoError::InvalidInput` if `query` is empty or whitespace.
    /// * `GeoError::Transport` on connection, DNS or timeout failures and non-success HTTP
    ///   statuses.
    /// * `GeoError::Decode` if the body is truncated or is not a geocoding envelope.
    pub async fn resolve(&self, query: &str) -> Result<Lookup, GeoError> {
        if query.trim().is_empty() {
            return Err(GeoError::InvalidInput(
                "Geocode query cannot be empty.".to_string(),
            ));
        }

        let url = self.request_url(query);
        log::debug!("Geocoding request: GET {}", self.redacted(&url));

        let response = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?;
        // The status line arrived, so a body cut short mid-transfer is a bad response.
        let body = response.text().await.map_err(|e| {
            log::error!("Failed to read geocoding response body for '{}': {}", query, e);
            GeoError::Decode(format!("incomplete response body: {}", e))
        })?;

        self.process_body(query, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_built_empty_key_is_dropped() {
        let config = ClientConfig {
            endpoint: "http://127.0.0.1:1/geocode/json".to_string(),
            api_key: Some(String::new()),
            lookup_timeout: None,
        };
        let client = GeoClient::from_config(config).unwrap();
        assert!(!client.has_api_key());
        assert!(!client.request_url("Berlin").as_str().contains("key="));
    }

    #[test]
    fn debug_output_hides_key() {
        let client = GeoClient::new(Some("top-secret")).unwrap();
        assert!(client.has_api_key());
        let debug = format!("{:?}", client);
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
