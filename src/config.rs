use std::env;
use std::time::Duration;

use crate::error::GeoError;

/// Default geocoding endpoint.
pub const GOOGLE_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_ENDPOINT: &str = "GEOCODING_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "GEOCODING_TIMEOUT_SECS";

/// Settings used to build a [`crate::GeoClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Geocoding endpoint URL. Query parameters are appended per request.
    pub endpoint: String,
    /// Optional API key. An empty key is treated as absent.
    pub api_key: Option<String>,
    /// Deadline applied to a pair of lookups when the caller does not give one.
    pub lookup_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: GOOGLE_GEOCODE_ENDPOINT.to_string(),
            api_key: None,
            lookup_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Reads `GOOGLE_API_KEY`, `GEOCODING_ENDPOINT` and `GEOCODING_TIMEOUT_SECS`.
    ///
    /// Unset or empty variables fall back to the defaults.
    ///
    /// # Errors
    /// Returns `GeoError::InvalidInput` if the timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self, GeoError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, GeoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = ClientConfig::default();
        if let Some(endpoint) = non_empty(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }
        config.api_key = non_empty(ENV_API_KEY);
        if let Some(raw) = non_empty(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                GeoError::InvalidInput(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
            config.lookup_timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.is_empty());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.lookup_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.endpoint, GOOGLE_GEOCODE_ENDPOINT);
    }

    #[test]
    fn reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "abc123"),
            (ENV_ENDPOINT, "http://127.0.0.1:9999/geocode"),
            (ENV_TIMEOUT_SECS, " 15 "),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.endpoint, "http://127.0.0.1:9999/geocode");
        assert_eq!(config.lookup_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn empty_api_key_is_absent() {
        let config = ClientConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "")])).unwrap();
        assert_eq!(config.api_key, None);
        let config = ClientConfig::default().with_api_key(Some(String::new()));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let result = ClientConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")]));
        assert!(matches!(result, Err(GeoError::InvalidInput(_))));
    }
}
