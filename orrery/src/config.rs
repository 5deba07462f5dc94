//! Assistant configuration: endpoints, credentials, timeout, retry policy.
//!
//! Endpoint URLs are consts with per-URL environment overrides so tests can
//! point the fetchers at a local server. Credentials are read from the
//! environment at construction time; the library itself never loads `.env`
//! files (examples do, before building the config).

use std::time::Duration;

use crate::retry::RetryPolicy;

const ISS_URL: &str = "http://api.open-notify.org/iss-now.json";
const ASTROS_URL: &str = "http://api.open-notify.org/astros.json";
const WEATHER_URL: &str = "https://api.weatherapi.com/v1/current.json";
const MARS_WEATHER_URL: &str = "https://api.nasa.gov/insight_weather/";
const APOD_URL: &str = "https://api.nasa.gov/planetary/apod";
const NEO_FEED_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// NASA's public key for unauthenticated, rate-limited access.
const NASA_DEMO_KEY: &str = "DEMO_KEY";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
/// Pause between fetch attempts.
const RETRY_INTERVAL: Duration = Duration::from_secs(2);
/// Attempt ceiling per fetch.
const MAX_ATTEMPTS: usize = 3;

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

/// Configuration for the assistant's external surface.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// ISS position endpoint.
    pub iss_url: String,
    /// Astronaut roster endpoint.
    pub astros_url: String,
    /// Earth weather (current conditions) endpoint.
    pub weather_url: String,
    /// Mars weather (InSight) endpoint.
    pub mars_weather_url: String,
    /// Astronomy Picture of the Day endpoint.
    pub apod_url: String,
    /// Near-Earth-object feed endpoint.
    pub neo_url: String,
    /// Key for the Earth weather service; weather fetches short-circuit
    /// to an error record without one.
    pub weather_api_key: Option<String>,
    /// Key for the NASA services; the public `DEMO_KEY` when unset.
    pub nasa_api_key: String,
    /// Timeout applied to each request attempt.
    pub timeout: Duration,
    /// Retry policy shared by every fetcher.
    pub retry: RetryPolicy,
}

impl AssistantConfig {
    /// Build a config from the environment.
    ///
    /// Reads `WEATHER_API_KEY` and `NASA_API_KEY` (empty values count as
    /// unset), plus per-endpoint URL overrides: `ISS_API_URL`,
    /// `ASTROS_API_URL`, `WEATHER_API_URL`, `MARS_WEATHER_API_URL`,
    /// `APOD_API_URL`, `NEO_API_URL`.
    pub fn from_env() -> Self {
        Self {
            iss_url: env_or("ISS_API_URL", ISS_URL),
            astros_url: env_or("ASTROS_API_URL", ASTROS_URL),
            weather_url: env_or("WEATHER_API_URL", WEATHER_URL),
            mars_weather_url: env_or("MARS_WEATHER_API_URL", MARS_WEATHER_URL),
            apod_url: env_or("APOD_API_URL", APOD_URL),
            neo_url: env_or("NEO_API_URL", NEO_FEED_URL),
            weather_api_key: std::env::var("WEATHER_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            nasa_api_key: std::env::var("NASA_API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| NASA_DEMO_KEY.to_string()),
            ..Self::default()
        }
    }

    /// Set the per-request timeout (builder).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry policy (builder).
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            iss_url: ISS_URL.to_string(),
            astros_url: ASTROS_URL.to_string(),
            weather_url: WEATHER_URL.to_string(),
            mars_weather_url: MARS_WEATHER_URL.to_string(),
            apod_url: APOD_URL.to_string(),
            neo_url: NEO_FEED_URL.to_string(),
            weather_api_key: None,
            nasa_api_key: NASA_DEMO_KEY.to_string(),
            timeout: REQUEST_TIMEOUT,
            retry: RetryPolicy::fixed(MAX_ATTEMPTS, RETRY_INTERVAL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: defaults carry the real endpoints and the 3x2s retry policy.
    #[test]
    fn default_config_uses_real_endpoints_and_retry() {
        let config = AssistantConfig::default();
        assert!(config.iss_url.contains("open-notify.org"));
        assert!(config.neo_url.contains("api.nasa.gov"));
        assert_eq!(config.nasa_api_key, "DEMO_KEY");
        assert!(config.weather_api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.retry.attempts(), 3);
        assert_eq!(config.retry.delay(), Duration::from_secs(2));
    }

    /// **Scenario**: URL overrides and keys are picked up from the environment.
    #[test]
    fn from_env_reads_overrides_and_keys() {
        temp_env::with_vars(
            [
                ("ISS_API_URL", Some("http://127.0.0.1:9000/iss")),
                ("WEATHER_API_KEY", Some("wkey")),
                ("NASA_API_KEY", Some("nkey")),
            ],
            || {
                let config = AssistantConfig::from_env();
                assert_eq!(config.iss_url, "http://127.0.0.1:9000/iss");
                assert_eq!(config.weather_api_key.as_deref(), Some("wkey"));
                assert_eq!(config.nasa_api_key, "nkey");
                assert!(config.astros_url.contains("open-notify.org"));
            },
        );
    }

    /// **Scenario**: empty key values count as unset.
    #[test]
    fn from_env_treats_empty_keys_as_unset() {
        temp_env::with_vars(
            [
                ("WEATHER_API_KEY", Some("")),
                ("NASA_API_KEY", Some("")),
            ],
            || {
                let config = AssistantConfig::from_env();
                assert!(config.weather_api_key.is_none());
                assert_eq!(config.nasa_api_key, "DEMO_KEY");
            },
        );
    }
}
