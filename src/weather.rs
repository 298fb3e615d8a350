//! Weather lookup against the wttr.in JSON endpoint
//!
//! One call builds `{base_url}/{location}?format=j1`, sends a single GET with
//! the configured user agent and timeout, and hands back the decoded body.
//! Failures are returned to the caller as-is; nothing is retried or cached.

use crate::config::WeatherConfig;
use crate::models::{LocationQuery, WeatherPayload};
use crate::{Result, WeatherServerError};
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Query suffix selecting the wttr.in JSON format
pub const FORMAT_QUERY: &str = "?format=j1";

/// Client for the upstream weather service
#[derive(Debug, Clone)]
pub struct WeatherLookup {
    /// HTTP client carrying the timeout and user agent
    client: Client,
    /// Base URL without a trailing slash
    base_url: String,
    timeout: Duration,
}

impl WeatherLookup {
    /// Create a new lookup client from the weather settings
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                WeatherServerError::config(format!("Failed to create HTTP client: {e}"))
            })?;

        let base_url = config
            .base_url
            .strip_suffix('/')
            .unwrap_or(&config.base_url)
            .to_string();

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// URL requested for `location`; the location is inserted verbatim
    #[must_use]
    pub fn request_url(&self, location: &LocationQuery) -> String {
        format!("{}/{}{}", self.base_url, location.as_str(), FORMAT_QUERY)
    }

    /// Fetch the weather document for a location
    #[instrument(skip_all, fields(location = %location))]
    pub async fn fetch(&self, location: &LocationQuery) -> Result<WeatherPayload> {
        let url = self.request_url(location);
        debug!("Weather API request URL: {}", url);
        let start_time = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!(
            "HTTP response received: {} in {:.3}s",
            status,
            start_time.elapsed().as_secs_f64()
        );

        if !status.is_success() {
            warn!("Weather lookup for '{}' failed with HTTP {}", location, status);
            return Err(WeatherServerError::upstream_status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse weather response for '{}': {}", location, e);
            WeatherServerError::decode(e.to_string())
        })?;

        info!(
            "Retrieved weather for '{}' in {:.3}s ({} bytes)",
            location,
            start_time.elapsed().as_secs_f64(),
            body.len()
        );

        Ok(WeatherPayload::new(value))
    }

    /// Fetch the weather for `location` and return the payload as JSON text
    pub async fn get_weather_info(&self, location: &str) -> Result<String> {
        let payload = self.fetch(&LocationQuery::from(location)).await?;
        Ok(payload.to_text())
    }

    fn transport_error(&self, err: reqwest::Error) -> WeatherServerError {
        if err.is_timeout() {
            warn!("Weather request timed out after {}s", self.timeout.as_secs());
            WeatherServerError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else if err.is_builder() {
            WeatherServerError::network(format!("Invalid request URL: {err}"))
        } else {
            warn!("Network error talking to weather service: {}", err);
            WeatherServerError::network(err.to_string())
        }
    }
}
