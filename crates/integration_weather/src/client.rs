//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap current weather API.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use domain::WeatherRecord;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::ApiResponse;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherClientError {
    /// The HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The body is not a weather response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The API answered with an error message
    #[error("API error: {0}")]
    Api(String),

    /// The API answered without any weather conditions
    #[error("No weather conditions in response")]
    NoConditions,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <http://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Icon URL template, `{icon}` is replaced by the icon code
    #[serde(default = "default_icon_url_template")]
    pub icon_url_template: String,

    /// API key sent as `APPID`
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}

fn default_icon_url_template() -> String {
    "http://openweathermap.org/img/w/{icon}.png".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            icon_url_template: default_icon_url_template(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("icon_url_template", &self.icon_url_template)
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    "<unset>"
                } else {
                    "[REDACTED]"
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather client trait for fetching current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a free-text location
    ///
    /// The returned record's icon is already expanded into a URL.
    async fn current_weather(&self, location: &str) -> Result<WeatherRecord, WeatherClientError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherClientError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Current weather endpoint
    fn weather_url(&self) -> String {
        format!("{}/weather", self.config.base_url.trim_end_matches('/'))
    }

    /// Turn a response body into a record
    ///
    /// An API message wins over any conditions present. Only the first
    /// condition is used.
    fn parse_body(
        body: &[u8],
        icon_url_template: &str,
    ) -> Result<WeatherRecord, WeatherClientError> {
        let data: ApiResponse = serde_json::from_slice(body)
            .map_err(|e| WeatherClientError::ParseError(e.to_string()))?;

        if !data.message.is_empty() {
            return Err(WeatherClientError::Api(data.message));
        }

        let first = data
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherClientError::NoConditions)?;

        Ok(WeatherRecord::from_icon_code(
            first.description,
            &first.icon,
            icon_url_template,
        ))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self))]
    async fn current_weather(&self, location: &str) -> Result<WeatherRecord, WeatherClientError> {
        let url = self.weather_url();
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[("APPID", self.config.api_key.as_str()), ("q", location)])
            .send()
            .await
            .map_err(|e| WeatherClientError::RequestFailed(e.to_string()))?;

        // Error bodies carry the message, so the status is not checked here.
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherClientError::RequestFailed(e.to_string()))?;
        debug!(status = %status, bytes = body.len(), "Weather response received");

        Self::parse_body(&body, &self.config.icon_url_template)
    }
}
