//! Weather adapter - Implements WeatherPort using integration_weather

use application::{
    error::ApplicationError,
    ports::{WeatherError, WeatherPort},
};
use async_trait::async_trait;
use domain::WeatherRecord;
use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherClientError, WeatherConfig};
use tracing::{debug, instrument};

/// Adapter for weather lookups using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to port error
    fn map_error(err: WeatherClientError) -> WeatherError {
        match err {
            WeatherClientError::ConnectionFailed(e) | WeatherClientError::RequestFailed(e) => {
                WeatherError::FetchFailed(e)
            },
            WeatherClientError::ParseError(e) => WeatherError::DecodeFailed(e),
            WeatherClientError::Api(message) => WeatherError::Upstream(message),
            WeatherClientError::NoConditions => WeatherError::NoWeatherFound,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn fetch_current(&self, location: &str) -> Result<WeatherRecord, WeatherError> {
        let result = self
            .client
            .current_weather(location)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(record) => {
                debug!(description = %record.description, "Retrieved current weather");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result
    }
}
