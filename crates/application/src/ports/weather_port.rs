//! Weather service port
//!
//! Defines the interface to the authoritative weather source consulted on a
//! cache miss.

use async_trait::async_trait;
use domain::WeatherRecord;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Reasons a weather lookup can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The weather API could not be reached
    #[error("could not get weather: {0}")]
    FetchFailed(String),

    /// The response body did not have the expected shape
    #[error("could not decode weather: {0}")]
    DecodeFailed(String),

    /// The weather API reported an error message (e.g. unknown city)
    #[error("no weather found: {0}")]
    Upstream(String),

    /// The weather API answered without any conditions
    #[error("no weather found")]
    NoWeatherFound,
}

/// Port for fetching current conditions from the weather source
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current conditions for a free-text location
    ///
    /// The returned record already carries an expanded icon URL. A single
    /// attempt is made; there are no retries.
    async fn fetch_current(&self, location: &str) -> Result<WeatherRecord, WeatherError>;
}
