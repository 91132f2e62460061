//! Weather service
//!
//! Cache-aside, read-through lookup of current weather by location.

use std::{fmt, sync::Arc, time::Duration};

use domain::WeatherRecord;
use tracing::{debug, instrument, warn};

use crate::ports::{CachePort, CachePortExt, WeatherError, WeatherPort, ttl};

/// Resolves a location to its current weather
///
/// The shared cache is probed first under the raw location string. On a miss
/// the weather port is consulted once and the result is written back with a
/// fixed TTL. Cache failures in either direction are logged and absorbed:
/// they never fail a lookup.
pub struct WeatherService {
    cache: Arc<dyn CachePort>,
    weather_port: Arc<dyn WeatherPort>,
    ttl: Duration,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService")
            .field("cache", &self.cache)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service with the default one hour TTL
    pub fn new(cache: Arc<dyn CachePort>, weather_port: Arc<dyn WeatherPort>) -> Self {
        Self {
            cache,
            weather_port,
            ttl: ttl::WEATHER,
        }
    }

    /// Override the TTL of cache entries written by this service
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// TTL applied to cache entries
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get the current weather for a location
    ///
    /// Only fetch and decode failures of the weather source are returned.
    #[instrument(skip(self))]
    pub async fn get(&self, location: &str) -> Result<WeatherRecord, WeatherError> {
        let cached: Result<Option<WeatherRecord>, _> = self.cache.get(location).await;
        match cached {
            Ok(Some(record)) => {
                debug!("Weather served from cache");
                return Ok(record);
            },
            Ok(None) => debug!("Weather not cached"),
            Err(e) => {
                warn!(error = %e, "could not retrieve weather from cache");
            },
        }

        let record = self.weather_port.fetch_current(location).await?;

        if let Err(e) = self.cache.set(location, &record, self.ttl).await {
            warn!(error = %e, "could not cache weather");
        }

        Ok(record)
    }
}
