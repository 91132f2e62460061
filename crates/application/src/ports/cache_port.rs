//! Cache port definition
//!
//! Defines the interface for the shared key-value cache with expiration.
//! The weather lookup reads and writes it; implementations may be in-process
//! (Moka) or a remote backend.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Cache port for storing and retrieving cached values
///
/// Implementations must be safe to share between concurrent callers and
/// honour the TTL passed to each write. Values are raw bytes; callers
/// handle serialization.
///
/// Lookups return a tagged result: `Ok(Some(_))` is a hit, `Ok(None)` is a
/// clean miss (absent or expired), and `Err(_)` is a backend failure.
#[async_trait]
pub trait CachePort: Send + Sync + std::fmt::Debug {
    /// Get a cached value by key
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError>;

    /// Set a cached value with a time-to-live
    ///
    /// If the key already exists, its value and TTL are replaced.
    async fn set_bytes(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), ApplicationError>;

    /// Get cache statistics (hits, misses, size)
    fn stats(&self) -> CacheStats;
}

/// Extension trait for typed cache operations
///
/// Values are stored as JSON. A payload that no longer decodes is reported
/// as a cache error, not as a miss.
#[async_trait]
pub trait CachePortExt: CachePort {
    /// Get a typed value from cache
    async fn get<T>(&self, key: &str) -> Result<Option<T>, ApplicationError>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        match self.get_bytes(key).await? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes).map_err(|e| {
                    ApplicationError::Cache(format!("Cache deserialization error: {e}"))
                })?;
                Ok(Some(value))
            },
            None => Ok(None),
        }
    }

    /// Set a typed value in cache
    async fn set<T>(&self, key: &str, value: &T, ttl: Duration) -> Result<(), ApplicationError>
    where
        T: serde::Serialize + Send + Sync,
    {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| ApplicationError::Cache(format!("Cache serialization error: {e}")))?;
        self.set_bytes(key, bytes, ttl).await
    }
}

// Blanket implementation for all CachePort implementors
impl<T: CachePort + ?Sized> CachePortExt for T {}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries
    pub entries: u64,
}

impl CacheStats {
    /// Calculate the hit rate as a fraction (0.0 - 1.0)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Standard TTL values
pub mod ttl {
    use std::time::Duration;

    /// TTL for current weather conditions (1 hour)
    pub const WEATHER: Duration = Duration::from_secs(60 * 60);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::{Deserialize, Serialize};
    use tokio::sync::Mutex;

    use super::*;

    #[derive(Debug, Default)]
    struct MapCache {
        entries: Mutex<HashMap<String, Vec<u8>>>,
    }

    #[async_trait]
    impl CachePort for MapCache {
        async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
            Ok(self.entries.lock().await.get(key).cloned())
        }

        async fn set_bytes(
            &self,
            key: &str,
            value: Vec<u8>,
            _ttl: Duration,
        ) -> Result<(), ApplicationError> {
            self.entries.lock().await.insert(key.to_string(), value);
            Ok(())
        }

        fn stats(&self) -> CacheStats {
            CacheStats::default()
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
    }

    #[tokio::test]
    async fn typed_set_then_get() {
        let cache = MapCache::default();
        let sample = Sample {
            name: "x".to_string(),
        };
        cache.set("k", &sample, ttl::WEATHER).await.unwrap();
        let back: Option<Sample> = cache.get("k").await.unwrap();
        assert_eq!(back, Some(sample));
    }

    #[tokio::test]
    async fn typed_get_miss_is_none() {
        let cache = MapCache::default();
        let back: Option<Sample> = cache.get("missing").await.unwrap();
        assert!(back.is_none());
    }

    #[tokio::test]
    async fn undecodable_payload_is_cache_error() {
        let cache = MapCache::default();
        cache
            .set_bytes("k", b"not json".to_vec(), ttl::WEATHER)
            .await
            .unwrap();
        let result: Result<Option<Sample>, _> = cache.get("k").await;
        assert!(matches!(result, Err(ApplicationError::Cache(_))));
    }

    #[test]
    fn cache_stats_hit_rate_zero_when_empty() {
        let stats = CacheStats::default();
        assert!(stats.hit_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn cache_stats_hit_rate_calculates_correctly() {
        let stats = CacheStats {
            hits: 75,
            misses: 25,
            entries: 100,
        };
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn weather_ttl_is_one_hour() {
        assert_eq!(ttl::WEATHER, Duration::from_secs(3600));
    }
}
