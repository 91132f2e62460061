//! Cache configuration.

use serde::{Deserialize, Serialize};

use crate::cache::MokaCacheConfig;

/// In-memory cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Upper bound on cached bytes, in megabytes
    #[serde(default = "default_max_capacity_mb")]
    pub max_capacity_mb: u64,
}

const fn default_max_capacity_mb() -> u64 {
    64
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity_mb: default_max_capacity_mb(),
        }
    }
}

impl CacheConfig {
    /// Settings for the Moka cache adapter
    #[must_use]
    pub const fn to_moka_config(&self) -> MokaCacheConfig {
        MokaCacheConfig {
            max_capacity_mb: self.max_capacity_mb,
        }
    }
}
