//! Event listing configuration.

use application::services::{DEFAULT_UPCOMING_LIMIT, EventServiceConfig};
use serde::{Deserialize, Serialize};

/// Event service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Reject every new event (read-only instance)
    #[serde(default)]
    pub block_writes: bool,

    /// Maximum number of events per upcoming listing
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
}

const fn default_upcoming_limit() -> usize {
    DEFAULT_UPCOMING_LIMIT
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            block_writes: false,
            upcoming_limit: default_upcoming_limit(),
        }
    }
}

impl EventsConfig {
    /// Settings for the event service
    #[must_use]
    pub const fn to_service_config(&self) -> EventServiceConfig {
        EventServiceConfig {
            block_writes: self.block_writes,
            upcoming_limit: self.upcoming_limit,
        }
    }
}
