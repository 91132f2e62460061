//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the OpenWeatherMap adapter, the in-memory cache and event store,
//! configuration loading and logging setup.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use cache::{MokaCache, MokaCacheConfig};
pub use config::{AppConfig, CacheConfig, EventsConfig, LogConfig, LogFormat, WeatherAppConfig};
pub use persistence::InMemoryEventStore;
pub use telemetry::{TelemetryError, init_tracing};
