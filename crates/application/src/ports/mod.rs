//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod cache_port;
mod event_store;
mod weather_port;

pub use cache_port::{CachePort, CachePortExt, CacheStats, ttl};
#[cfg(test)]
pub use event_store::MockEventStore;
pub use event_store::EventStore;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{WeatherError, WeatherPort};
