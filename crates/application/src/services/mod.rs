//! Application services - Use case implementations

mod event_service;
mod weather_service;

pub use event_service::{DEFAULT_UPCOMING_LIMIT, EventService, EventServiceConfig, NewEvent};
pub use weather_service::WeatherService;
