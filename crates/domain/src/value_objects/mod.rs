//! Value Objects - Immutable, identity-less domain primitives

mod weather_record;

pub use weather_record::WeatherRecord;
