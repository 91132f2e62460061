//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap current weather API
//! (<https://openweathermap.org/current>). Resolves a free-text location to
//! a description and an icon URL.

pub mod client;
mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherClientError, WeatherConfig};
