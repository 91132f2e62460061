//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `integrations`: OpenWeatherMap client and weather cache TTL
//! - `cache`: in-memory cache sizing
//! - `events`: event listing and write blocking
//! - `logging`: log format and level

mod cache;
mod events;
mod integrations;
mod logging;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use cache::CacheConfig;
pub use events::EventsConfig;
pub use integrations::WeatherAppConfig;
pub use logging::{LogConfig, LogFormat};

/// Prefix of structured environment overrides, e.g. `EVENTS_WEATHER__TIMEOUT_SECS`
pub const ENV_PREFIX: &str = "EVENTS";

/// Legacy variable holding the OpenWeatherMap API key
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Legacy variable that makes the instance read-only when set to `True`
pub const BLOCK_WRITES_VAR: &str = "BLOCK_WRITES";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather lookups
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Cache sizing
    #[serde(default)]
    pub cache: CacheConfig,

    /// Event listing
    #[serde(default)]
    pub events: EventsConfig,

    /// Logging
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from environment and an optional config file
    ///
    /// Sources in increasing precedence: built-in defaults, the config file,
    /// `EVENTS_*` variables, then the legacy `WEATHER_API_KEY` and
    /// `BLOCK_WRITES` variables.
    ///
    /// `file` replaces the default `config.toml` lookup in the working
    /// directory. `vars` replaces the process environment when given.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load_from(
        file: Option<&Path>,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file_source = file.map_or_else(
            || config::File::with_name("config").required(false),
            |path| config::File::from(path).required(true),
        );

        let api_key = lookup(vars.as_ref(), API_KEY_VAR).filter(|key| !key.is_empty());
        let block_writes = lookup(vars.as_ref(), BLOCK_WRITES_VAR)
            .is_some_and(|value| is_truthy(&value))
            .then_some(true);

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("weather.base_url", "http://api.openweathermap.org/data/2.5")?
            .set_default("log.level", "warn")?
            // Load from file if exists
            .add_source(file_source)
            // Override with environment variables (e.g., EVENTS_WEATHER__TIMEOUT_SECS)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            // Legacy variables win over everything else
            .set_override_option("weather.api_key", api_key)?
            .set_override_option("events.block_writes", block_writes)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}

fn lookup(vars: Option<&config::Map<String, String>>, name: &str) -> Option<String> {
    match vars {
        Some(vars) => vars.get(name).cloned(),
        None => std::env::var(name).ok(),
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value, "True" | "true" | "1")
}
