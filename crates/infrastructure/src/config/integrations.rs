//! Integration configuration: OpenWeatherMap.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Icon URL template, `{icon}` is replaced by the icon code
    #[serde(default = "default_icon_url_template")]
    pub icon_url_template: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default = "default_api_key", skip_serializing)]
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,

    /// How long a looked-up record stays cached, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field("icon_url_template", &self.icon_url_template)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .finish()
    }
}

fn default_weather_base_url() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}

fn default_icon_url_template() -> String {
    "http://openweathermap.org/img/w/{icon}.png".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

const fn default_weather_timeout() -> u64 {
    30
}

const fn default_cache_ttl_secs() -> u64 {
    60 * 60 // 1 hour
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            icon_url_template: default_icon_url_template(),
            api_key: default_api_key(),
            timeout_secs: default_weather_timeout(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl WeatherAppConfig {
    /// Convert to `integration_weather`'s `WeatherConfig`
    #[must_use]
    pub fn to_client_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            base_url: self.base_url.clone(),
            icon_url_template: self.icon_url_template.clone(),
            api_key: self.api_key.expose_secret().to_string(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Get the cache TTL as a Duration
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Whether an API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }
}
