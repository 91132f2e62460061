//! Weather record value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current weather conditions for a location
///
/// The icon is always a fully-qualified URL. Records are built from the
/// upstream icon code exactly once, via [`WeatherRecord::from_icon_code`],
/// before they are cached or handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Short human-readable description (e.g. "light rain")
    pub description: String,
    /// Icon image URL
    #[serde(rename = "icon")]
    pub icon_url: String,
}

impl WeatherRecord {
    /// Placeholder replaced by the icon code in an icon URL template
    pub const ICON_PLACEHOLDER: &'static str = "{icon}";

    /// Create a record from an already expanded icon URL
    pub fn new(description: impl Into<String>, icon_url: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            icon_url: icon_url.into(),
        }
    }

    /// Create a record by expanding an upstream icon code into a URL
    ///
    /// Every occurrence of `{icon}` in `template` is replaced by `icon_code`.
    pub fn from_icon_code(
        description: impl Into<String>,
        icon_code: &str,
        template: &str,
    ) -> Self {
        Self::new(
            description,
            template.replace(Self::ICON_PLACEHOLDER, icon_code),
        )
    }
}

impl fmt::Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.icon_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "http://openweathermap.org/img/w/{icon}.png";

    #[test]
    fn from_icon_code_expands_template() {
        let record = WeatherRecord::from_icon_code("light rain", "10d", TEMPLATE);
        assert_eq!(record.icon_url, "http://openweathermap.org/img/w/10d.png");
        assert_eq!(record.description, "light rain");
    }

    #[test]
    fn from_icon_code_is_deterministic() {
        for code in ["01d", "02n", "50d", "x"] {
            let a = WeatherRecord::from_icon_code("sky", code, TEMPLATE);
            let b = WeatherRecord::from_icon_code("sky", code, TEMPLATE);
            assert_eq!(a, b);
            assert_eq!(a.icon_url, format!("http://openweathermap.org/img/w/{code}.png"));
        }
    }

    #[test]
    fn serializes_icon_url_as_icon() {
        let record = WeatherRecord::new("clear sky", "http://example.com/01d.png");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["description"], "clear sky");
        assert_eq!(json["icon"], "http://example.com/01d.png");
        assert!(json.get("icon_url").is_none());
    }

    #[test]
    fn json_round_trip_preserves_expanded_url() {
        let record = WeatherRecord::from_icon_code("mist", "50n", TEMPLATE);
        let bytes = serde_json::to_vec(&record).unwrap();
        let back: WeatherRecord = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn display_includes_description_and_icon() {
        let record = WeatherRecord::new("snow", "http://example.com/13d.png");
        assert_eq!(record.to_string(), "snow (http://example.com/13d.png)");
    }
}
