//! Weather API wire models
//!
//! Response shape of the OpenWeatherMap current weather endpoint, reduced to
//! the fields the client reads.

use serde::{Deserialize, Deserializer};

/// Body of a current weather response
///
/// On success `weather` holds one or more conditions and `message` is absent.
/// On failure (e.g. unknown city) `message` is set and `weather` may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiResponse {
    /// Observed conditions, most significant first
    #[serde(default, deserialize_with = "null_as_default")]
    pub weather: Vec<ApiCondition>,
    /// Error message reported by the API
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

/// A single weather condition
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiCondition {
    /// Human-readable description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Icon code (e.g. "10d")
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
}

/// Read an explicit JSON `null` as the type's empty value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_success_body() {
        let body = r#"{
            "coord": {"lon": 2.35, "lat": 48.85},
            "weather": [
                {"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"},
                {"id": 701, "main": "Mist", "description": "mist", "icon": "50d"}
            ],
            "name": "Paris",
            "cod": 200
        }"#;

        let parsed: ApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.weather.len(), 2);
        assert_eq!(parsed.weather[0].description, "light rain");
        assert_eq!(parsed.weather[0].icon, "10d");
        assert!(parsed.message.is_empty());
    }

    #[test]
    fn deserializes_error_body() {
        let body = r#"{"cod": "404", "message": "city not found"}"#;

        let parsed: ApiResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.weather.is_empty());
        assert_eq!(parsed.message, "city not found");
    }

    #[test]
    fn rejects_wrong_types() {
        let body = r#"{"weather": "sunny"}"#;
        assert!(serde_json::from_str::<ApiResponse>(body).is_err());
    }

    #[test]
    fn null_fields_read_as_empty() {
        let body = r#"{"message": null, "weather": [{"description": null, "icon": null}]}"#;

        let parsed: ApiResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.message.is_empty());
        assert_eq!(parsed.weather.len(), 1);
        assert!(parsed.weather[0].description.is_empty());
        assert!(parsed.weather[0].icon.is_empty());

        let parsed: ApiResponse = serde_json::from_str(r#"{"weather": null}"#).unwrap();
        assert!(parsed.weather.is_empty());
    }
}
