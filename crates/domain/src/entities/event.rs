//! Event entity - A dated happening at a named place

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::WeatherRecord};

/// Accepted format for event dates
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// An event listed by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event title
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Day the event takes place
    pub date: NaiveDate,
    /// Free-text place name, also used as the weather lookup key
    pub location: String,
    /// Weather at the location, attached when listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherRecord>,
}

impl Event {
    /// Create a new event
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the title or location is empty.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let location = location.into();

        if title.is_empty() {
            return Err(DomainError::validation("title can't be empty"));
        }
        if location.is_empty() {
            return Err(DomainError::validation("location is required"));
        }

        Ok(Self {
            title,
            description: description.into(),
            date,
            location,
            weather: None,
        })
    }

    /// Whether the event takes place strictly after `day`
    #[must_use]
    pub fn is_after(&self, day: NaiveDate) -> bool {
        self.date > day
    }

    /// Attach weather conditions
    #[must_use]
    pub fn with_weather(mut self, weather: WeatherRecord) -> Self {
        self.weather = Some(weather);
        self
    }
}

/// Parse an event date in `YYYY-MM-DD` form
///
/// # Errors
///
/// Returns `DomainError::InvalidDateTime` for any other format.
pub fn parse_event_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s, EVENT_DATE_FORMAT)
        .map_err(|e| DomainError::InvalidDateTime(format!("{s:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_event_date(s).unwrap()
    }

    #[test]
    fn new_creates_event_without_weather() {
        let event = Event::new("Gopher meetup", date("2030-05-01"), "Paris", "talks").unwrap();
        assert_eq!(event.title, "Gopher meetup");
        assert_eq!(event.location, "Paris");
        assert!(event.weather.is_none());
    }

    #[test]
    fn new_rejects_empty_title() {
        let err = Event::new("", date("2030-05-01"), "Paris", "").unwrap_err();
        assert_eq!(err.to_string(), "title can't be empty");
    }

    #[test]
    fn new_rejects_empty_location() {
        let err = Event::new("Meetup", date("2030-05-01"), "", "").unwrap_err();
        assert_eq!(err.to_string(), "location is required");
    }

    #[test]
    fn parse_event_date_accepts_iso_day() {
        let d = parse_event_date("2024-02-29").unwrap();
        assert_eq!(d.to_string(), "2024-02-29");
    }

    #[test]
    fn parse_event_date_rejects_other_formats() {
        assert!(parse_event_date("29/02/2024").is_err());
        assert!(parse_event_date("2024-02-29T10:00:00Z").is_err());
        assert!(parse_event_date("").is_err());
    }

    #[test]
    fn is_after_is_strict() {
        let event = Event::new("Meetup", date("2030-05-01"), "Paris", "").unwrap();
        assert!(event.is_after(date("2030-04-30")));
        assert!(!event.is_after(date("2030-05-01")));
        assert!(!event.is_after(date("2030-05-02")));
    }

    #[test]
    fn serialization_omits_missing_weather() {
        let event = Event::new("Meetup", date("2030-05-01"), "Paris", "").unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["date"], "2030-05-01");
        assert!(json.get("weather").is_none());

        let json = serde_json::to_value(
            event.with_weather(WeatherRecord::new("clear sky", "http://x/01d.png")),
        )
        .unwrap();
        assert_eq!(json["weather"]["description"], "clear sky");
        assert_eq!(json["weather"]["icon"], "http://x/01d.png");
    }
}
