//! Event service
//!
//! Lists upcoming events enriched with weather, and records new events.

use std::{fmt, sync::Arc};

use chrono::NaiveDate;
use domain::{DomainError, Event, parse_event_date};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{error::ApplicationError, ports::EventStore, services::WeatherService};

/// Default number of events returned by a listing
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Message returned when writes are blocked
const READ_ONLY_MESSAGE: &str = "this is a read only instance, sorry";

/// Event submitted by a client, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    /// Event title (required)
    #[serde(default)]
    pub title: String,
    /// Day of the event, `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    /// Place name (required)
    #[serde(default)]
    pub location: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl NewEvent {
    /// Validate and convert into a domain event
    pub fn into_event(self) -> Result<Event, ApplicationError> {
        if self.title.is_empty() {
            return Err(DomainError::validation("title can't be empty").into());
        }
        if self.location.is_empty() {
            return Err(DomainError::validation("location is required").into());
        }
        let date = parse_event_date(&self.date)?;
        Ok(Event::new(
            self.title,
            date,
            self.location,
            self.description,
        )?)
    }
}

/// Settings for the event service
#[derive(Debug, Clone, Copy)]
pub struct EventServiceConfig {
    /// Reject every write
    pub block_writes: bool,
    /// Maximum number of events per listing
    pub upcoming_limit: usize,
}

impl Default for EventServiceConfig {
    fn default() -> Self {
        Self {
            block_writes: false,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
        }
    }
}

/// Event service for listing and adding events
pub struct EventService {
    store: Arc<dyn EventStore>,
    weather: Arc<WeatherService>,
    config: EventServiceConfig,
}

impl fmt::Debug for EventService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl EventService {
    /// Create a new event service
    pub fn new(
        store: Arc<dyn EventStore>,
        weather: Arc<WeatherService>,
        config: EventServiceConfig,
    ) -> Self {
        Self {
            store,
            weather,
            config,
        }
    }

    /// List the next events after `today`, each with its weather when available
    ///
    /// Weather lookups run one after another. A failed lookup leaves that
    /// event without weather and the listing continues.
    #[instrument(skip(self))]
    pub async fn list_upcoming(&self, today: NaiveDate) -> Result<Vec<Event>, ApplicationError> {
        let events = self
            .store
            .list_upcoming(today, self.config.upcoming_limit)
            .await?;

        let mut listed = Vec::with_capacity(events.len());
        for event in events {
            match self.weather.get(&event.location).await {
                Ok(weather) => listed.push(event.with_weather(weather)),
                Err(e) => {
                    warn!(location = %event.location, error = %e, "fetching weather failed");
                    listed.push(event);
                },
            }
        }

        Ok(listed)
    }

    /// Validate and store a new event
    #[instrument(skip(self, new_event), fields(title = %new_event.title))]
    pub async fn add_event(&self, new_event: NewEvent) -> Result<Event, ApplicationError> {
        if self.config.block_writes {
            return Err(ApplicationError::NotAuthorized(READ_ONLY_MESSAGE.to_string()));
        }

        let event = new_event.into_event()?;
        self.store.append(event.clone()).await?;
        info!(date = %event.date, location = %event.location, "Event added");
        Ok(event)
    }
}
