//! In-memory event store
//!
//! Keeps events in insertion order behind a read-write lock. Contents are
//! lost when the process exits.

use application::{error::ApplicationError, ports::EventStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::Event;
use parking_lot::RwLock;
use tracing::{debug, instrument};

/// Event store backed by a `Vec` in memory
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    #[instrument(skip(self))]
    async fn list_upcoming(
        &self,
        after: NaiveDate,
        limit: usize,
    ) -> Result<Vec<Event>, ApplicationError> {
        let mut upcoming: Vec<Event> = self
            .events
            .read()
            .iter()
            .filter(|event| event.is_after(after))
            .cloned()
            .collect();

        // Stable sort keeps insertion order for events on the same day
        upcoming.sort_by_key(|event| event.date);
        upcoming.truncate(limit);

        debug!(count = upcoming.len(), "Listed upcoming events");
        Ok(upcoming)
    }

    #[instrument(skip(self, event), fields(title = %event.title))]
    async fn append(&self, event: Event) -> Result<(), ApplicationError> {
        self.events.write().push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use domain::parse_event_date;

    use super::*;

    fn day(s: &str) -> NaiveDate {
        parse_event_date(s).unwrap()
    }

    fn event(title: &str, date: &str) -> Event {
        Event::new(title, day(date), "Paris", "").unwrap()
    }

    fn store_with(events: Vec<Event>) -> InMemoryEventStore {
        InMemoryEventStore {
            events: RwLock::new(events),
        }
    }

    #[tokio::test]
    async fn lists_only_strictly_later_events_in_date_order() {
        let store = store_with(vec![
            event("Later", "2030-05-03"),
            event("Past", "2030-04-30"),
            event("Today", "2030-05-01"),
            event("Soon", "2030-05-02"),
        ]);

        let events = store.list_upcoming(day("2030-05-01"), 5).await.unwrap();

        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Soon", "Later"]);
    }

    #[tokio::test]
    async fn respects_limit() {
        let store = store_with(
            (1..=9)
                .map(|d| event(&format!("E{d}"), &format!("2030-06-0{d}")))
                .collect(),
        );

        let events = store.list_upcoming(day("2030-01-01"), 5).await.unwrap();

        assert_eq!(events.len(), 5);
        assert_eq!(events[0].title, "E1");
        assert_eq!(events[4].title, "E5");
    }

    #[tokio::test]
    async fn same_day_keeps_insertion_order() {
        let store = InMemoryEventStore::new();
        store.append(event("First", "2030-07-01")).await.unwrap();
        store.append(event("Second", "2030-07-01")).await.unwrap();

        let events = store.list_upcoming(day("2030-01-01"), 5).await.unwrap();

        assert_eq!(events[0].title, "First");
        assert_eq!(events[1].title, "Second");
    }

    #[tokio::test]
    async fn append_grows_store() {
        let store = InMemoryEventStore::new();

        store.append(event("Meetup", "2030-07-01")).await.unwrap();

        let events = store.list_upcoming(day("2030-01-01"), 5).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Meetup");
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = InMemoryEventStore::new();
        let events = store.list_upcoming(day("2030-01-01"), 5).await.unwrap();
        assert!(events.is_empty());
    }
}
