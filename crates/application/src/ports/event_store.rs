//! Event store port
//!
//! Storage for events, injected into the event service.

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::Event;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for event persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EventStore: Send + Sync {
    /// List events dated strictly after `after`, earliest first, at most `limit`
    async fn list_upcoming(
        &self,
        after: NaiveDate,
        limit: usize,
    ) -> Result<Vec<Event>, ApplicationError>;

    /// Append a new event
    async fn append(&self, event: Event) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn EventStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn EventStore>();
    }
}
