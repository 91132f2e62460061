//! Domain entities

mod event;

pub use event::{EVENT_DATE_FORMAT, Event, parse_event_date};
