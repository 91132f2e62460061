//! Logging infrastructure
//!
//! Installs the `tracing` subscriber with a text or JSON formatter.

mod subscriber;

pub use subscriber::{TelemetryError, init_tracing};
