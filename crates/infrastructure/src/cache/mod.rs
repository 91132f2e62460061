//! Cache implementations
//!
//! Provides caching adapters for the application layer:
//! - `MokaCache`: in-memory cache with a TTL per entry

mod moka_cache;

pub use moka_cache::{MokaCache, MokaCacheConfig};
