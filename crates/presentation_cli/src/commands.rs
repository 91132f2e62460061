//! Service wiring and subcommand bodies

use std::{path::Path, sync::Arc};

use anyhow::Context;
use application::{
    ApplicationError, CachePort, EventService, NewEvent, WeatherError, WeatherService,
};
use domain::WeatherRecord;
use infrastructure::{AppConfig, InMemoryEventStore, MokaCache, WeatherAdapter};
use tracing::{info, warn};

/// Services assembled from configuration
#[derive(Debug)]
pub struct Services {
    /// Cache shared by all lookups
    pub cache: Arc<dyn CachePort>,
    /// Cache-aside weather lookup
    pub weather: Arc<WeatherService>,
    /// Event listing backed by an in-memory store
    pub events: EventService,
}

/// Build the services for one CLI run
pub fn build_services(config: &AppConfig) -> anyhow::Result<Services> {
    if !config.weather.has_api_key() {
        warn!("No weather API key configured, lookups will likely be rejected");
    }

    let cache: Arc<dyn CachePort> =
        Arc::new(MokaCache::with_config(config.cache.to_moka_config()));
    let adapter = WeatherAdapter::with_config(config.weather.to_client_config())
        .context("creating weather client")?;

    let weather = Arc::new(
        WeatherService::new(Arc::clone(&cache), Arc::new(adapter))
            .with_ttl(config.weather.cache_ttl()),
    );
    let events = EventService::new(
        Arc::new(InMemoryEventStore::new()),
        Arc::clone(&weather),
        config.events.to_service_config(),
    );

    Ok(Services {
        cache,
        weather,
        events,
    })
}

/// Look up each location in order
///
/// Repeated locations are answered from the cache after the first lookup.
pub async fn lookup_all(
    weather: &WeatherService,
    locations: &[String],
) -> Vec<Result<WeatherRecord, WeatherError>> {
    let mut results = Vec::with_capacity(locations.len());
    for location in locations {
        results.push(weather.get(location).await);
    }
    results
}

/// Log cache effectiveness for this run
pub fn log_cache_stats(cache: &dyn CachePort) {
    let stats = cache.stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        hit_rate = stats.hit_rate(),
        "Cache statistics"
    );
}

/// Read a JSON array of new events from a file
pub fn read_new_events(path: &Path) -> anyhow::Result<Vec<NewEvent>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

/// Add every event, returning the position and error of each rejected one
pub async fn add_all(
    events: &EventService,
    new_events: Vec<NewEvent>,
) -> Vec<(usize, ApplicationError)> {
    let total = new_events.len();
    let mut rejected = Vec::new();
    for (index, new_event) in new_events.into_iter().enumerate() {
        if let Err(e) = events.add_event(new_event).await {
            rejected.push((index, e));
        }
    }
    info!(total, rejected = rejected.len(), "Events loaded");
    rejected
}
