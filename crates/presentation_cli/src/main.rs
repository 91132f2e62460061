//! Events CLI
//!
//! Command-line interface for weather lookups and event listings.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod commands;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, init_tracing};

/// Events CLI
#[derive(Parser)]
#[command(name = "events-cli")]
#[command(author, version, about = "Upcoming events with their weather", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up current weather for one or more locations
    ///
    /// Example: events-cli weather London "New York" London
    Weather {
        /// Free-text place names, looked up in order
        #[arg(required = true)]
        locations: Vec<String>,
    },

    /// Load events from a JSON file and print the upcoming ones with weather
    ///
    /// The file holds an array of objects with `title`, `date` (YYYY-MM-DD),
    /// `location` and an optional `description`.
    /// Example: events-cli events ./events.json --today 2030-01-01
    Events {
        /// JSON file with the events to add
        file: PathBuf,

        /// Day to list from (default: today)
        #[arg(long, value_parser = domain::parse_event_date)]
        today: Option<NaiveDate>,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref(), None)?;

    // -v flags take precedence over the configured level
    if cli.verbose > 0 {
        config.log.level = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_tracing(&config.log)?;

    let services = commands::build_services(&config)?;

    match cli.command {
        Commands::Weather { locations } => {
            let results = commands::lookup_all(&services.weather, &locations).await;
            commands::log_cache_stats(services.cache.as_ref());

            let mut failed = 0;
            for (location, result) in locations.iter().zip(&results) {
                match result {
                    Ok(record) => println!("{location}: {record}"),
                    Err(e) => {
                        failed += 1;
                        println!("{location}: {e}");
                    },
                }
            }

            if failed > 0 {
                anyhow::bail!("{failed} of {} lookups failed", results.len());
            }
        },

        Commands::Events { file, today } => {
            let new_events = commands::read_new_events(&file)?;
            for (index, e) in commands::add_all(&services.events, new_events).await {
                if !e.is_client_error() {
                    return Err(e.into());
                }
                eprintln!("skipped event #{}: {e}", index + 1);
            }

            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let listing = services.events.list_upcoming(today).await?;
            println!("{}", serde_json::to_string_pretty(&listing)?);
        },
    }

    Ok(())
}
