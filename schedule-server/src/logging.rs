//! Tracing subscriber setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the log filter from `RUST_LOG`, falling back to `default_level`
/// when it is unset or invalid.
pub fn env_filter(default_level: LevelFilter) -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok(), default_level)
}

fn filter_from(directives: Option<String>, default_level: LevelFilter) -> EnvFilter {
    let directives = directives.unwrap_or_else(|| default_level.to_string());
    EnvFilter::try_new(&directives).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            err,
        );
        EnvFilter::new(default_level.to_string())
    })
}

/// Install the global subscriber. Call once, at startup.
pub fn init_logger() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter(LevelFilter::INFO))
        .init();
}
