//! Application state for the web layer.

use std::sync::Arc;

use crate::odpt::TimetableClient;
use crate::schedule::{ScheduleAggregator, SystemClock};
use crate::status::StatusClient;
use crate::weather::WeatherClient;

/// The schedule aggregator wired to the live upstreams.
pub type LiveScheduleAggregator = ScheduleAggregator<TimetableClient, StatusClient, SystemClock>;

/// Shared application state.
///
/// Read-only after startup; every request builds its own response.
#[derive(Clone)]
pub struct AppState {
    /// Departure board computation
    pub schedule: Arc<LiveScheduleAggregator>,

    /// Weather forecast proxy
    pub weather: Arc<WeatherClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(schedule: LiveScheduleAggregator, weather: WeatherClient) -> Self {
        Self {
            schedule: Arc::new(schedule),
            weather: Arc::new(weather),
        }
    }
}
