//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::schedule::ScheduledDeparture;

/// One row of the departure board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureResult {
    /// Departure time "HH:MM", or "unknown"
    pub departure_time: String,

    /// Arrival time "HH:MM", or "unknown"
    pub arrival_time: String,

    /// Destination display name
    pub destination: String,

    /// Line status label
    pub delay_status: String,
}

impl DepartureResult {
    pub fn from_scheduled(d: &ScheduledDeparture) -> Self {
        Self {
            departure_time: d.entry.departure.to_string(),
            arrival_time: d.entry.arrival.to_string(),
            destination: d.entry.destination.clone(),
            delay_status: d.status.label().to_string(),
        }
    }
}

/// Request for a weather forecast.
#[derive(Debug, Deserialize)]
pub struct WeatherRequest {
    /// City name, as typed by the user
    pub city: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
