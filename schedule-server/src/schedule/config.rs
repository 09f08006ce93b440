//! Route configuration for the departure board.

/// The one route this board serves: which trains to keep, how long the
/// ride takes, and how many departures to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    /// Train identifier prefix selecting the line (case-sensitive).
    pub line_prefix: String,

    /// Maximum number of line entries kept after filtering.
    /// Bounds the work done on a pathological upstream payload.
    pub max_entries: usize,

    /// Fixed travel time from the boarding station to the alighting
    /// station (minutes).
    pub travel_minutes: u32,

    /// Number of departures to return.
    pub max_results: usize,
}

impl RouteConfig {
    /// Create a new route configuration.
    pub fn new(
        line_prefix: impl Into<String>,
        max_entries: usize,
        travel_minutes: u32,
        max_results: usize,
    ) -> Self {
        Self {
            line_prefix: line_prefix.into(),
            max_entries,
            travel_minutes,
            max_results,
        }
    }
}

impl Default for RouteConfig {
    /// Tozai line, Nishi-Funabashi to Takadanobaba.
    fn default() -> Self {
        Self {
            line_prefix: "odpt.Train:TokyoMetro.Tozai.".to_string(),
            max_entries: 194,
            travel_minutes: 47,
            max_results: 3,
        }
    }
}
