//! Timetable entries and projected departures.

use std::fmt;

use super::TimeOfDay;

/// Rendering of a departure or arrival whose time is not known.
pub const UNKNOWN_TIME: &str = "unknown";

/// A departure or arrival time that may be missing from the timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Departure {
    /// A scheduled time of day
    At(TimeOfDay),
    /// The provider gave no time for this train
    Unknown,
}

impl Departure {
    /// The time of day, if known.
    pub fn time(&self) -> Option<TimeOfDay> {
        match self {
            Departure::At(t) => Some(*t),
            Departure::Unknown => None,
        }
    }

    /// Shift by a travel offset, wrapping past midnight.
    ///
    /// Unknown stays unknown.
    pub fn offset_by(&self, minutes: u32) -> Self {
        match self {
            Departure::At(t) => Departure::At(t.wrapping_add_minutes(minutes)),
            Departure::Unknown => Departure::Unknown,
        }
    }
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Departure::At(t) => write!(f, "{t}"),
            Departure::Unknown => f.write_str(UNKNOWN_TIME),
        }
    }
}

/// One train from the provider's station timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTimetableEntry {
    /// Provider train identifier, e.g. `odpt.Train:TokyoMetro.Tozai.A0521K`
    pub train: String,

    /// Scheduled departure from the timetable's station
    pub departure: Departure,

    /// Destination station codes, in provider order
    pub destination_codes: Vec<String>,
}

impl RawTimetableEntry {
    /// Create a new timetable entry.
    pub fn new(
        train: impl Into<String>,
        departure: Departure,
        destination_codes: Vec<String>,
    ) -> Self {
        Self {
            train: train.into(),
            departure,
            destination_codes,
        }
    }
}

/// A projected departure ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureEntry {
    pub departure: Departure,
    pub arrival: Departure,
    /// Display name of the destination
    pub destination: String,
}
