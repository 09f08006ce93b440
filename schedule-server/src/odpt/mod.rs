//! ODPT (Open Data for Public Transportation) timetable client.
//!
//! The `odpt:StationTimetable` endpoint returns one document per station,
//! direction and calendar, each holding an ordered list of departures.
//! Times are "HH:MM" strings in Japan local time with no date.

mod client;
mod convert;
mod error;
mod types;

pub use client::{TimetableClient, TimetableClientConfig};
pub use convert::{ConversionError, flatten_station_timetables};
pub use error::TimetableError;
pub use types::{StationTimetable, StationTimetableObject};
