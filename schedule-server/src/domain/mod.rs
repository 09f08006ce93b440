//! Domain types for the departure board.
//!
//! Everything here is plain data with its invariants enforced at
//! construction. Network and HTTP concerns live in the client modules.

mod departure;
mod station;
mod status;
mod time;

pub use departure::{Departure, DepartureEntry, RawTimetableEntry, UNKNOWN_TIME};
pub use station::{DirectoryError, StationDirectory, UNKNOWN_STATION};
pub use status::ServiceStatus;
pub use time::{TimeError, TimeOfDay};
