//! Departure board computation.
//!
//! Answers "when are the next few trains, and when do they get there?"
//! for one configured route:
//!
//! 1. fetch the raw station timetables ([`TimetableSource`])
//! 2. keep the configured line's entries ([`filter_line`])
//! 3. project arrival times and pick the upcoming ones
//!    ([`upcoming_departures`]), rolling over to the next day if needed
//! 4. attach the scraped line status ([`StatusSource`])

mod aggregate;
mod clock;
mod config;
mod filter;
mod project;

pub use aggregate::{
    ScheduleAggregator, ScheduleResponse, ScheduledDeparture, StatusSource, TimetableSource,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::RouteConfig;
pub use filter::filter_line;
pub use project::{is_upcoming, project_entry, upcoming_departures};
