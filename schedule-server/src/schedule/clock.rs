//! Current time-of-day sources.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::domain::TimeOfDay;

/// Source of the current local time of day.
pub trait Clock: Send + Sync {
    fn now(&self) -> TimeOfDay;
}

/// Wall clock in a fixed civil timezone.
///
/// Timetable times are local to the operator, so "now" must be read in the
/// operator's timezone rather than the server's.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// The timezone this clock reads in.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Local time of day at a given instant.
    pub fn time_of_day_at(&self, instant: DateTime<Utc>) -> TimeOfDay {
        TimeOfDay::from_naive_time(instant.with_timezone(&self.tz).time())
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Tokyo)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        self.time_of_day_at(Utc::now())
    }
}

/// A clock stuck at one time. For tests and replaying a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub TimeOfDay);

impl Clock for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}
