//! Time-of-day handling for timetable data.
//!
//! The timetable provider gives departure times as "HH:MM" strings with no
//! date attached. Arithmetic on these wraps around midnight, so a train
//! leaving at "23:50" with a 47 minute journey arrives at "00:37".

use std::fmt;

use chrono::{NaiveTime, Timelike};

/// Minutes in a full day.
const MINUTES_PER_DAY: u16 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time without a date, stored as minutes since midnight.
///
/// Ordering compares the time of day only. Addition wraps modulo 24 hours,
/// so no calendar date is ever involved.
///
/// # Examples
///
/// ```
/// use schedule_server::domain::TimeOfDay;
///
/// let dep = TimeOfDay::parse_hhmm("23:50").unwrap();
/// assert_eq!(dep.wrapping_add_minutes(47).to_string(), "00:37");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, "00:00".
    pub const MIDNIGHT: Self = Self(0);

    /// Create a time from hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self((hour * 60 + minute) as u16))
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmm("00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmm("1430").is_err());
    /// assert!(TimeOfDay::parse_hhmm("14:3").is_err());
    /// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::from_hm(hour, minute)
    }

    /// The time of day of a wall-clock reading, truncated to the minute.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    /// Minutes since midnight (0-1439).
    pub fn minutes_since_midnight(&self) -> u16 {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Add minutes, wrapping past midnight.
    pub fn wrapping_add_minutes(&self, minutes: u32) -> Self {
        let day = u32::from(MINUTES_PER_DAY);
        let wrapped = (u32::from(self.0) + minutes % day) % day;
        Self(wrapped as u16)
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
