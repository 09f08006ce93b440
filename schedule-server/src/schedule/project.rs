//! Projection of timetable entries into upcoming departures.
//!
//! Timetable times carry no date, so "upcoming" is decided on the time of
//! day alone. When fewer than the requested number of trains remain today,
//! the earliest trains of the timetable are shown as the next service day's.

use crate::domain::{Departure, DepartureEntry, RawTimetableEntry, StationDirectory, TimeOfDay};

/// Convert one timetable entry into a display entry.
///
/// Arrival is departure plus `travel_minutes`, wrapping past midnight.
/// Destination is the first destination code's display name.
pub fn project_entry(
    entry: &RawTimetableEntry,
    directory: &StationDirectory,
    travel_minutes: u32,
) -> DepartureEntry {
    DepartureEntry {
        departure: entry.departure,
        arrival: entry.departure.offset_by(travel_minutes),
        destination: directory.first_name(&entry.destination_codes).to_string(),
    }
}

/// Whether a departure is at or after `now`.
///
/// A departure exactly at `now` still counts. Unknown departures are never
/// upcoming; they can only fill the next-day slots.
pub fn is_upcoming(departure: Departure, now: TimeOfDay) -> bool {
    match departure {
        Departure::At(t) => t >= now,
        Departure::Unknown => false,
    }
}

/// Select the next `max_results` departures relative to `now`.
///
/// Today's remaining departures come first in timetable order, followed by
/// the already-departed ones (standing in for tomorrow's) in timetable order.
pub fn upcoming_departures(
    entries: &[&RawTimetableEntry],
    directory: &StationDirectory,
    travel_minutes: u32,
    now: TimeOfDay,
    max_results: usize,
) -> Vec<DepartureEntry> {
    let (today, next_day): (Vec<_>, Vec<_>) = entries
        .iter()
        .map(|entry| project_entry(entry, directory, travel_minutes))
        .partition(|d| is_upcoming(d.departure, now));

    today.into_iter().chain(next_day).take(max_results).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn time_of_day()(hour in 0u32..24, minute in 0u32..60) -> TimeOfDay {
            TimeOfDay::from_hm(hour, minute).unwrap()
        }
    }

    fn entries_strategy() -> impl Strategy<Value = Vec<RawTimetableEntry>> {
        prop::collection::vec(time_of_day(), 0..30).prop_map(|times| {
            times
                .into_iter()
                .map(|time| RawTimetableEntry::new("T", Departure::At(time), vec![]))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn at_most_max_results(entries in entries_strategy(), now in time_of_day()) {
            let refs: Vec<_> = entries.iter().collect();
            let result = upcoming_departures(&refs, &StationDirectory::default(), 47, now, 3);

            prop_assert!(result.len() <= 3);
            prop_assert_eq!(result.len(), entries.len().min(3));
        }

        #[test]
        fn future_precedes_past(entries in entries_strategy(), now in time_of_day()) {
            let refs: Vec<_> = entries.iter().collect();
            let result = upcoming_departures(&refs, &StationDirectory::default(), 47, now, 3);

            let flags: Vec<bool> = result.iter().map(|d| is_upcoming(d.departure, now)).collect();
            for window in flags.windows(2) {
                // Never a future entry after a past one
                prop_assert!(
                    window[0] || !window[1],
                    "past entry before future entry: {:?}",
                    flags
                );
            }
        }

        #[test]
        fn arrival_is_departure_plus_offset(
            entries in entries_strategy(),
            now in time_of_day(),
            offset in 0u32..300,
        ) {
            let refs: Vec<_> = entries.iter().collect();
            let result = upcoming_departures(&refs, &StationDirectory::default(), offset, now, 3);

            for d in &result {
                let dep = d.departure.time().unwrap();
                prop_assert_eq!(d.arrival, Departure::At(dep.wrapping_add_minutes(offset)));
            }
        }
    }
}
