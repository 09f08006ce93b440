//! Conversion from ODPT DTOs to timetable entries.

use crate::domain::{Departure, RawTimetableEntry, TimeOfDay};

use super::types::{StationTimetable, StationTimetableObject};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// A departure time was present but not "HH:MM"
    #[error("invalid departure time {value:?} for train {train}: {reason}")]
    InvalidTime {
        train: String,
        value: String,
        reason: String,
    },
}

/// Flatten per-station timetables into one ordered list of entries.
///
/// Provider order is preserved: all departures of the first timetable, then
/// all of the second, and so on.
pub fn flatten_station_timetables(
    timetables: &[StationTimetable],
) -> Result<Vec<RawTimetableEntry>, ConversionError> {
    timetables
        .iter()
        .flat_map(|timetable| timetable.timetable_objects.iter())
        .map(convert_timetable_object)
        .collect()
}

fn convert_timetable_object(
    object: &StationTimetableObject,
) -> Result<RawTimetableEntry, ConversionError> {
    let train = object.train.clone().unwrap_or_default();

    let departure = match object.departure_time.as_deref() {
        None => Departure::Unknown,
        Some(s) => {
            let time = TimeOfDay::parse_hhmm(s).map_err(|e| ConversionError::InvalidTime {
                train: train.clone(),
                value: s.to_string(),
                reason: e.to_string(),
            })?;
            Departure::At(time)
        }
    };

    Ok(RawTimetableEntry {
        train,
        departure,
        destination_codes: object.destination_station.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(train: &str, time: Option<&str>, dest: &[&str]) -> StationTimetableObject {
        StationTimetableObject {
            train: Some(train.to_string()),
            departure_time: time.map(str::to_string),
            destination_station: dest.iter().map(|s| s.to_string()).collect(),
            train_number: None,
            train_type: None,
        }
    }

    fn timetable(objects: Vec<StationTimetableObject>) -> StationTimetable {
        StationTimetable {
            station: None,
            railway: None,
            rail_direction: None,
            calendar: None,
            timetable_objects: objects,
        }
    }

    #[test]
    fn flattens_in_provider_order() {
        let timetables = vec![
            timetable(vec![object("T1", Some("05:00"), &["A"]), object("T2", Some("05:10"), &[])]),
            timetable(vec![]),
            timetable(vec![object("T3", Some("04:50"), &["B", "C"])]),
        ];

        let entries = flatten_station_timetables(&timetables).unwrap();
        let trains: Vec<_> = entries.iter().map(|e| e.train.as_str()).collect();
        assert_eq!(trains, vec!["T1", "T2", "T3"]);
        assert_eq!(entries[2].destination_codes, vec!["B", "C"]);
    }

    #[test]
    fn missing_departure_time_is_unknown() {
        let timetables = vec![timetable(vec![object("T1", None, &["A"])])];
        let entries = flatten_station_timetables(&timetables).unwrap();
        assert_eq!(entries[0].departure, Departure::Unknown);
    }

    #[test]
    fn missing_train_is_empty_identifier() {
        let mut obj = object("ignored", Some("06:00"), &[]);
        obj.train = None;
        let entries = flatten_station_timetables(&[timetable(vec![obj])]).unwrap();
        assert_eq!(entries[0].train, "");
    }

    #[test]
    fn malformed_departure_time_is_rejected() {
        let timetables = vec![timetable(vec![object("T9", Some("25:61"), &[])])];
        let err = flatten_station_timetables(&timetables).unwrap_err();
        assert!(err.to_string().contains("T9"));
        assert!(err.to_string().contains("25:61"));
    }
}
