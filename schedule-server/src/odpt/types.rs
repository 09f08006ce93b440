//! ODPT station timetable response DTOs.
//!
//! These map directly onto the `odpt:StationTimetable` JSON-LD documents.
//! The provider omits fields rather than sending nulls, so nearly everything
//! is optional.

use serde::Deserialize;

/// One station timetable: all departures from a station in one direction
/// on one calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct StationTimetable {
    /// Station the timetable belongs to.
    #[serde(rename = "odpt:station")]
    pub station: Option<String>,

    /// Railway line, e.g. `odpt.Railway:TokyoMetro.Tozai`.
    #[serde(rename = "odpt:railway")]
    pub railway: Option<String>,

    /// Direction of travel.
    #[serde(rename = "odpt:railDirection")]
    pub rail_direction: Option<String>,

    /// Weekday/holiday calendar this timetable applies to.
    #[serde(rename = "odpt:calendar")]
    pub calendar: Option<String>,

    /// Departures, in timetable order.
    #[serde(rename = "odpt:stationTimetableObject", default)]
    pub timetable_objects: Vec<StationTimetableObject>,
}

/// A single departure within a station timetable.
#[derive(Debug, Clone, Deserialize)]
pub struct StationTimetableObject {
    /// Train identifier, e.g. `odpt.Train:TokyoMetro.Tozai.A0521K`.
    #[serde(rename = "odpt:train")]
    pub train: Option<String>,

    /// Departure time as "HH:MM". Absent for arrival-only entries.
    #[serde(rename = "odpt:departureTime")]
    pub departure_time: Option<String>,

    /// Destination station(s).
    #[serde(rename = "odpt:destinationStation", default)]
    pub destination_station: Vec<String>,

    /// Public train number.
    #[serde(rename = "odpt:trainNumber")]
    pub train_number: Option<String>,

    /// Train type, e.g. `odpt.TrainType:TokyoMetro.Local`.
    #[serde(rename = "odpt:trainType")]
    pub train_type: Option<String>,
}
