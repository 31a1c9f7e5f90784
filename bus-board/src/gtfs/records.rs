//! Raw GTFS file records.
//!
//! These mirror the columns of the four timetable files as they appear
//! on disk; validation into domain types happens in the loader. Extra
//! columns in a feed are ignored.

use serde::Deserialize;

/// One row of `stops.txt`.
#[derive(Debug, Deserialize)]
pub struct StopRecord {
    pub stop_id: String,
    pub stop_name: String,
}

/// One row of `routes.txt`.
#[derive(Debug, Deserialize)]
pub struct RouteRecord {
    pub route_id: String,
    pub route_short_name: String,
}

/// One row of `trips.txt`.
#[derive(Debug, Deserialize)]
pub struct TripRecord {
    pub route_id: String,
    pub trip_id: String,
}

/// One row of `stop_times.txt`.
#[derive(Debug, Deserialize)]
pub struct StopTimeRecord {
    pub trip_id: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub stop_id: String,
    pub stop_sequence: u32,
}
