//! GTFS directory loading.
//!
//! Reads the four timetable files from a directory, validates each row
//! into domain types and builds the in-memory [`Timetable`]. Rows keep
//! their file order, so downstream first-match lookups and trip scans
//! behave exactly like scans over the raw feed.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::domain::{DayTime, Route, RouteId, Stop, StopId, StopTimeEntry, Trip, TripId};
use crate::timetable::Timetable;

use super::error::GtfsError;
use super::records::{RouteRecord, StopRecord, StopTimeRecord, TripRecord};

const STOPS_FILE: &str = "stops.txt";
const ROUTES_FILE: &str = "routes.txt";
const TRIPS_FILE: &str = "trips.txt";
const STOP_TIMES_FILE: &str = "stop_times.txt";

/// Load a timetable from a GTFS directory.
///
/// Expects `stops.txt`, `routes.txt`, `trips.txt` and `stop_times.txt`
/// inside `dir`. Any missing file, CSV error or invalid row aborts the
/// load; there is no partial timetable.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Timetable, GtfsError> {
    let dir = dir.as_ref();

    let stop_records: Vec<StopRecord> = read_records(dir, STOPS_FILE)?;
    let route_records: Vec<RouteRecord> = read_records(dir, ROUTES_FILE)?;
    let trip_records: Vec<TripRecord> = read_records(dir, TRIPS_FILE)?;
    let stop_time_records: Vec<StopTimeRecord> = read_records(dir, STOP_TIMES_FILE)?;

    info!(
        stops = stop_records.len(),
        routes = route_records.len(),
        trips = trip_records.len(),
        stop_times = stop_time_records.len(),
        "loaded GTFS files from {}",
        dir.display()
    );

    let stops = stop_records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = StopId::new(record.stop_id)
                .map_err(|e| invalid(STOPS_FILE, index, e))?;
            Ok(Stop::new(id, record.stop_name))
        })
        .collect::<Result<Vec<_>, GtfsError>>()?;

    let routes = route_records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = RouteId::new(record.route_id)
                .map_err(|e| invalid(ROUTES_FILE, index, e))?;
            Ok(Route::new(id, record.route_short_name))
        })
        .collect::<Result<Vec<_>, GtfsError>>()?;

    let trips = trip_records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = TripId::new(record.trip_id)
                .map_err(|e| invalid(TRIPS_FILE, index, e))?;
            let route = RouteId::new(record.route_id)
                .map_err(|e| invalid(TRIPS_FILE, index, e))?;
            Ok(Trip::new(id, route))
        })
        .collect::<Result<Vec<_>, GtfsError>>()?;

    let stop_times = stop_time_records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let trip = TripId::new(record.trip_id)
                .map_err(|e| invalid(STOP_TIMES_FILE, index, e))?;
            let stop = StopId::new(record.stop_id)
                .map_err(|e| invalid(STOP_TIMES_FILE, index, e))?;
            let arrival = DayTime::parse_hms(&record.arrival_time)
                .map_err(|e| invalid(STOP_TIMES_FILE, index, e))?;
            let departure = DayTime::parse_hms(&record.departure_time)
                .map_err(|e| invalid(STOP_TIMES_FILE, index, e))?;
            Ok(StopTimeEntry::new(trip, stop, arrival, departure))
        })
        .collect::<Result<Vec<_>, GtfsError>>()?;

    Ok(Timetable::new(stops, routes, trips, stop_times))
}

/// Read and deserialize every row of one timetable file.
fn read_records<T: DeserializeOwned>(dir: &Path, file: &'static str) -> Result<Vec<T>, GtfsError> {
    let mut reader =
        csv::Reader::from_path(dir.join(file)).map_err(|source| GtfsError::Read { file, source })?;

    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| GtfsError::Read { file, source })
}

/// Build an invalid-record error for a 0-based record index.
///
/// Row numbers are 1-based file lines; row 1 is the header.
fn invalid(file: &'static str, index: usize, error: impl fmt::Display) -> GtfsError {
    GtfsError::InvalidRecord {
        file,
        row: index + 2,
        message: error.to_string(),
    }
}
