//! GTFS timetable loading.
//!
//! The dataset on disk is a directory of CSV files in the GTFS static
//! format. This module reads the four files the board needs (stops,
//! routes, trips, stop times) and materializes the [`Timetable`]
//! everything else queries.
//!
//! [`Timetable`]: crate::timetable::Timetable

mod error;
mod load;
mod records;

pub use error::GtfsError;
pub use load::load_dir;
pub use records::{RouteRecord, StopRecord, StopTimeRecord, TripRecord};
