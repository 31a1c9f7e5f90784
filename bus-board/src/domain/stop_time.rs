//! Stop-time entries: the scheduled calls linking trips to stops.

use super::{DayTime, StopId, TripId};

/// One trip's scheduled call at one stop.
///
/// A trip has one entry per stop it visits; a stop appears in the
/// entries of every trip that serves it. Arrival and departure are
/// wall-clock times of day and may run past midnight for late trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTimeEntry {
    /// The trip making this call
    pub trip: TripId,
    /// The stop being called at
    pub stop: StopId,
    /// Scheduled arrival time
    pub arrival: DayTime,
    /// Scheduled departure time
    pub departure: DayTime,
}

impl StopTimeEntry {
    /// Creates a new stop-time entry.
    pub fn new(trip: TripId, stop: StopId, arrival: DayTime, departure: DayTime) -> Self {
        Self {
            trip,
            stop,
            arrival,
            departure,
        }
    }
}
