//! Upcoming-arrival search.
//!
//! Scans every trip in the timetable, keeps the ones that call at the
//! target stop inside the query window, and orders them by how soon
//! they arrive.

use chrono::Duration;
use tracing::debug;

use crate::domain::{DayTime, RouteId, StopId, TripId};
use crate::timetable::Timetable;

use super::config::BoardConfig;

/// One qualifying arrival at the target stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingArrival {
    /// The arriving trip.
    pub trip: TripId,
    /// The route the trip runs on.
    pub route: RouteId,
    /// Scheduled arrival time at the target stop.
    pub arrival: DayTime,
}

impl UpcomingArrival {
    /// Time until this arrival, measured from the given reference.
    pub fn wait(&self, reference: DayTime) -> Duration {
        self.arrival.signed_duration_since(reference)
    }
}

/// Find all trips arriving at `stop` within the query window.
///
/// A trip qualifies when its arrival satisfies
/// `0 <= arrival - reference <= lookahead`: arrivals in the past are
/// excluded (even by a second), an arrival exactly at the reference
/// time qualifies with a zero wait, and an arrival exactly on the
/// window bound qualifies too. Trips that never visit the stop are
/// skipped.
///
/// The result is sorted ascending by arrival time; trips arriving at
/// the same instant keep their timetable order. An empty result means
/// no upcoming arrivals, not an error.
pub fn find_upcoming(
    timetable: &Timetable,
    stop: &StopId,
    config: &BoardConfig,
) -> Vec<UpcomingArrival> {
    let window = config.lookahead();
    let mut upcoming = Vec::new();

    for trip in timetable.trips() {
        let Some(arrival) = timetable.arrival_at(&trip.id, stop) else {
            continue;
        };

        let wait = arrival.signed_duration_since(config.reference_time);
        if wait < Duration::zero() || wait > window {
            continue;
        }

        upcoming.push(UpcomingArrival {
            trip: trip.id.clone(),
            route: trip.route.clone(),
            arrival,
        });
    }

    upcoming.sort_by_key(|arrival| arrival.arrival);

    debug!(
        stop = %stop,
        scanned = timetable.trip_count(),
        qualifying = upcoming.len(),
        "searched for upcoming arrivals"
    );

    upcoming
}
