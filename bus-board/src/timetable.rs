//! The materialized in-memory timetable.
//!
//! A `Timetable` holds the loaded dataset and the lookup indexes built
//! over it once at construction: stop resolution by ID, route lookup
//! by ID, and arrival-time lookup by (trip, stop). Where the feed
//! contains duplicate keys, the first-loaded entry wins, so lookups
//! behave exactly like a first-match scan over the raw records.
//!
//! Trips keep their load order; queries that scan all trips see them
//! in that order.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use crate::domain::{DayTime, Route, RouteId, Stop, StopId, StopTimeEntry, Trip, TripId};

/// The full static dataset for one schedule, read-only after
/// construction.
#[derive(Debug)]
pub struct Timetable {
    /// All stops, in load order.
    stops: Vec<Stop>,

    /// Stop resolution index: ID -> position in `stops`.
    stop_index: HashMap<StopId, usize>,

    /// Route lookup by ID.
    routes: HashMap<RouteId, Route>,

    /// All trips, in load order.
    trips: Vec<Trip>,

    /// Arrival lookup: trip -> calls in entry order, each (stop, arrival).
    arrivals: HashMap<TripId, Vec<(StopId, DayTime)>>,
}

impl Timetable {
    /// Build a timetable from loaded collections.
    pub fn new(
        stops: Vec<Stop>,
        routes: Vec<Route>,
        trips: Vec<Trip>,
        stop_times: Vec<StopTimeEntry>,
    ) -> Self {
        let mut stop_index = HashMap::with_capacity(stops.len());
        for (position, stop) in stops.iter().enumerate() {
            stop_index.entry(stop.id.clone()).or_insert(position);
        }

        let mut route_map = HashMap::with_capacity(routes.len());
        for route in routes {
            if let Entry::Vacant(entry) = route_map.entry(route.id.clone()) {
                entry.insert(route);
            }
        }

        let mut arrivals: HashMap<TripId, Vec<(StopId, DayTime)>> = HashMap::new();
        for entry in stop_times {
            arrivals
                .entry(entry.trip)
                .or_default()
                .push((entry.stop, entry.arrival));
        }

        debug!(
            stops = stops.len(),
            routes = route_map.len(),
            trips = trips.len(),
            "built timetable indexes"
        );

        Self {
            stops,
            stop_index,
            routes: route_map,
            trips,
            arrivals,
        }
    }

    /// Resolve a stop by its identifier.
    ///
    /// Matching is exact string equality; an unknown ID returns `None`.
    pub fn stop(&self, id: &StopId) -> Option<&Stop> {
        self.stop_index
            .get(id)
            .and_then(|&position| self.stops.get(position))
    }

    /// Look up a route by its identifier.
    pub fn route(&self, id: &RouteId) -> Option<&Route> {
        self.routes.get(id)
    }

    /// All trips, in load order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// The scheduled arrival time of a trip at a stop.
    ///
    /// Returns `None` when the trip never visits the stop. When the
    /// feed has several entries for the same (trip, stop) pair, the
    /// first entry wins.
    pub fn arrival_at(&self, trip: &TripId, stop: &StopId) -> Option<DayTime> {
        self.arrivals
            .get(trip)?
            .iter()
            .find(|(call_stop, _)| call_stop == stop)
            .map(|&(_, arrival)| arrival)
    }

    /// Number of stops in the timetable.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of trips in the timetable.
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_id(s: &str) -> StopId {
        StopId::new(s.to_string()).unwrap()
    }

    fn route_id(s: &str) -> RouteId {
        RouteId::new(s.to_string()).unwrap()
    }

    fn trip_id(s: &str) -> TripId {
        TripId::new(s.to_string()).unwrap()
    }

    fn time(s: &str) -> DayTime {
        DayTime::parse_hms(s).unwrap()
    }

    fn entry(trip: &str, stop: &str, arrival: &str) -> StopTimeEntry {
        StopTimeEntry::new(trip_id(trip), stop_id(stop), time(arrival), time(arrival))
    }

    fn make_timetable() -> Timetable {
        Timetable::new(
            vec![
                Stop::new(stop_id("S1"), "King Street".to_string()),
                Stop::new(stop_id("S2"), "Main Avenue".to_string()),
            ],
            vec![
                Route::new(route_id("R1"), "12".to_string()),
                Route::new(route_id("R2"), "7".to_string()),
            ],
            vec![
                Trip::new(trip_id("T1"), route_id("R1")),
                Trip::new(trip_id("T2"), route_id("R2")),
            ],
            vec![
                entry("T1", "S1", "12:05:00"),
                entry("T1", "S2", "12:15:00"),
                entry("T2", "S1", "12:30:00"),
            ],
        )
    }

    #[test]
    fn resolve_known_stop() {
        let timetable = make_timetable();

        let stop = timetable.stop(&stop_id("S1")).unwrap();
        assert_eq!(stop.name, "King Street");

        let stop = timetable.stop(&stop_id("S2")).unwrap();
        assert_eq!(stop.name, "Main Avenue");
    }

    #[test]
    fn resolve_unknown_stop() {
        let timetable = make_timetable();
        assert!(timetable.stop(&stop_id("ZZZ")).is_none());
    }

    #[test]
    fn stop_resolution_is_exact() {
        let timetable = make_timetable();
        // No prefix, suffix, or case-insensitive matching
        assert!(timetable.stop(&stop_id("S")).is_none());
        assert!(timetable.stop(&stop_id("S11")).is_none());
        assert!(timetable.stop(&stop_id("s1")).is_none());
    }

    #[test]
    fn duplicate_stop_id_keeps_first() {
        let timetable = Timetable::new(
            vec![
                Stop::new(stop_id("S1"), "First".to_string()),
                Stop::new(stop_id("S1"), "Second".to_string()),
            ],
            vec![],
            vec![],
            vec![],
        );

        assert_eq!(timetable.stop(&stop_id("S1")).unwrap().name, "First");
    }

    #[test]
    fn route_lookup() {
        let timetable = make_timetable();

        assert_eq!(timetable.route(&route_id("R1")).unwrap().short_name, "12");
        assert!(timetable.route(&route_id("R9")).is_none());
    }

    #[test]
    fn trips_keep_load_order() {
        let timetable = make_timetable();

        let ids: Vec<&str> = timetable.trips().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T1", "T2"]);
    }

    #[test]
    fn arrival_lookup() {
        let timetable = make_timetable();

        assert_eq!(
            timetable.arrival_at(&trip_id("T1"), &stop_id("S1")),
            Some(time("12:05:00"))
        );
        assert_eq!(
            timetable.arrival_at(&trip_id("T1"), &stop_id("S2")),
            Some(time("12:15:00"))
        );
    }

    #[test]
    fn arrival_lookup_trip_not_visiting_stop() {
        let timetable = make_timetable();

        // T2 never visits S2
        assert_eq!(timetable.arrival_at(&trip_id("T2"), &stop_id("S2")), None);
        // Unknown trip
        assert_eq!(timetable.arrival_at(&trip_id("T9"), &stop_id("S1")), None);
    }

    #[test]
    fn duplicate_stop_time_entry_keeps_first() {
        let timetable = Timetable::new(
            vec![Stop::new(stop_id("S1"), "King Street".to_string())],
            vec![Route::new(route_id("R1"), "12".to_string())],
            vec![Trip::new(trip_id("T1"), route_id("R1"))],
            vec![entry("T1", "S1", "12:05:00"), entry("T1", "S1", "13:00:00")],
        );

        assert_eq!(
            timetable.arrival_at(&trip_id("T1"), &stop_id("S1")),
            Some(time("12:05:00"))
        );
    }

    #[test]
    fn counts() {
        let timetable = make_timetable();
        assert_eq!(timetable.stop_count(), 2);
        assert_eq!(timetable.trip_count(), 2);
    }
}
