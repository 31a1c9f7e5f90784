//! Trip identifier and record types.

use std::fmt;

use super::RouteId;

/// Error returned when constructing an invalid trip identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trip ID: {reason}")]
pub struct InvalidTripId {
    reason: &'static str,
}

/// A GTFS trip identifier.
///
/// Opaque feed-assigned string; must be non-empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TripId(String);

impl TripId {
    /// Create a new trip ID from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidTripId> {
        if s.is_empty() {
            return Err(InvalidTripId {
                reason: "trip ID cannot be empty",
            });
        }
        Ok(TripId(s))
    }

    /// Returns the trip ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({})", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scheduled run of a vehicle along a route.
///
/// A trip belongs to exactly one route and visits an ordered sequence
/// of stops; the stop visits themselves live in the stop-time entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    /// Unique trip identifier
    pub id: TripId,
    /// The route this trip runs on
    pub route: RouteId,
}

impl Trip {
    /// Creates a new trip.
    pub fn new(id: TripId, route: RouteId) -> Self {
        Self { id, route }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_id() {
        assert!(TripId::new("T1".to_string()).is_ok());
        assert!(TripId::new("trip.12:a".to_string()).is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(TripId::new("".to_string()).is_err());
    }

    #[test]
    fn display_and_debug() {
        let id = TripId::new("T1".to_string()).unwrap();
        assert_eq!(format!("{}", id), "T1");
        assert_eq!(format!("{:?}", id), "TripId(T1)");
    }

    #[test]
    fn trip_carries_route() {
        let trip = Trip::new(
            TripId::new("T1".to_string()).unwrap(),
            RouteId::new("R1".to_string()).unwrap(),
        );
        assert_eq!(trip.route.as_str(), "R1");
    }
}
