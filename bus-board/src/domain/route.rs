//! Route identifier and record types.

use std::fmt;

/// Error returned when constructing an invalid route identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route ID: {reason}")]
pub struct InvalidRouteId {
    reason: &'static str,
}

/// A GTFS route identifier.
///
/// Opaque feed-assigned string; must be non-empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RouteId(String);

impl RouteId {
    /// Create a new route ID from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidRouteId> {
        if s.is_empty() {
            return Err(InvalidRouteId {
                reason: "route ID cannot be empty",
            });
        }
        Ok(RouteId(s))
    }

    /// Returns the route ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transit route: a named line grouping many trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Unique route identifier
    pub id: RouteId,
    /// Short display name, typically the line number (e.g. "12")
    pub short_name: String,
}

impl Route {
    /// Creates a new route.
    pub fn new(id: RouteId, short_name: String) -> Self {
        Self { id, short_name }
    }
}
