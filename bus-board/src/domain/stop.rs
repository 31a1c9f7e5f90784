//! Stop identifier and record types.

use std::fmt;

/// Error returned when constructing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop ID: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A GTFS stop identifier.
///
/// Stop IDs are opaque strings assigned by the feed publisher. The only
/// validation is that they must be non-empty; matching is always exact
/// string equality.
///
/// # Examples
///
/// ```
/// use bus_board::domain::StopId;
///
/// let id = StopId::new("KIMANST".to_string()).unwrap();
/// assert_eq!(id.as_str(), "KIMANST");
///
/// // Empty strings are rejected
/// assert!(StopId::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Create a new stop ID from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "stop ID cannot be empty",
            });
        }
        Ok(StopId(s))
    }

    /// Returns the stop ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the StopId and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transit stop: somewhere passengers board or alight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    /// Unique stop identifier
    pub id: StopId,
    /// Display name (e.g. "King Street & Main Avenue")
    pub name: String,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(id: StopId, name: String) -> Self {
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_id() {
        assert!(StopId::new("KIMANST".to_string()).is_ok());
        assert!(StopId::new("8530813".to_string()).is_ok());
        assert!(StopId::new("a".to_string()).is_ok());
        // Feed IDs can contain various characters
        assert!(StopId::new("stop-12_A".to_string()).is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(StopId::new("".to_string()).is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let id = StopId::new("KIMANST".to_string()).unwrap();
        assert_eq!(id.as_str(), "KIMANST");
    }

    #[test]
    fn into_inner() {
        let id = StopId::new("KIMANST".to_string()).unwrap();
        assert_eq!(id.into_inner(), "KIMANST".to_string());
    }

    #[test]
    fn display_and_debug() {
        let id = StopId::new("S1".to_string()).unwrap();
        assert_eq!(format!("{}", id), "S1");
        assert_eq!(format!("{:?}", id), "StopId(S1)");
    }

    #[test]
    fn equality_is_exact() {
        let a = StopId::new("S1".to_string()).unwrap();
        let b = StopId::new("S1".to_string()).unwrap();
        let c = StopId::new("s1".to_string()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StopId::new("S1".to_string()).unwrap());
        assert!(set.contains(&StopId::new("S1".to_string()).unwrap()));
        assert!(!set.contains(&StopId::new("S2".to_string()).unwrap()));
    }
}
