//! Query configuration for the arrivals board.

use chrono::Duration;

use crate::domain::DayTime;

/// Configuration parameters for an arrivals query.
///
/// The reference time is an explicit input rather than a wall-clock
/// read, so the same query against the same timetable always yields
/// the same board.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// The "now" the query is answered against.
    pub reference_time: DayTime,

    /// How far ahead to look for arrivals (minutes).
    pub lookahead_mins: i64,
}

impl BoardConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(reference_time: DayTime, lookahead_mins: i64) -> Self {
        Self {
            reference_time,
            lookahead_mins,
        }
    }

    /// Returns the lookahead window as a Duration.
    pub fn lookahead(&self) -> Duration {
        Duration::minutes(self.lookahead_mins)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            reference_time: DayTime::from_seconds(12 * 3600), // noon
            lookahead_mins: 120,                              // 2 hours
        }
    }
}
