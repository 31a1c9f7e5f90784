//! Board assembly: from a query to printable route lines.

use std::fmt;

use tracing::debug;

use crate::domain::{RouteId, Stop, StopId};
use crate::timetable::Timetable;

use super::config::BoardConfig;
use super::finder::find_upcoming;
use super::format::TimeFormat;
use super::groups::RouteGroups;

/// Error from building a board.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BoardError {
    /// The requested stop does not exist in the timetable.
    #[error("no stop found for ID {0}")]
    UnknownStop(StopId),
}

/// One arrivals-board query.
#[derive(Debug, Clone)]
pub struct BoardRequest {
    /// The stop to show arrivals for.
    pub stop: StopId,

    /// Maximum number of arrivals shown per route.
    pub count: usize,

    /// How each arrival is described.
    pub format: TimeFormat,
}

impl BoardRequest {
    /// Create a new request.
    pub fn new(stop: StopId, count: usize, format: TimeFormat) -> Self {
        Self {
            stop,
            count,
            format,
        }
    }
}

/// One printable line of the board: a route and its next arrivals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLine {
    /// The route this line describes.
    pub route: RouteId,

    /// Display label, normally the route's short name.
    pub label: String,

    /// Formatted arrival descriptors, soonest first. Never empty:
    /// a line with nothing to show is not emitted at all.
    pub entries: Vec<String>,
}

impl fmt::Display for BoardLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.entries.join(", "))
    }
}

/// The assembled result of one arrivals query.
#[derive(Debug, Clone)]
pub struct Board {
    /// The resolved stop the query ran against.
    pub stop: Stop,

    /// Number of arrivals that qualified within the window, before any
    /// per-route count limit was applied.
    pub upcoming_count: usize,

    /// Route lines in first-seen route order. Empty when nothing
    /// arrives within the window, or when the count limit suppressed
    /// every line.
    pub lines: Vec<BoardLine>,
}

impl Board {
    /// Run one query against a timetable.
    ///
    /// Resolves the stop, finds the qualifying arrivals, partitions
    /// them by route and renders at most `request.count` descriptors
    /// per route. Routes whose rendered list would be empty (a count
    /// of zero) are left off the board entirely.
    ///
    /// An unknown stop is the only error; a board with no lines is the
    /// valid "no upcoming arrivals" outcome.
    pub fn build(
        timetable: &Timetable,
        request: &BoardRequest,
        config: &BoardConfig,
    ) -> Result<Board, BoardError> {
        let stop = timetable
            .stop(&request.stop)
            .ok_or_else(|| BoardError::UnknownStop(request.stop.clone()))?;

        let upcoming = find_upcoming(timetable, &stop.id, config);
        let upcoming_count = upcoming.len();
        let groups = RouteGroups::partition(upcoming);

        let mut lines = Vec::with_capacity(groups.len());
        for (route, group) in groups.iter() {
            let entries: Vec<String> = group
                .iter()
                .take(request.count)
                .filter_map(|arrival| timetable.arrival_at(&arrival.trip, &stop.id))
                .map(|arrival| request.format.describe(config.reference_time, arrival))
                .collect();

            if entries.is_empty() {
                continue;
            }

            let label = timetable
                .route(route)
                .map(|r| r.short_name.clone())
                .unwrap_or_else(|| route.to_string());

            lines.push(BoardLine {
                route: route.clone(),
                label,
                entries,
            });
        }

        debug!(
            stop = %stop.id,
            routes = lines.len(),
            "assembled arrivals board"
        );

        Ok(Board {
            stop: stop.clone(),
            upcoming_count,
            lines,
        })
    }

    /// True when at least one arrival qualified within the window,
    /// whether or not the count limit left anything to show.
    pub fn has_upcoming(&self) -> bool {
        self.upcoming_count > 0
    }
}
