//! Bus arrivals board.
//!
//! Answers: "which buses arrive at this stop in the next couple of
//! hours?" against a static GTFS timetable, grouped by route and
//! ordered by how soon each bus arrives.

pub mod board;
pub mod domain;
pub mod gtfs;
pub mod timetable;
