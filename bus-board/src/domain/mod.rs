//! Domain types for the bus arrivals board.
//!
//! This module contains the core domain model types that represent
//! validated timetable data. Identifiers enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod route;
mod stop;
mod stop_time;
mod time;
mod trip;

pub use route::{InvalidRouteId, Route, RouteId};
pub use stop::{InvalidStopId, Stop, StopId};
pub use stop_time::StopTimeEntry;
pub use time::{DayTime, TimeError};
pub use trip::{InvalidTripId, Trip, TripId};
