//! Arrival descriptor formatting.

use crate::domain::DayTime;

/// Error returned when parsing an unrecognized format mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized time format {input:?} (expected \"relative\" or \"absolute\")")]
pub struct UnknownFormat {
    input: String,
}

/// How an arrival is described on the board.
///
/// The mode is parsed once at the program boundary; an unrecognized
/// mode string is a reported error, never a silently empty board.
///
/// # Examples
///
/// ```
/// use bus_board::board::TimeFormat;
/// use bus_board::domain::DayTime;
///
/// let reference = DayTime::parse_hhmm("12:00").unwrap();
/// let arrival = DayTime::parse_hhmm("12:47").unwrap();
///
/// let relative = TimeFormat::parse("relative").unwrap();
/// assert_eq!(relative.describe(reference, arrival), "47min");
///
/// let absolute = TimeFormat::parse("absolute").unwrap();
/// assert_eq!(absolute.describe(reference, arrival), "12:47");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// Whole minutes until arrival, e.g. `47min`.
    Relative,
    /// Clock time of the arrival, e.g. `12:47`.
    Absolute,
}

impl TimeFormat {
    /// Parse a format mode from its query-string form.
    pub fn parse(s: &str) -> Result<Self, UnknownFormat> {
        match s {
            "relative" => Ok(TimeFormat::Relative),
            "absolute" => Ok(TimeFormat::Absolute),
            other => Err(UnknownFormat {
                input: other.to_string(),
            }),
        }
    }

    /// Render one arrival descriptor.
    ///
    /// Relative descriptors use whole minutes, truncating any partial
    /// minute rather than rounding.
    pub fn describe(&self, reference: DayTime, arrival: DayTime) -> String {
        match self {
            TimeFormat::Relative => {
                let minutes = arrival.signed_duration_since(reference).num_minutes();
                format!("{minutes}min")
            }
            TimeFormat::Absolute => arrival.to_string(),
        }
    }
}

impl std::str::FromStr for TimeFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeFormat::parse(s)
    }
}
