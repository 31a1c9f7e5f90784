//! Schedule time handling for GTFS timetables.
//!
//! GTFS provides stop times as seconds since midnight, written in the
//! feed as `HH:MM:SS` strings. Trips that run past midnight use hour
//! values of 24 and beyond (`25:10:00`), so this type keeps the raw
//! second count and never wraps it back into a 24-hour clock.

use chrono::Duration;
use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A scheduled time of day, stored as seconds since midnight.
///
/// Values at or past 86400 are valid: they denote calls scheduled past
/// midnight on a trip that started the previous service day. Display
/// renders the `HH:MM` clock form, keeping the extended hour count
/// (`25:10`) rather than wrapping.
///
/// # Examples
///
/// ```
/// use bus_board::domain::DayTime;
///
/// let noon = DayTime::parse_hms("12:00:00").unwrap();
/// assert_eq!(noon.to_string(), "12:00");
///
/// let late = DayTime::parse_hms("25:10:00").unwrap();
/// assert_eq!(late.hour(), 25);
/// assert!(late > noon);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayTime {
    seconds: u32,
}

impl DayTime {
    /// Create a time from a raw seconds-since-midnight count.
    pub fn from_seconds(seconds: u32) -> Self {
        Self { seconds }
    }

    /// Create a time from hour/minute/second components.
    ///
    /// The hour may exceed 23; minutes and seconds must be 0-59.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }
        Ok(Self {
            seconds: hour * 3600 + minute * 60 + second,
        })
    }

    /// Parse a GTFS `H:MM:SS` / `HH:MM:SS` time string.
    ///
    /// Hours of 24 and above are accepted (trips past midnight).
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_board::domain::DayTime;
    ///
    /// assert!(DayTime::parse_hms("00:00:00").is_ok());
    /// assert!(DayTime::parse_hms("9:30:00").is_ok());
    /// assert!(DayTime::parse_hms("25:10:00").is_ok());
    ///
    /// assert!(DayTime::parse_hms("12:00").is_err());
    /// assert!(DayTime::parse_hms("12:60:00").is_err());
    /// ```
    pub fn parse_hms(s: &str) -> Result<Self, TimeError> {
        let mut parts = s.split(':');
        let (hour, minute, second) = match (parts.next(), parts.next(), parts.next(), parts.next())
        {
            (Some(h), Some(m), Some(sec), None) => (h, m, sec),
            _ => return Err(TimeError::new("expected HH:MM:SS format")),
        };

        if hour.is_empty() || hour.len() > 2 {
            return Err(TimeError::new("hour must be one or two digits"));
        }
        let hour =
            parse_digits(hour.as_bytes()).ok_or_else(|| TimeError::new("invalid hour digits"))?;

        let minute = parse_two_digits(minute.as_bytes())
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = parse_two_digits(second.as_bytes())
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        Ok(Self {
            seconds: hour * 3600 + minute * 60 + second,
        })
    }

    /// Parse a strict `HH:MM` clock time (hour 0-23).
    ///
    /// This is the format accepted on the command line for the query's
    /// reference time, where extended hours make no sense.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_board::domain::DayTime;
    ///
    /// let t = DayTime::parse_hhmm("14:30").unwrap();
    /// assert_eq!(t.to_string(), "14:30");
    ///
    /// assert!(DayTime::parse_hhmm("1430").is_err());
    /// assert!(DayTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Ok(Self {
            seconds: hour * 3600 + minute * 60,
        })
    }

    /// Returns the raw seconds-since-midnight count.
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Returns the hour component (may exceed 23).
    pub fn hour(&self) -> u32 {
        self.seconds / 3600
    }

    /// Returns the minute component (0-59).
    pub fn minute(&self) -> u32 {
        (self.seconds / 60) % 60
    }

    /// Returns the second component (0-59).
    pub fn second(&self) -> u32 {
        self.seconds % 60
    }

    /// Add a duration to this time.
    ///
    /// Returns `None` on overflow or if the result would be before
    /// midnight.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        let seconds = i64::from(self.seconds).checked_add(duration.num_seconds())?;
        u32::try_from(seconds).ok().map(DayTime::from_seconds)
    }

    /// Returns the duration between two times.
    ///
    /// Returns a negative duration if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        Duration::seconds(i64::from(self.seconds) - i64::from(other.seconds))
    }
}

impl Ord for DayTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds.cmp(&other.seconds)
    }
}

impl PartialOrd for DayTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DayTime({:02}:{:02}:{:02})",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse exactly two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    parse_digits(bytes)
}

/// Parse a run of ASCII digit bytes into a u32.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }
    bytes.iter().try_fold(0u32, |acc, &b| {
        let digit = (b as char).to_digit(10)?;
        Some(acc * 10 + digit)
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_hms()(hour in 0u32..30, minute in 0u32..60, second in 0u32..60) -> String {
            format!("{:02}:{:02}:{:02}", hour, minute, second)
        }
    }

    proptest! {
        /// Any valid HH:MM:SS string parses successfully
        #[test]
        fn valid_hms_parses(s in valid_hms()) {
            prop_assert!(DayTime::parse_hms(&s).is_ok());
        }

        /// Parsing then re-rendering components roundtrips
        #[test]
        fn parse_component_roundtrip(hour in 0u32..30, minute in 0u32..60, second in 0u32..60) {
            let s = format!("{:02}:{:02}:{:02}", hour, minute, second);
            let t = DayTime::parse_hms(&s).unwrap();
            prop_assert_eq!(t.hour(), hour);
            prop_assert_eq!(t.minute(), minute);
            prop_assert_eq!(t.second(), second);
        }

        /// Ordering agrees with the raw second count
        #[test]
        fn ordering_matches_seconds(a in 0u32..200_000, b in 0u32..200_000) {
            let ta = DayTime::from_seconds(a);
            let tb = DayTime::from_seconds(b);
            prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
        }

        /// Duration between is consistent with ordering
        #[test]
        fn duration_ordering_consistent(a in 0u32..200_000, b in 0u32..200_000) {
            let ta = DayTime::from_seconds(a);
            let tb = DayTime::from_seconds(b);
            let dur = tb.signed_duration_since(ta);

            match ta.cmp(&tb) {
                std::cmp::Ordering::Less => prop_assert!(dur > Duration::zero()),
                std::cmp::Ordering::Greater => prop_assert!(dur < Duration::zero()),
                std::cmp::Ordering::Equal => prop_assert!(dur == Duration::zero()),
            }
        }

        /// Adding then subtracting the same duration returns the original
        #[test]
        fn add_sub_identity(seconds in 0u32..200_000, minutes in 0i64..1000) {
            let t = DayTime::from_seconds(seconds);
            let dur = Duration::minutes(minutes);

            if let Some(added) = t.checked_add(dur) {
                if let Some(back) = added.checked_add(-dur) {
                    prop_assert_eq!(t, back);
                }
            }
        }

        /// Invalid minutes are rejected
        #[test]
        fn invalid_minute_rejected(hour in 0u32..30, minute in 60u32..100) {
            let s = format!("{:02}:{:02}:00", hour, minute);
            prop_assert!(DayTime::parse_hms(&s).is_err());
        }
    }
}
