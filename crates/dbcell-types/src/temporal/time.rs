use super::fixed_digits;
use chrono::{NaiveTime, Timelike};
use dbcell_diagnostics::ComparisonError;
use std::fmt;
use std::str::FromStr;

const MAX_NANOSECOND: u32 = 999_999_999;

/// A time of day with nanosecond precision
///
/// Ordered by `(hour, minute, second, nanosecond)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// `00:00:00`
    pub const MIDNIGHT: Self = Self(NaiveTime::MIN);

    /// Create a time, validating every component
    pub fn new(hour: u32, minute: u32, second: u32, nanosecond: u32) -> Result<Self, ComparisonError> {
        if nanosecond > MAX_NANOSECOND || second > 59 {
            return Err(Self::invalid(hour, minute, second, nanosecond));
        }
        NaiveTime::from_hms_nano_opt(hour, minute, second, nanosecond)
            .map(Self)
            .ok_or_else(|| Self::invalid(hour, minute, second, nanosecond))
    }

    fn invalid(hour: u32, minute: u32, second: u32, nanosecond: u32) -> ComparisonError {
        ComparisonError::parse(
            format!("{:02}:{:02}:{:02}.{:09}", hour, minute, second, nanosecond),
            "TimeOfDay",
        )
    }

    /// Parse a `HH:MM`, `HH:MM:SS` or `HH:MM:SS.f` literal.
    ///
    /// The fraction has 1 to 9 digits and is read as a fraction of a second.
    pub fn parse(text: &str) -> Result<Self, ComparisonError> {
        let err = || ComparisonError::parse(text, "TimeOfDay");

        let (clock, fraction) = match text.split_once('.') {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (text, None),
        };

        let mut parts = clock.split(':');
        let hour = parts.next().and_then(|h| fixed_digits(h, 2)).ok_or_else(err)?;
        let minute = parts.next().and_then(|m| fixed_digits(m, 2)).ok_or_else(err)?;
        let second = match parts.next() {
            Some(s) => fixed_digits(s, 2).ok_or_else(err)?,
            None if fraction.is_none() => 0,
            None => return Err(err()),
        };
        if parts.next().is_some() {
            return Err(err());
        }

        let nanosecond = match fraction {
            Some(f) => parse_fraction(f).ok_or_else(err)?,
            None => 0,
        };

        Self::new(hour, minute, second, nanosecond).map_err(|_| err())
    }

    /// Convert from a chrono time.
    ///
    /// chrono encodes a leap second as a nanosecond overflow of second 59;
    /// that instant is pinned to the last representable nanosecond.
    pub fn from_native(time: NaiveTime) -> Self {
        if time.nanosecond() > MAX_NANOSECOND {
            return Self(time.with_nanosecond(MAX_NANOSECOND).unwrap_or(time));
        }
        Self(time)
    }

    /// Convert back to a chrono time
    pub fn to_native(self) -> NaiveTime {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.0.nanosecond()
    }

    pub fn is_midnight(&self) -> bool {
        *self == Self::MIDNIGHT
    }
}

/// Read 1 to 9 digits as nanoseconds, right-padding with zeros
fn parse_fraction(fraction: &str) -> Option<u32> {
    if fraction.is_empty() || fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits: u32 = fraction.parse().ok()?;
    Some(digits * 10u32.pow(9 - fraction.len() as u32))
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())?;
        if self.nanosecond() != 0 {
            write!(f, ".{:09}", self.nanosecond())?;
        }
        Ok(())
    }
}

impl FromStr for TimeOfDay {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::from_native(time)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        time.to_native()
    }
}
