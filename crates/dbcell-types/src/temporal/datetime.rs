use super::{CalendarDate, TimeOfDay};
use chrono::NaiveDateTime;
use dbcell_diagnostics::ComparisonError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A calendar date combined with a time of day
///
/// A stamp remembers whether it was built from a date alone. That flag only
/// affects [`Display`](fmt::Display): a date-only stamp at midnight prints as
/// `YYYY-MM-DD`. It never takes part in equality, ordering or hashing.
#[derive(Debug, Clone, Copy)]
pub struct DateTimeStamp {
    date: CalendarDate,
    time: TimeOfDay,
    date_only: bool,
}

impl DateTimeStamp {
    /// Combine a date and a time
    pub fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self {
            date,
            time,
            date_only: false,
        }
    }

    /// Stamp at midnight that prints as a bare date
    pub fn of_date(date: CalendarDate) -> Self {
        Self {
            date,
            time: TimeOfDay::MIDNIGHT,
            date_only: true,
        }
    }

    /// Stamp at midnight that always prints its time component
    pub fn at_midnight(date: CalendarDate) -> Self {
        Self::new(date, TimeOfDay::MIDNIGHT)
    }

    /// Whether `text` carries a time part after the date
    pub fn has_time_separator(text: &str) -> bool {
        text.contains(['T', ' '])
    }

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS[.f]]` or the same with a
    /// space separator.
    pub fn parse(text: &str) -> Result<Self, ComparisonError> {
        let err = |_| ComparisonError::parse(text, "DateTimeStamp");

        match text.split_once(['T', ' ']) {
            Some((date, time)) => {
                let date = CalendarDate::parse(date).map_err(err)?;
                let time = TimeOfDay::parse(time).map_err(err)?;
                Ok(Self::new(date, time))
            }
            None => CalendarDate::parse(text).map(Self::of_date).map_err(err),
        }
    }

    /// Convert from a chrono timestamp
    pub fn from_native(stamp: NaiveDateTime) -> Self {
        Self::new(
            CalendarDate::from_native(stamp.date()),
            TimeOfDay::from_native(stamp.time()),
        )
    }

    /// Convert back to a chrono timestamp
    pub fn to_native(self) -> NaiveDateTime {
        self.date.to_native().and_time(self.time.to_native())
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Whether this stamp was built from a date alone
    pub fn is_date_only(&self) -> bool {
        self.date_only
    }
}

impl PartialEq for DateTimeStamp {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.time == other.time
    }
}

impl Eq for DateTimeStamp {}

impl Hash for DateTimeStamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
        self.time.hash(state);
    }
}

impl PartialOrd for DateTimeStamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTimeStamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.time.cmp(&other.time))
    }
}

impl fmt::Display for DateTimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.date_only && self.time.is_midnight() {
            write!(f, "{}", self.date)
        } else {
            write!(f, "{}T{}", self.date, self.time)
        }
    }
}

impl FromStr for DateTimeStamp {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDateTime> for DateTimeStamp {
    fn from(stamp: NaiveDateTime) -> Self {
        Self::from_native(stamp)
    }
}

impl From<CalendarDate> for DateTimeStamp {
    fn from(date: CalendarDate) -> Self {
        Self::of_date(date)
    }
}

impl From<DateTimeStamp> for NaiveDateTime {
    fn from(stamp: DateTimeStamp) -> Self {
        stamp.to_native()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> CalendarDate {
        CalendarDate::parse(text).unwrap()
    }

    #[test]
    fn test_parse_with_time() {
        let stamp = DateTimeStamp::parse("2014-05-24T09:46:30.000000100").unwrap();
        assert_eq!(stamp.date(), date("2014-05-24"));
        assert_eq!(stamp.time().nanosecond(), 100);
        assert!(!stamp.is_date_only());
    }

    #[test]
    fn test_parse_space_separator() {
        let t = DateTimeStamp::parse("2014-05-24 09:46:30").unwrap();
        let s = DateTimeStamp::parse("2014-05-24T09:46:30").unwrap();
        assert_eq!(t, s);
        assert_eq!(t.to_string(), "2014-05-24T09:46:30");
    }

    #[test]
    fn test_parse_date_only() {
        let stamp = DateTimeStamp::parse("2014-05-24").unwrap();
        assert!(stamp.is_date_only());
        assert!(stamp.time().is_midnight());
        assert_eq!(stamp.to_string(), "2014-05-24");
    }

    #[test]
    fn test_parse_errors_name_the_whole_text() {
        for text in ["2014-05-24T", "2014-05-24T25:00", "2014-5-24T10:00", "T10:00", "garbage"] {
            let err = DateTimeStamp::parse(text).unwrap_err();
            assert_eq!(err.input, text);
            assert_eq!(err.target, "DateTimeStamp");
        }
    }

    #[test]
    fn test_provenance_ignored_by_equality() {
        let d = date("2014-05-24");
        assert_eq!(DateTimeStamp::of_date(d), DateTimeStamp::at_midnight(d));
        assert_eq!(DateTimeStamp::of_date(d).to_string(), "2014-05-24");
        assert_eq!(DateTimeStamp::at_midnight(d).to_string(), "2014-05-24T00:00:00");
    }

    #[test]
    fn test_ordering_date_first() {
        let a = DateTimeStamp::parse("2014-05-24T23:59:59").unwrap();
        let b = DateTimeStamp::parse("2014-05-25T00:00:00").unwrap();
        let c = DateTimeStamp::parse("2014-05-25T00:00:01").unwrap();
        assert!(a < b && b < c);
        assert_eq!(DateTimeStamp::parse("2014-05-25").unwrap().cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_native_round_trip() {
        let native = date("2020-02-29")
            .to_native()
            .and_hms_nano_opt(12, 30, 15, 42)
            .unwrap();
        let stamp = DateTimeStamp::from_native(native);
        assert_eq!(stamp.to_string(), "2020-02-29T12:30:15.000000042");
        assert_eq!(stamp.to_native(), native);
    }
}
