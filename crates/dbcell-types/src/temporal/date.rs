use super::fixed_digits;
use chrono::{Datelike, NaiveDate};
use dbcell_diagnostics::ComparisonError;
use std::fmt;
use std::str::FromStr;

/// A valid proleptic Gregorian calendar date
///
/// Ordered by `(year, month, day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date, validating the day against the month and year
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ComparisonError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ComparisonError::parse(format!("{:04}-{:02}-{:02}", year, month, day), "CalendarDate"))
    }

    /// Parse a `YYYY-MM-DD` literal.
    ///
    /// Years outside `0000..=9999` use the expanded form: a sign followed by
    /// at least four digits (`-0001-01-01`, `+10000-01-01`).
    pub fn parse(text: &str) -> Result<Self, ComparisonError> {
        let err = || ComparisonError::parse(text, "CalendarDate");

        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let mut parts = unsigned.split('-');
        let (Some(year), Some(month), Some(day), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(err());
        };
        let year = expanded_year(year).ok_or_else(err)?;
        let year = if negative { -year } else { year };
        let month = fixed_digits(month, 2).ok_or_else(err)?;
        let day = fixed_digits(day, 2).ok_or_else(err)?;

        NaiveDate::from_ymd_opt(year, month, day).map(Self).ok_or_else(err)
    }

    /// Convert from a chrono date
    pub fn from_native(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Convert back to a chrono date
    pub fn to_native(self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        if (0..=9999).contains(&year) {
            write!(f, "{:04}-{:02}-{:02}", year, self.month(), self.day())
        } else {
            write!(f, "{:+05}-{:02}-{:02}", year, self.month(), self.day())
        }
    }
}

/// At least four ASCII digits
fn expanded_year(s: &str) -> Option<i32> {
    if s.len() < 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for CalendarDate {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_native(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.to_native()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let date = CalendarDate::parse("2014-02-28").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2014, 2, 28));
    }

    #[test]
    fn test_parse_rejects_invalid_components() {
        assert!(CalendarDate::parse("2014-13-01").is_err());
        assert!(CalendarDate::parse("2014-02-30").is_err());
        assert!(CalendarDate::parse("2013-02-29").is_err());
        assert!(CalendarDate::parse("2012-02-29").is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for text in ["", "2014", "2014-1-01", "14-01-01", "2014-01-01-01", "2014/01/01", "2014-01-01T"] {
            let err = CalendarDate::parse(text).unwrap_err();
            assert_eq!(err.input, text);
            assert_eq!(err.target, "CalendarDate");
        }
    }

    #[test]
    fn test_ordering() {
        let feb = CalendarDate::parse("2014-02-28").unwrap();
        let mar = CalendarDate::parse("2014-03-01").unwrap();
        assert!(feb < mar);
        assert!(CalendarDate::parse("2013-12-31").unwrap() < feb);
    }

    #[test]
    fn test_display_pads() {
        let date = CalendarDate::new(7, 3, 9).unwrap();
        assert_eq!(date.to_string(), "0007-03-09");
    }

    #[test]
    fn test_expanded_years_round_trip() {
        for (year, text) in [(-1, "-0001-01-01"), (10000, "+10000-01-01"), (-12345, "-12345-01-01")] {
            let date = CalendarDate::new(year, 1, 1).unwrap();
            assert_eq!(date.to_string(), text);
            assert_eq!(CalendarDate::parse(text).unwrap(), date);
        }
        assert_eq!(CalendarDate::parse("+2014-05-24").unwrap().to_string(), "2014-05-24");
        assert!(CalendarDate::parse("-001-01-01").is_err());
        assert!(CalendarDate::parse("--2014-01-01").is_err());
    }

    #[test]
    fn test_native_conversion() {
        let native = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
        let date = CalendarDate::from_native(native);
        assert_eq!(date.to_string(), "2020-01-31");
        assert_eq!(date.to_native(), native);
    }
}
