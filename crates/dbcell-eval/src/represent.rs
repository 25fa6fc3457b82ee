//! Representation formatter
//!
//! When a comparison fails, the stored value is rendered in the shape the
//! caller used for the expectation, so a diagnostic reads
//! `expected 2014-05-24T10:00:00 but was 2014-05-24T00:00:00` rather than
//! mixing a timestamp literal with a bare date.

use dbcell_types::{
    CalendarDate, DateTimeStamp, Expected, ExpectedForm, RawValue, TimeOfDay, TypedValue,
};
use std::fmt;

/// Display form of a stored value
#[derive(Debug, Clone, PartialEq)]
pub enum Representation {
    /// Rendered as text, for textual expectations
    Text(String),
    Date(CalendarDate),
    Time(TimeOfDay),
    DateTime(DateTimeStamp),
    /// The value's own native form
    Raw(RawValue),
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Date(d) => write!(f, "{}", d),
            Self::Time(t) => write!(f, "{}", t),
            Self::DateTime(dt) => write!(f, "{}", dt),
            Self::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

/// Render `value` in the shape of `expected`.
///
/// A date compared with text is special-cased ahead of the general dispatch:
/// the text decides whether the date is shown with a time part
/// (`2014-05-24T00:00:00`) or without (`2014-05-24`).
pub fn represent(value: &TypedValue, expected: &Expected) -> Representation {
    if let (RawValue::Date(date), Expected::Text(text)) = (value.raw(), expected) {
        let date = CalendarDate::from_native(*date);
        let text = if DateTimeStamp::has_time_separator(text) {
            DateTimeStamp::at_midnight(date).to_string()
        } else {
            date.to_string()
        };
        return Representation::Text(text);
    }
    represent_as(value, expected.form())
}

/// Render `value` for an expectation of the given form
pub fn represent_as(value: &TypedValue, form: ExpectedForm) -> Representation {
    match (value.raw(), form) {
        (RawValue::Date(date), ExpectedForm::Date) => Representation::Date(CalendarDate::from_native(*date)),
        (RawValue::Date(date), ExpectedForm::DateTime) => {
            Representation::DateTime(DateTimeStamp::at_midnight(CalendarDate::from_native(*date)))
        }
        (RawValue::Date(date), ExpectedForm::Text) => {
            Representation::Text(DateTimeStamp::of_date(CalendarDate::from_native(*date)).to_string())
        }
        (RawValue::Time(time), ExpectedForm::Text) => {
            Representation::Text(TimeOfDay::from_native(*time).to_string())
        }
        (RawValue::Time(time), _) => Representation::Time(TimeOfDay::from_native(*time)),
        (RawValue::DateTime(stamp), ExpectedForm::Text) => {
            Representation::Text(DateTimeStamp::from_native(*stamp).to_string())
        }
        (RawValue::DateTime(stamp), _) => Representation::DateTime(DateTimeStamp::from_native(*stamp)),
        (raw @ (RawValue::Number(_) | RawValue::Uuid(_)), ExpectedForm::Text) => {
            Representation::Text(raw.to_string())
        }
        (raw, _) => Representation::Raw(raw.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn date_value() -> TypedValue {
        TypedValue::new(NaiveDate::from_ymd_opt(2014, 5, 24).unwrap())
    }

    #[test]
    fn test_date_follows_text_shape() {
        let with_time = represent(&date_value(), &Expected::from("2014-05-24T10:00"));
        assert_eq!(with_time, Representation::Text("2014-05-24T00:00:00".to_string()));

        let bare = represent(&date_value(), &Expected::from("2014-05-25"));
        assert_eq!(bare, Representation::Text("2014-05-24".to_string()));
    }

    #[test]
    fn test_date_follows_temporal_shape() {
        let date = CalendarDate::parse("2014-05-24").unwrap();
        assert_eq!(represent(&date_value(), &Expected::from(date)), Representation::Date(date));
        assert_eq!(
            represent(&date_value(), &Expected::from(DateTimeStamp::of_date(date))).to_string(),
            "2014-05-24T00:00:00"
        );
        assert!(matches!(represent(&date_value(), &Expected::from(1i32)), Representation::Raw(_)));
    }

    #[test]
    fn test_time_is_always_normalized() {
        let value = TypedValue::new(NaiveTime::from_hms_opt(9, 46, 0).unwrap());
        assert_eq!(represent(&value, &Expected::from("09:46")), Representation::Text("09:46:00".to_string()));
        assert!(matches!(represent(&value, &Expected::Null), Representation::Time(_)));
    }

    #[test]
    fn test_number_and_text() {
        let value = TypedValue::new(42i32);
        assert_eq!(represent(&value, &Expected::from("43")), Representation::Text("42".to_string()));
        assert_eq!(represent(&value, &Expected::from(43i64)), Representation::Raw(RawValue::from(42i32)));

        let text = TypedValue::new("abc");
        assert_eq!(represent(&text, &Expected::from("abd")).to_string(), "abc");
    }
}
