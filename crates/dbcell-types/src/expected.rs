//! Expected values - the caller side of a comparison

use crate::{CalendarDate, DateTimeStamp, Number, TimeOfDay};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use num_bigint::BigInt;
use std::fmt;
use uuid::Uuid;

/// Representation an expectation was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedForm {
    Null,
    Boolean,
    Number,
    Bytes,
    Text,
    Uuid,
    Date,
    Time,
    DateTime,
    NativeDate,
    NativeTime,
    NativeDateTime,
}

impl fmt::Display for ExpectedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Bytes => "bytes",
            Self::Text => "text",
            Self::Uuid => "uuid",
            Self::Date => "CalendarDate",
            Self::Time => "TimeOfDay",
            Self::DateTime => "DateTimeStamp",
            Self::NativeDate => "NaiveDate",
            Self::NativeTime => "NaiveTime",
            Self::NativeDateTime => "NaiveDateTime",
        };
        write!(f, "{}", name)
    }
}

/// A value supplied by the caller to compare a cell against
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    Null,
    Boolean(bool),
    Number(Number),
    Bytes(Vec<u8>),
    Text(String),
    Uuid(Uuid),
    Date(CalendarDate),
    Time(TimeOfDay),
    DateTime(DateTimeStamp),
    NativeDate(NaiveDate),
    NativeTime(NaiveTime),
    NativeDateTime(NaiveDateTime),
}

impl Expected {
    /// Get the representation tag of this expectation
    pub fn form(&self) -> ExpectedForm {
        match self {
            Self::Null => ExpectedForm::Null,
            Self::Boolean(_) => ExpectedForm::Boolean,
            Self::Number(_) => ExpectedForm::Number,
            Self::Bytes(_) => ExpectedForm::Bytes,
            Self::Text(_) => ExpectedForm::Text,
            Self::Uuid(_) => ExpectedForm::Uuid,
            Self::Date(_) => ExpectedForm::Date,
            Self::Time(_) => ExpectedForm::Time,
            Self::DateTime(_) => ExpectedForm::DateTime,
            Self::NativeDate(_) => ExpectedForm::NativeDate,
            Self::NativeTime(_) => ExpectedForm::NativeTime,
            Self::NativeDateTime(_) => ExpectedForm::NativeDateTime,
        }
    }

    /// Check if this expectation is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Bytes(bytes) => write!(f, "{:?}", bytes),
            Self::Text(s) => write!(f, "{}", s),
            Self::Uuid(u) => write!(f, "{}", u),
            Self::Date(d) => write!(f, "{}", d),
            Self::Time(t) => write!(f, "{}", t),
            Self::DateTime(dt) => write!(f, "{}", dt),
            Self::NativeDate(d) => write!(f, "{}", d),
            Self::NativeTime(t) => write!(f, "{}", t),
            Self::NativeDateTime(dt) => write!(f, "{}", dt),
        }
    }
}

macro_rules! expected_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Expected {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

expected_from! {
    bool => Boolean,
    i8 => Number,
    i16 => Number,
    i32 => Number,
    i64 => Number,
    f32 => Number,
    f64 => Number,
    BigInt => Number,
    bigdecimal::BigDecimal => Number,
    rust_decimal::Decimal => Number,
    Number => Number,
    Vec<u8> => Bytes,
    &[u8] => Bytes,
    String => Text,
    &str => Text,
    Uuid => Uuid,
    CalendarDate => Date,
    TimeOfDay => Time,
    DateTimeStamp => DateTime,
    NaiveDate => NativeDate,
    NaiveTime => NativeTime,
    NaiveDateTime => NativeDateTime,
}

impl<T: Into<Expected>> From<Option<T>> for Expected {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form() {
        assert_eq!(Expected::from(1i32).form(), ExpectedForm::Number);
        assert_eq!(Expected::from("x").form(), ExpectedForm::Text);
        assert_eq!(Expected::from(None::<bool>).form(), ExpectedForm::Null);
        let date = CalendarDate::parse("2014-05-24").unwrap();
        assert_eq!(Expected::from(date).form(), ExpectedForm::Date);
        assert_eq!(Expected::from(date.to_native()).form(), ExpectedForm::NativeDate);
    }
}
