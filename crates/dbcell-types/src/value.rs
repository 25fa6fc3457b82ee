//! Raw cell values - what a data-source driver hands over for one cell
//!
//! The comparison core never looks inside a value beyond its runtime
//! representation, so this enum mirrors the shapes drivers produce rather
//! than any SQL type system.

use crate::Number;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use num_bigint::BigInt;
use std::fmt;
use uuid::Uuid;

/// A value the driver could only describe by name
///
/// Used for vendor-specific types (geometry, intervals, arrays, ...). Two
/// opaque values are equal when both the type name and the rendering match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpaqueValue {
    /// Driver-side type name
    pub type_name: String,
    /// Textual rendering supplied by the driver
    pub text: String,
}

impl OpaqueValue {
    /// Wrap a source object by its type name and textual form
    pub fn new(type_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The raw content of one cell
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// SQL NULL / absent value
    Null,
    Boolean(bool),
    Number(Number),
    Bytes(Vec<u8>),
    Text(String),
    Uuid(Uuid),
    /// Date without time of day
    Date(NaiveDate),
    /// Time of day without date
    Time(NaiveTime),
    /// Date with time of day
    DateTime(NaiveDateTime),
    /// Unrecognized representation
    Other(OpaqueValue),
}

impl RawValue {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get as Number
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Try to get as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Create an opaque value
    pub fn other(type_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Other(OpaqueValue::new(type_name, text))
    }
}

/// Native textual form, used when no expectation shape applies
impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Bytes(bytes) => {
                write!(f, "[")?;
                for (i, b) in bytes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", b)?;
                }
                write!(f, "]")
            }
            Self::Text(s) => write!(f, "{}", s),
            Self::Uuid(u) => write!(f, "{}", u),
            Self::Date(d) => write!(f, "{}", d),
            Self::Time(t) => write!(f, "{}", t),
            Self::DateTime(dt) => write!(f, "{}", dt),
            Self::Other(o) => write!(f, "{}", o),
        }
    }
}

macro_rules! raw_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for RawValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

raw_from! {
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
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => DateTime,
    OpaqueValue => Other,
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
