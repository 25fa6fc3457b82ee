//! Value kinds and classification
//!
//! Every raw value falls into exactly one [`Kind`]. The kind decides which
//! expectation forms have a defined conversion; anything else is a plain
//! mismatch.

use crate::{ExpectedForm, RawValue};
use std::fmt;

/// Semantic kind of a stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Kind {
    Boolean,
    Number,
    Bytes,
    Text,
    Uuid,
    Date,
    Time,
    DateTime,
    /// Null, or a representation the classifier does not know
    NotIdentified,
}

impl Kind {
    /// All kinds, in classification priority order
    pub const ALL: [Kind; 9] = [
        Kind::NotIdentified,
        Kind::Boolean,
        Kind::Number,
        Kind::Bytes,
        Kind::Uuid,
        Kind::Date,
        Kind::Time,
        Kind::DateTime,
        Kind::Text,
    ];

    /// Expectation forms this kind can be compared with.
    ///
    /// `Null` is accepted everywhere and only matches a null raw value.
    pub fn accepted_forms(self) -> &'static [ExpectedForm] {
        use ExpectedForm as F;
        match self {
            Kind::Boolean => &[F::Null, F::Boolean],
            Kind::Number => &[F::Null, F::Number, F::Text],
            Kind::Bytes => &[F::Null, F::Bytes],
            Kind::Text => &[F::Null, F::Text],
            Kind::Uuid => &[F::Null, F::Uuid, F::Text],
            Kind::Date => &[F::Null, F::Date, F::DateTime, F::Text, F::NativeDate],
            Kind::Time => &[F::Null, F::Time, F::Text, F::NativeTime],
            Kind::DateTime => &[F::Null, F::DateTime, F::Date, F::Text, F::NativeDateTime],
            Kind::NotIdentified => &[F::Null],
        }
    }

    /// Whether an expectation of `form` has a defined conversion for this kind
    pub fn accepts(self, form: ExpectedForm) -> bool {
        self.accepted_forms().contains(&form)
    }

    /// Whether this kind is one of the temporal kinds
    pub fn is_temporal(self) -> bool {
        matches!(self, Kind::Date | Kind::Time | Kind::DateTime)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Boolean => write!(f, "BOOLEAN"),
            Kind::Number => write!(f, "NUMBER"),
            Kind::Bytes => write!(f, "BYTES"),
            Kind::Text => write!(f, "TEXT"),
            Kind::Uuid => write!(f, "UUID"),
            Kind::Date => write!(f, "DATE"),
            Kind::Time => write!(f, "TIME"),
            Kind::DateTime => write!(f, "DATE_TIME"),
            Kind::NotIdentified => write!(f, "NOT_IDENTIFIED"),
        }
    }
}

/// Classify a raw value. Total and pure.
pub fn classify(raw: &RawValue) -> Kind {
    match raw {
        RawValue::Null | RawValue::Other(_) => Kind::NotIdentified,
        RawValue::Boolean(_) => Kind::Boolean,
        RawValue::Number(_) => Kind::Number,
        RawValue::Bytes(_) => Kind::Bytes,
        RawValue::Uuid(_) => Kind::Uuid,
        RawValue::Date(_) => Kind::Date,
        RawValue::Time(_) => Kind::Time,
        RawValue::DateTime(_) => Kind::DateTime,
        RawValue::Text(_) => Kind::Text,
    }
}

/// First value in a column whose kind differs from the expected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindMismatch {
    /// Position of the value in the column
    pub index: usize,
    /// Kind the value was classified as
    pub found: Kind,
    /// Kind the column was expected to hold
    pub expected: Kind,
}

impl fmt::Display for KindMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value at index {} is of kind {} instead of {}",
            self.index, self.found, self.expected
        )
    }
}

/// Check that every value in a column has the expected kind.
///
/// In lenient mode, values classified [`Kind::NotIdentified`] (typically
/// NULLs) are skipped.
pub fn check_kind(values: &[RawValue], expected: Kind, lenient: bool) -> Option<KindMismatch> {
    values.iter().enumerate().find_map(|(index, value)| {
        let found = classify(value);
        let tolerated = lenient && found == Kind::NotIdentified;
        (found != expected && !tolerated).then_some(KindMismatch {
            index,
            found,
            expected,
        })
    })
}

macro_rules! kind_predicates {
    ($($name:ident => $kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("Check that every value is of kind `", stringify!($kind), "`")]
            pub fn $name(values: &[RawValue], lenient: bool) -> Option<KindMismatch> {
                check_kind(values, Kind::$kind, lenient)
            }
        )*
    };
}

kind_predicates! {
    is_boolean => Boolean,
    is_number => Number,
    is_bytes => Bytes,
    is_text => Text,
    is_uuid => Uuid,
    is_date => Date,
    is_time => Time,
    is_date_time => DateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;
    use chrono::NaiveDate;

    #[test]
    fn test_classify() {
        assert_eq!(classify(&RawValue::Null), Kind::NotIdentified);
        assert_eq!(classify(&RawValue::other("point", "(1,2)")), Kind::NotIdentified);
        assert_eq!(classify(&RawValue::Boolean(false)), Kind::Boolean);
        assert_eq!(classify(&RawValue::Number(Number::F32(1.5))), Kind::Number);
        assert_eq!(classify(&RawValue::Bytes(vec![])), Kind::Bytes);
        assert_eq!(classify(&RawValue::Text(String::new())), Kind::Text);
        assert_eq!(classify(&RawValue::Uuid(uuid::Uuid::nil())), Kind::Uuid);
        let date = NaiveDate::from_ymd_opt(2014, 5, 24).unwrap();
        assert_eq!(classify(&RawValue::Date(date)), Kind::Date);
        assert_eq!(classify(&RawValue::DateTime(date.and_hms_opt(1, 2, 3).unwrap())), Kind::DateTime);
    }

    #[test]
    fn test_accepts() {
        assert!(Kind::Number.accepts(ExpectedForm::Text));
        assert!(!Kind::Text.accepts(ExpectedForm::Number));
        assert!(Kind::DateTime.accepts(ExpectedForm::Date));
        assert!(!Kind::Date.accepts(ExpectedForm::NativeDateTime));
        assert!(Kind::ALL.iter().all(|k| k.accepts(ExpectedForm::Null)));
        assert_eq!(Kind::ALL.iter().filter(|k| k.is_temporal()).count(), 3);
    }

    #[test]
    fn test_check_kind() {
        let column = vec![RawValue::from(1i32), RawValue::Null, RawValue::from("x")];

        let mismatch = check_kind(&column, Kind::Number, false).unwrap();
        assert_eq!(mismatch.index, 1);
        assert_eq!(mismatch.found, Kind::NotIdentified);

        let mismatch = is_number(&column, true).unwrap();
        assert_eq!(mismatch.index, 2);
        assert_eq!(mismatch.found, Kind::Text);
        assert_eq!(mismatch.to_string(), "value at index 2 is of kind TEXT instead of NUMBER");

        assert_eq!(is_number(&column[..2], true), None);
    }
}
