//! Comparison engine
//!
//! Implements: equals, compare_ordinal
//!
//! Dispatch is a single match on the stored value, one arm per kind. Every
//! arm only handles the expectation forms its kind accepts (see
//! [`dbcell_types::Kind::accepted_forms`]); any other pairing is a plain mismatch.

use dbcell_diagnostics::{ComparisonError, Operation, Result};
use dbcell_types::{CalendarDate, DateTimeStamp, Expected, Number, RawValue, TimeOfDay, TypedValue};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::numeric::{numeric_cmp, numeric_eq};

/// Check whether a stored value equals an expectation.
///
/// A null expectation matches only a null value. An expectation whose form
/// has no defined conversion for the value's kind yields `Ok(false)`. An
/// error is raised only when a textual expectation cannot be parsed into the
/// family implied by the value, or a numeric conversion would lose precision.
pub fn equals(value: &TypedValue, expected: &Expected) -> Result<bool> {
    let kind = value.kind();
    let form = expected.form();

    if expected.is_null() {
        return Ok(value.raw().is_null());
    }
    if !kind.accepts(form) {
        log::debug!("no conversion from {} to {}, reporting a mismatch", form, kind);
        return Ok(false);
    }
    log::trace!("comparing {} value <{}> with {} <{}>", kind, value, form, expected);

    let result = match value.raw() {
        RawValue::Boolean(actual) => boolean_equals(*actual, expected),
        RawValue::Number(actual) => number_equals(actual, expected),
        RawValue::Bytes(actual) => Ok(bytes_equal(actual, expected)),
        RawValue::Text(actual) => Ok(matches!(expected, Expected::Text(e) if e == actual)),
        RawValue::Uuid(actual) => uuid_equals(actual, expected),
        RawValue::Date(actual) => date_equals(CalendarDate::from_native(*actual), expected),
        RawValue::Time(actual) => time_equals(TimeOfDay::from_native(*actual), expected),
        RawValue::DateTime(actual) => date_time_equals(DateTimeStamp::from_native(*actual), expected),
        RawValue::Null | RawValue::Other(_) => Ok(false),
    };
    result.map_err(|e| e.during(Operation::Equals))
}

fn boolean_equals(actual: bool, expected: &Expected) -> Result<bool> {
    Ok(matches!(expected, Expected::Boolean(e) if *e == actual))
}

fn number_equals(actual: &Number, expected: &Expected) -> Result<bool> {
    match expected {
        Expected::Number(e) => numeric_eq(actual, e),
        Expected::Text(text) => {
            let parsed = Number::parse_as(text, actual.family()).map_err(|e| e.with_actual(actual))?;
            numeric_eq(actual, &parsed)
        }
        _ => Ok(false),
    }
}

fn bytes_equal(actual: &[u8], expected: &Expected) -> bool {
    match expected {
        Expected::Bytes(e) => actual.len() == e.len() && actual.iter().zip(e).all(|(a, b)| a == b),
        _ => false,
    }
}

fn uuid_equals(actual: &Uuid, expected: &Expected) -> Result<bool> {
    match expected {
        Expected::Uuid(e) => Ok(e == actual),
        Expected::Text(text) => {
            let parsed = Uuid::parse_str(text)
                .map_err(|_| ComparisonError::parse(text.as_str(), "UUID").with_actual(actual))?;
            Ok(parsed == *actual)
        }
        _ => Ok(false),
    }
}

fn date_equals(actual: CalendarDate, expected: &Expected) -> Result<bool> {
    match expected {
        Expected::Date(e) => Ok(actual == *e),
        Expected::DateTime(e) => Ok(DateTimeStamp::of_date(actual) == *e),
        Expected::NativeDate(e) => Ok(actual == CalendarDate::from_native(*e)),
        Expected::Text(text) if DateTimeStamp::has_time_separator(text) => {
            let parsed = DateTimeStamp::parse(text).map_err(|e| e.with_actual(actual))?;
            Ok(DateTimeStamp::of_date(actual) == parsed)
        }
        Expected::Text(text) => {
            let parsed = CalendarDate::parse(text).map_err(|e| e.with_actual(actual))?;
            Ok(actual == parsed)
        }
        _ => Ok(false),
    }
}

fn time_equals(actual: TimeOfDay, expected: &Expected) -> Result<bool> {
    match expected {
        Expected::Time(e) => Ok(actual == *e),
        Expected::NativeTime(e) => Ok(actual == TimeOfDay::from_native(*e)),
        Expected::Text(text) => {
            let parsed = TimeOfDay::parse(text).map_err(|e| e.with_actual(actual))?;
            Ok(actual == parsed)
        }
        _ => Ok(false),
    }
}

/// A date expectation must match the stamp at exactly midnight
fn date_time_equals(actual: DateTimeStamp, expected: &Expected) -> Result<bool> {
    match expected {
        Expected::DateTime(e) => Ok(actual == *e),
        Expected::Date(e) => Ok(actual == DateTimeStamp::of_date(*e)),
        Expected::NativeDateTime(e) => Ok(actual == DateTimeStamp::from_native(*e)),
        Expected::Text(text) => {
            let parsed = DateTimeStamp::parse(text).map_err(|e| e.with_actual(actual))?;
            Ok(actual == parsed)
        }
        _ => Ok(false),
    }
}

/// Order a stored value against a numeric expectation.
///
/// Numbers follow the comparison ladder. Text can be ordered against an
/// arbitrary-precision expectation when it parses in that family. Anything
/// else, and an unordered pair (NaN), is an error.
pub fn compare_ordinal(value: &TypedValue, expected: &Number) -> Result<Ordering> {
    let family = expected.family();
    let ordering = match value.raw() {
        RawValue::Number(actual) => numeric_cmp(actual, expected),
        RawValue::Text(text) if family.is_arbitrary_precision() => {
            Number::parse_as(text, family).and_then(|parsed| numeric_cmp(&parsed, expected))
        }
        raw => {
            log::debug!("{} value <{}> cannot be ordered against {}", value.kind(), raw, expected);
            return Err(ComparisonError::not_ordered(raw, family.to_string()).with_actual(expected));
        }
    }
    .map_err(|e| e.during(Operation::CompareOrdinal))?;

    ordering.ok_or_else(|| ComparisonError::not_ordered(value, family.to_string()).with_actual(expected))
}

/// Same as [`compare_ordinal`], as `-1`, `0` or `1`
pub fn compare_ordinal_sign(value: &TypedValue, expected: &Number) -> Result<i8> {
    compare_ordinal(value, expected).map(|ordering| ordering as i8)
}
