//! Snapshot tests for user-facing text
//!
//! Uses insta for snapshot testing of:
//! - Error messages
//! - Representations shown in mismatch diagnostics

use chrono::{NaiveDate, NaiveTime};
use dbcell::types::Uuid;
use dbcell::{Expected, Number, RawValue, TypedValue, compare_ordinal, equals, represent, represent_all};
use insta::assert_snapshot;

fn stored_date() -> TypedValue {
    TypedValue::new(NaiveDate::from_ymd_opt(2014, 5, 24).unwrap())
}

// === Error Message Snapshots ===

#[test]
fn snapshot_error_number_text() {
    let err = equals(&TypedValue::new(42i32), &Expected::from("abc")).unwrap_err();
    assert_snapshot!(err, @"equals: <abc> cannot be converted to i64 to compare with <42>");

    let err = equals(&TypedValue::new(1.5f32), &Expected::from("1,5")).unwrap_err();
    assert_snapshot!(err, @"equals: <1,5> cannot be converted to f32 to compare with <1.5>");
}

#[test]
fn snapshot_error_temporal_text() {
    let err = equals(&stored_date(), &Expected::from("2014-13-01")).unwrap_err();
    assert_snapshot!(err, @"equals: <2014-13-01> cannot be converted to CalendarDate to compare with <2014-05-24>");

    let time = TypedValue::new(NaiveTime::from_hms_opt(9, 46, 30).unwrap());
    let err = equals(&time, &Expected::from("9h46")).unwrap_err();
    assert_snapshot!(err, @"equals: <9h46> cannot be converted to TimeOfDay to compare with <09:46:30>");
}

#[test]
fn snapshot_error_uuid_text() {
    let err = equals(&TypedValue::new(Uuid::nil()), &Expected::from("0000")).unwrap_err();
    assert_snapshot!(err, @"equals: <0000> cannot be converted to UUID to compare with <00000000-0000-0000-0000-000000000000>");
}

#[test]
fn snapshot_error_compare_ordinal() {
    let err = compare_ordinal(&TypedValue::new(true), &Number::from(1i64)).unwrap_err();
    assert_snapshot!(err, @"compare: <true> cannot be converted to i64 to compare with <1>");

    let err = compare_ordinal(&TypedValue::new(f64::NAN), &Number::from(1.0f64)).unwrap_err();
    assert_snapshot!(err, @"compare: <NaN> cannot be converted to f64 to compare with <1>");
}

// === Representation Snapshots ===

#[test]
fn snapshot_date_representations() {
    let value = stored_date();
    assert_snapshot!(represent(&value, &Expected::from("2014-05-24T10:00:00")), @"2014-05-24T00:00:00");
    assert_snapshot!(represent(&value, &Expected::from("2014-05-25")), @"2014-05-24");
}

#[test]
fn snapshot_row_representation() {
    let row = vec![
        TypedValue::new(42i64),
        TypedValue::new(vec![1u8, 2, 3]),
        TypedValue::new(NaiveTime::from_hms_nano_opt(9, 46, 30, 500_000_000).unwrap()),
        TypedValue::new(RawValue::Null),
    ];
    let expected = vec![
        Expected::from("43"),
        Expected::from(vec![1u8, 2]),
        Expected::from("09:46"),
    ];
    let rendered: Vec<String> = represent_all(&row, &expected).iter().map(ToString::to_string).collect();
    assert_snapshot!(rendered.join(" | "), @"42 | [1, 2, 3] | 09:46:30.500000000 | null");
}
