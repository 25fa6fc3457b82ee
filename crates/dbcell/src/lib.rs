//! Classification and comparison of database cell values
//!
//! This crate lets a test harness check stored cell values against
//! expectations written in whatever representation is most convenient:
//! - Classifying a raw value into a [`Kind`]
//! - Equality against typed, native or textual expectations
//! - Ordinal comparison across numeric families without losing precision
//! - Rendering a value in the shape of its expectation for diagnostics
//!
//! # Example
//!
//! ```
//! use dbcell::{Expected, TypedValue, equals, represent};
//!
//! let stored = TypedValue::new(42i32);
//! assert!(equals(&stored, &Expected::from("42"))?);
//! assert!(!equals(&stored, &Expected::from(43i64))?);
//! assert_eq!(represent(&stored, &Expected::from("43")).to_string(), "42");
//! # Ok::<(), dbcell::ComparisonError>(())
//! ```

// Re-export all public APIs from internal crates
pub use dbcell_diagnostics as diagnostics;
pub use dbcell_eval as eval;
pub use dbcell_types as types;

// Convenience re-exports
pub use dbcell_diagnostics::{ComparisonError, Operation, Result};
pub use dbcell_eval::{
    Representation, compare_ordinal, compare_ordinal_sign, equals, equals_all, represent, represent_all,
};
pub use dbcell_types::{
    CalendarDate, DateTimeStamp, Expected, ExpectedForm, Kind, KindMismatch, Number, NumericFamily, RawValue,
    TimeOfDay, TypedValue, check_kind, classify,
};
