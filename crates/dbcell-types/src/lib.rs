//! dbcell value model
//!
//! This crate defines the vocabulary shared by the comparison engine and the
//! formatter:
//! - Raw cell values and numeric variants
//! - The closed set of value kinds and the classifier
//! - Temporal value types (CalendarDate, TimeOfDay, DateTimeStamp)
//! - Typed values and caller-side expectations

pub mod expected;
pub mod kind;
pub mod number;
pub mod temporal;
pub mod typed;
pub mod value;

pub use expected::*;
pub use kind::*;
pub use number::*;
pub use temporal::*;
pub use typed::*;
pub use value::*;

// Re-exported so callers can build values without naming the crates
pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt;
pub use uuid::Uuid;
