//! dbcell diagnostics
//!
//! This crate provides the single error type raised by the value comparison
//! core, together with the operation tags it carries.

mod error;

pub use error::*;

/// Result type for comparison operations
pub type Result<T> = std::result::Result<T, ComparisonError>;
