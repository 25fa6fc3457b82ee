//! Comparison error types

use std::fmt;
use thiserror::Error;

/// The operation that was running when a conversion failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operation {
    /// Parsing a textual literal into a typed value
    Parse,
    /// Equality check between a stored value and an expectation
    Equals,
    /// Ordinal comparison against a numeric expectation
    CompareOrdinal,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Parse => write!(f, "parse"),
            Operation::Equals => write!(f, "equals"),
            Operation::CompareOrdinal => write!(f, "compare"),
        }
    }
}

/// Error raised when an expectation cannot be converted to the family implied
/// by the stored value.
///
/// A structural mismatch between two values of the same kind is never an
/// error; it is a plain `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{operation}: <{input}> cannot be converted to {target}{}", ActualSuffix(.actual))]
pub struct ComparisonError {
    /// Operation being performed
    pub operation: Operation,
    /// Offending input, rendered as text
    pub input: String,
    /// Name of the type or numeric family the input could not become
    pub target: String,
    /// Stored value the input was compared against, when there is one
    pub actual: Option<String>,
}

struct ActualSuffix<'a>(&'a Option<String>);

impl fmt::Display for ActualSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(actual) => write!(f, " to compare with <{}>", actual),
            None => Ok(()),
        }
    }
}

impl ComparisonError {
    /// Create a new error
    pub fn new(operation: Operation, input: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            operation,
            input: input.into(),
            target: target.into(),
            actual: None,
        }
    }

    /// Create a parse error for a malformed literal
    pub fn parse(input: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(Operation::Parse, input, target)
    }

    /// Create an equality conversion error
    pub fn conversion(input: impl fmt::Display, target: impl Into<String>) -> Self {
        Self::new(Operation::Equals, input.to_string(), target)
    }

    /// Create an ordinal comparison error
    pub fn not_ordered(input: impl fmt::Display, target: impl Into<String>) -> Self {
        Self::new(Operation::CompareOrdinal, input.to_string(), target)
    }

    /// Attach the stored value the input was compared against
    pub fn with_actual(mut self, actual: impl fmt::Display) -> Self {
        self.actual = Some(actual.to_string());
        self
    }

    /// Re-tag the error with the operation that surfaced it
    pub fn during(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }
}
