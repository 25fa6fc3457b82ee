//! Row and column helpers
//!
//! Element-wise versions of [`equals`] and [`represent`] for a whole row or
//! column of cells.

use dbcell_diagnostics::Result;
use dbcell_types::{Expected, TypedValue};

use crate::comparison::equals;
use crate::represent::{Representation, represent};

/// Check a sequence of values against a sequence of expectations.
///
/// Sequences of different lengths are not equal. The first comparison error
/// aborts the check.
pub fn equals_all(values: &[TypedValue], expected: &[Expected]) -> Result<bool> {
    if values.len() != expected.len() {
        log::debug!("length mismatch: {} values, {} expected", values.len(), expected.len());
        return Ok(false);
    }
    for (value, exp) in values.iter().zip(expected) {
        if !equals(value, exp)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Render each value in the shape of its expectation.
///
/// Values beyond the end of `expected` keep their native form.
pub fn represent_all(values: &[TypedValue], expected: &[Expected]) -> Vec<Representation> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| match expected.get(i) {
            Some(exp) => represent(value, exp),
            None => Representation::Raw(value.raw().clone()),
        })
        .collect()
}
