//! dbcell comparison engine
//!
//! Decides whether a stored cell value equals, or how it orders against, an
//! expectation written in a different representation, and renders the value
//! in the expectation's shape for diagnostics.
//!
//! Everything here is a pure function over immutable values.

pub mod column;
pub mod comparison;
pub mod numeric;
pub mod represent;

pub use column::{equals_all, represent_all};
pub use comparison::{compare_ordinal, compare_ordinal_sign, equals};
pub use represent::{Representation, represent, represent_as};
