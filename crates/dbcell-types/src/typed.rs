//! Typed values

use crate::{Kind, RawValue, classify};
use std::fmt;

/// A raw cell value paired with its classified kind
///
/// Classification happens once, at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    raw: RawValue,
    kind: Kind,
}

impl TypedValue {
    /// Classify and wrap a raw value
    pub fn new(raw: impl Into<RawValue>) -> Self {
        let raw = raw.into();
        let kind = classify(&raw);
        Self { raw, kind }
    }

    /// A typed null
    pub fn null() -> Self {
        Self::new(RawValue::Null)
    }

    /// The stored value
    pub fn raw(&self) -> &RawValue {
        &self.raw
    }

    /// Kind assigned at construction
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Unwrap the raw value
    pub fn into_raw(self) -> RawValue {
        self.raw
    }
}

impl From<RawValue> for TypedValue {
    fn from(raw: RawValue) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
