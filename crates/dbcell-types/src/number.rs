//! Numeric variants
//!
//! A stored number keeps the exact representation the data source produced.
//! Nothing in this module promotes implicitly: every widening is an explicit
//! method that either succeeds losslessly or reports a [`ComparisonError`].

use bigdecimal::BigDecimal;
use dbcell_diagnostics::ComparisonError;
use num_bigint::BigInt;
use std::fmt;
use std::str::FromStr;

/// Numeric family of a [`Number`]
///
/// Families are listed from the lowest to the highest rung of the comparison
/// ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NumericFamily {
    /// 8/16/32/64-bit signed integers, compared as `i64`
    Integer,
    /// Single precision floating point
    Float,
    /// Double precision floating point
    Double,
    /// Arbitrary-precision decimal
    BigDecimal,
    /// Arbitrary-precision integer
    BigInteger,
}

impl NumericFamily {
    /// Whether this family is one of the IEEE floating point families
    pub fn is_floating(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Whether this family has unbounded magnitude
    pub fn is_arbitrary_precision(self) -> bool {
        matches!(self, Self::BigDecimal | Self::BigInteger)
    }
}

impl fmt::Display for NumericFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "i64"),
            Self::Float => write!(f, "f32"),
            Self::Double => write!(f, "f64"),
            Self::BigDecimal => write!(f, "BigDecimal"),
            Self::BigInteger => write!(f, "BigInt"),
        }
    }
}

/// A number as stored in a cell or supplied as an expectation
#[derive(Debug, Clone)]
pub enum Number {
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// Single precision float
    F32(f32),
    /// Double precision float
    F64(f64),
    /// Arbitrary-precision integer
    BigInt(BigInt),
    /// Arbitrary-precision decimal
    Decimal(BigDecimal),
}

impl Number {
    /// Get the family this variant belongs to
    pub fn family(&self) -> NumericFamily {
        match self {
            Self::I8(_) | Self::I16(_) | Self::I32(_) | Self::I64(_) => NumericFamily::Integer,
            Self::F32(_) => NumericFamily::Float,
            Self::F64(_) => NumericFamily::Double,
            Self::BigInt(_) => NumericFamily::BigInteger,
            Self::Decimal(_) => NumericFamily::BigDecimal,
        }
    }

    /// Get the value of a fixed-width integer variant as `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I8(v) => Some(i64::from(*v)),
            Self::I16(v) => Some(i64::from(*v)),
            Self::I32(v) => Some(i64::from(*v)),
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Narrow to `f32` the way a primitive cast does.
    ///
    /// Arbitrary-precision values go through their text form.
    pub fn to_f32(&self) -> f32 {
        match self {
            Self::F32(v) => *v,
            Self::F64(v) => *v as f32,
            Self::BigInt(v) => v.to_string().parse().unwrap_or(f32::NAN),
            Self::Decimal(v) => v.to_string().parse().unwrap_or(f32::NAN),
            other => other.as_i64().map_or(f32::NAN, |i| i as f32),
        }
    }

    /// Narrow to `f64` the way a primitive cast does.
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::F32(v) => f64::from(*v),
            Self::F64(v) => *v,
            Self::BigInt(v) => v.to_string().parse().unwrap_or(f64::NAN),
            Self::Decimal(v) => v.to_string().parse().unwrap_or(f64::NAN),
            other => other.as_i64().map_or(f64::NAN, |i| i as f64),
        }
    }

    /// Convert to an arbitrary-precision integer without rounding.
    ///
    /// Floats are re-rendered through their decimal text, so `5.0` becomes
    /// `5` while `5.5` and non-finite values are rejected. Decimals must have
    /// no fractional part.
    pub fn to_big_int(&self) -> Result<BigInt, ComparisonError> {
        let target = NumericFamily::BigInteger.to_string();
        match self {
            Self::BigInt(v) => Ok(v.clone()),
            Self::Decimal(v) => {
                let truncated = v.with_scale(0);
                if &truncated != v {
                    return Err(ComparisonError::conversion(v, target));
                }
                Ok(truncated.into_bigint_and_exponent().0)
            }
            Self::F32(v) if v.is_finite() && v.fract() == 0.0 => {
                BigInt::from_str(&v.to_string()).map_err(|_| ComparisonError::conversion(v, target))
            }
            Self::F64(v) if v.is_finite() && v.fract() == 0.0 => {
                BigInt::from_str(&v.to_string()).map_err(|_| ComparisonError::conversion(v, target))
            }
            Self::F32(_) | Self::F64(_) => Err(ComparisonError::conversion(self, target)),
            other => other
                .as_i64()
                .map(BigInt::from)
                .ok_or_else(|| ComparisonError::conversion(other, target)),
        }
    }

    /// Convert to an arbitrary-precision decimal without rounding.
    ///
    /// Floats are re-rendered through their shortest decimal text, so `0.1`
    /// becomes exactly `0.1`.
    pub fn to_big_decimal(&self) -> Result<BigDecimal, ComparisonError> {
        let target = NumericFamily::BigDecimal.to_string();
        match self {
            Self::Decimal(v) => Ok(v.clone()),
            Self::BigInt(v) => Ok(BigDecimal::new(v.clone(), 0)),
            Self::F32(v) if v.is_finite() => {
                BigDecimal::from_str(&v.to_string()).map_err(|_| ComparisonError::conversion(v, target))
            }
            Self::F64(v) if v.is_finite() => {
                BigDecimal::from_str(&v.to_string()).map_err(|_| ComparisonError::conversion(v, target))
            }
            Self::F32(_) | Self::F64(_) => Err(ComparisonError::conversion(self, target)),
            other => other
                .as_i64()
                .map(BigDecimal::from)
                .ok_or_else(|| ComparisonError::conversion(other, target)),
        }
    }

    /// Parse `text` as a number of the given family
    pub fn parse_as(text: &str, family: NumericFamily) -> Result<Self, ComparisonError> {
        let err = || ComparisonError::parse(text, family.to_string());
        match family {
            NumericFamily::Integer => text.parse::<i64>().map(Self::I64).map_err(|_| err()),
            NumericFamily::Float => text.parse::<f32>().map(Self::F32).map_err(|_| err()),
            NumericFamily::Double => text.parse::<f64>().map(Self::F64).map_err(|_| err()),
            NumericFamily::BigInteger => BigInt::from_str(text).map(Self::BigInt).map_err(|_| err()),
            NumericFamily::BigDecimal => BigDecimal::from_str(text).map(Self::Decimal).map_err(|_| err()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => write!(f, "{}", v),
            Self::I16(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::F32(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
            Self::BigInt(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{}", v),
        }
    }
}

/// Structural equality: same variant and same value.
///
/// Floats compare by bit pattern so that `Number` can be `Eq`. Cross-family
/// numeric equality lives in the comparison engine, not here.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::I8(a), Self::I8(b)) => a == b,
            (Self::I16(a), Self::I16(b)) => a == b,
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a.to_bits() == b.to_bits(),
            (Self::F64(a), Self::F64(b)) => a.to_bits() == b.to_bits(),
            (Self::BigInt(a), Self::BigInt(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Number {}

macro_rules! number_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

number_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    BigInt => BigInt,
    BigDecimal => Decimal,
}

impl From<rust_decimal::Decimal> for Number {
    fn from(value: rust_decimal::Decimal) -> Self {
        let mantissa = BigInt::from(value.mantissa());
        Self::Decimal(BigDecimal::new(mantissa, i64::from(value.scale())))
    }
}
