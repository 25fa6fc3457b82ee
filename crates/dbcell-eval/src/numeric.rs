//! Numeric comparison ladder
//!
//! Two numbers of different families are compared on a single rung chosen by
//! [`ladder_rung`]:
//!
//! 1. an arbitrary-precision expectation pulls the actual value up to its
//!    family (integer before decimal)
//! 2. otherwise an arbitrary-precision actual pulls the expectation up
//! 3. otherwise a floating point side selects floating point equality, the
//!    actual's width winning when the actual is itself floating
//! 4. otherwise both sides are compared as `i64`
//!
//! Rungs 1 and 2 never round: a value that cannot be represented exactly in
//! the chosen family raises a [`ComparisonError`].

use dbcell_diagnostics::ComparisonError;
use dbcell_types::{Number, NumericFamily};
use std::cmp::Ordering;

/// Pick the family both sides are converted to
pub fn ladder_rung(actual: NumericFamily, expected: NumericFamily) -> NumericFamily {
    use NumericFamily as F;
    match (actual, expected) {
        (_, F::BigInteger) => F::BigInteger,
        (_, F::BigDecimal) => F::BigDecimal,
        (F::BigInteger, _) => F::BigInteger,
        (F::BigDecimal, _) => F::BigDecimal,
        (F::Float, _) => F::Float,
        (F::Double, _) => F::Double,
        (F::Integer, F::Float) => F::Float,
        (F::Integer, F::Double) => F::Double,
        (F::Integer, F::Integer) => F::Integer,
    }
}

/// Compare two numbers on their ladder rung.
///
/// Returns `Ok(None)` when the pair is unordered, which only happens with a
/// floating point NaN.
pub fn numeric_cmp(actual: &Number, expected: &Number) -> Result<Option<Ordering>, ComparisonError> {
    let rung = ladder_rung(actual.family(), expected.family());
    log::trace!(
        "comparing {} ({}) with {} ({}) as {}",
        actual,
        actual.family(),
        expected,
        expected.family(),
        rung
    );

    let with_actual = |e: ComparisonError| e.with_actual(actual);
    let ordering = match rung {
        NumericFamily::BigInteger => {
            let a = actual.to_big_int().map_err(with_actual)?;
            let e = expected.to_big_int().map_err(with_actual)?;
            Some(a.cmp(&e))
        }
        NumericFamily::BigDecimal => {
            let a = actual.to_big_decimal().map_err(with_actual)?;
            let e = expected.to_big_decimal().map_err(with_actual)?;
            Some(a.cmp(&e))
        }
        NumericFamily::Float => actual.to_f32().partial_cmp(&expected.to_f32()),
        NumericFamily::Double => actual.to_f64().partial_cmp(&expected.to_f64()),
        NumericFamily::Integer => match (actual.as_i64(), expected.as_i64()) {
            (Some(a), Some(e)) => Some(a.cmp(&e)),
            _ => return Err(ComparisonError::conversion(expected, rung.to_string()).with_actual(actual)),
        },
    };
    Ok(ordering)
}

/// Numeric equality on the ladder rung. NaN is never equal.
pub fn numeric_eq(actual: &Number, expected: &Number) -> Result<bool, ComparisonError> {
    Ok(numeric_cmp(actual, expected)? == Some(Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbcell_types::{BigDecimal, BigInt};
    use std::str::FromStr;

    fn dec(s: &str) -> Number {
        Number::Decimal(BigDecimal::from_str(s).unwrap())
    }

    #[test]
    fn test_ladder_prefers_expected_arbitrary_precision() {
        use NumericFamily as F;
        assert_eq!(ladder_rung(F::BigDecimal, F::BigInteger), F::BigInteger);
        assert_eq!(ladder_rung(F::BigInteger, F::BigDecimal), F::BigDecimal);
        assert_eq!(ladder_rung(F::Integer, F::BigDecimal), F::BigDecimal);
        assert_eq!(ladder_rung(F::BigInteger, F::Double), F::BigInteger);
        assert_eq!(ladder_rung(F::Float, F::Double), F::Float);
        assert_eq!(ladder_rung(F::Integer, F::Double), F::Double);
        assert_eq!(ladder_rung(F::Integer, F::Integer), F::Integer);
    }

    #[test]
    fn test_big_int_precision() {
        let actual = Number::I64(9_007_199_254_740_993);
        let expected = Number::BigInt(BigInt::from(9_007_199_254_740_993i64));
        assert!(numeric_eq(&actual, &expected).unwrap());
        // f64 cannot tell these apart, the ladder must not go through it
        let neighbour = Number::BigInt(BigInt::from(9_007_199_254_740_992i64));
        assert!(!numeric_eq(&actual, &neighbour).unwrap());
    }

    #[test]
    fn test_decimal_scale_is_ignored() {
        assert_eq!(numeric_cmp(&Number::I64(5), &dec("5.0")).unwrap(), Some(Ordering::Equal));
        assert_eq!(numeric_cmp(&Number::I64(4), &dec("5.0")).unwrap(), Some(Ordering::Less));
    }

    #[test]
    fn test_floats_compare_exactly() {
        assert!(!numeric_eq(&Number::F64(0.1 + 0.2), &Number::F64(0.3)).unwrap());
        assert!(numeric_eq(&Number::F64(0.5), &Number::F64(0.5)).unwrap());
        assert!(numeric_eq(&Number::I32(3), &Number::F32(3.0)).unwrap());
        assert_eq!(numeric_cmp(&Number::F64(f64::NAN), &Number::I64(1)).unwrap(), None);
    }

    #[test]
    fn test_fractional_into_big_int_is_an_error() {
        let err = numeric_cmp(&dec("5.5"), &Number::BigInt(BigInt::from(5))).unwrap_err();
        assert_eq!(err.target, "BigInt");
        assert_eq!(err.actual.as_deref(), Some("5.5"));
    }
}
