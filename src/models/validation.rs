//! Field validation shared by the employee variants.
//!
//! Each check returns the value unchanged on success so constructors and
//! setters can validate and assign in one expression.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// Requires `value >= 0`.
pub(crate) fn non_negative(
    value: Decimal,
    field: &'static str,
    message: &'static str,
) -> PayrollResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(PayrollError::InvalidArgument { field, message });
    }
    Ok(value)
}

/// Requires `min <= value <= max`.
pub(crate) fn within_inclusive(
    value: Decimal,
    min: Decimal,
    max: Decimal,
    field: &'static str,
    message: &'static str,
) -> PayrollResult<Decimal> {
    if value < min || value > max {
        return Err(PayrollError::InvalidArgument { field, message });
    }
    Ok(value)
}

/// Requires `min < value < max`.
pub(crate) fn within_exclusive(
    value: Decimal,
    min: Decimal,
    max: Decimal,
    field: &'static str,
    message: &'static str,
) -> PayrollResult<Decimal> {
    if value <= min || value >= max {
        return Err(PayrollError::InvalidArgument { field, message });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE: &str = "must be valid";

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(non_negative(Decimal::ZERO, "x", MESSAGE), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_non_negative_rejects_negative() {
        let err = non_negative(Decimal::NEGATIVE_ONE, "x", MESSAGE).unwrap_err();
        assert_eq!(
            err,
            PayrollError::InvalidArgument {
                field: "x",
                message: MESSAGE
            }
        );
    }

    #[test]
    fn test_inclusive_bounds_are_accepted() {
        let max = Decimal::from(168);
        assert!(within_inclusive(Decimal::ZERO, Decimal::ZERO, max, "x", MESSAGE).is_ok());
        assert!(within_inclusive(max, Decimal::ZERO, max, "x", MESSAGE).is_ok());
        assert!(within_inclusive(Decimal::from(169), Decimal::ZERO, max, "x", MESSAGE).is_err());
    }

    #[test]
    fn test_exclusive_bounds_are_rejected() {
        assert!(within_exclusive(Decimal::ZERO, Decimal::ZERO, Decimal::ONE, "x", MESSAGE).is_err());
        assert!(within_exclusive(Decimal::ONE, Decimal::ZERO, Decimal::ONE, "x", MESSAGE).is_err());
        assert!(
            within_exclusive(Decimal::new(5, 1), Decimal::ZERO, Decimal::ONE, "x", MESSAGE).is_ok()
        );
    }
}
