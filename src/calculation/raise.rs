//! Salary raise calculation functionality.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// The raise applied to base salaries when no other percentage is configured.
pub const DEFAULT_RAISE_PERCENT: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Applies a percentage raise to an amount.
///
/// Returns `amount × (1 + percent / 100)`. A negative percentage produces a
/// pay cut; callers are responsible for re-validating the result.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if the raised amount does not fit in a
/// `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{apply_raise, DEFAULT_RAISE_PERCENT};
/// use rust_decimal::Decimal;
///
/// assert_eq!(apply_raise(Decimal::from(300), DEFAULT_RAISE_PERCENT)?, Decimal::from(330));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn apply_raise(amount: Decimal, percent: Decimal) -> PayrollResult<Decimal> {
    percent
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|fraction| Decimal::ONE.checked_add(fraction))
        .and_then(|multiplier| amount.checked_mul(multiplier))
        .ok_or(PayrollError::ArithmeticOverflow {
            operation: "salary raise",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_ten_percent_raise() {
        assert_eq!(apply_raise(dec("300"), DEFAULT_RAISE_PERCENT).unwrap(), dec("330.00"));
    }

    #[test]
    fn test_zero_percent_leaves_amount_unchanged() {
        assert_eq!(apply_raise(dec("812.50"), Decimal::ZERO).unwrap(), dec("812.50"));
    }

    #[test]
    fn test_fractional_percent() {
        assert_eq!(apply_raise(dec("1000"), dec("2.5")).unwrap(), dec("1025"));
    }

    #[test]
    fn test_negative_percent_is_a_cut() {
        assert_eq!(apply_raise(dec("200"), dec("-50")).unwrap(), dec("100"));
    }

    #[test]
    fn test_raise_beyond_decimal_range_is_an_error() {
        let err = apply_raise(Decimal::MAX, DEFAULT_RAISE_PERCENT).unwrap_err();
        assert_eq!(
            err,
            PayrollError::ArithmeticOverflow {
                operation: "salary raise"
            }
        );
    }

    #[test]
    fn test_cut_on_largest_amount_is_defined() {
        assert_eq!(apply_raise(Decimal::MAX, dec("-100")).unwrap(), Decimal::ZERO);
    }
}
