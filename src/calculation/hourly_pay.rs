//! Hourly pay calculation functionality.
//!
//! This module provides the straight-time and overtime split used for
//! hourly employees.
//!
//! ## Rate Structure
//!
//! - First 40 hours of the week: paid at the hourly wage
//! - Hours beyond 40: paid at 150% of the hourly wage
//!
//! Exactly 40 hours is paid entirely at straight time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Hours in a standard working week before overtime applies.
pub const STANDARD_WEEK_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Upper bound on hours that can be worked in a calendar week (7 × 24).
pub const MAX_WEEKLY_HOURS: Decimal = Decimal::from_parts(168, 0, 0, false, 0);

/// Multiplier applied to the wage for hours beyond [`STANDARD_WEEK_HOURS`].
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The result of an hourly pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPayResult {
    /// Hours paid at the base wage.
    pub straight_hours: Decimal,
    /// Hours paid at the overtime multiplier.
    pub overtime_hours: Decimal,
    /// Pay for straight-time hours.
    pub straight_pay: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Total pay for the week.
    pub total: Decimal,
}

/// Calculates weekly pay for an hourly wage and hours worked.
///
/// Inputs are assumed to be already validated (`wage >= 0`,
/// `0 <= hours <= 168`); the hourly employee model guarantees this.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if the pay does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_hourly_pay(Decimal::from(10), Decimal::from(50))?;
///
/// assert_eq!(result.straight_pay, Decimal::from(400));
/// assert_eq!(result.overtime_pay, Decimal::from(150));
/// assert_eq!(result.total, Decimal::from_str("550.00").unwrap());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn calculate_hourly_pay(wage: Decimal, hours: Decimal) -> PayrollResult<HourlyPayResult> {
    if hours <= STANDARD_WEEK_HOURS {
        let straight_pay = checked(wage.checked_mul(hours))?;
        return Ok(HourlyPayResult {
            straight_hours: hours,
            overtime_hours: Decimal::ZERO,
            straight_pay,
            overtime_pay: Decimal::ZERO,
            total: straight_pay,
        });
    }

    let overtime_hours = hours - STANDARD_WEEK_HOURS;
    let straight_pay = checked(STANDARD_WEEK_HOURS.checked_mul(wage))?;
    let overtime_rate = checked(wage.checked_mul(OVERTIME_MULTIPLIER))?;
    let overtime_pay = checked(overtime_hours.checked_mul(overtime_rate))?;

    Ok(HourlyPayResult {
        straight_hours: STANDARD_WEEK_HOURS,
        overtime_hours,
        straight_pay,
        overtime_pay,
        total: checked(straight_pay.checked_add(overtime_pay))?,
    })
}

fn checked(value: Option<Decimal>) -> PayrollResult<Decimal> {
    value.ok_or(PayrollError::ArithmeticOverflow {
        operation: "hourly pay",
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
    fn test_straight_time_under_forty_hours() {
        let result = calculate_hourly_pay(dec("16.75"), dec("20")).unwrap();

        assert_eq!(result.straight_hours, dec("20"));
        assert_eq!(result.overtime_hours, Decimal::ZERO);
        assert_eq!(result.total, dec("335.00"));
    }

    #[test]
    fn test_exactly_forty_hours_has_no_overtime() {
        let result = calculate_hourly_pay(dec("16.75"), dec("40")).unwrap();

        assert_eq!(result.overtime_hours, Decimal::ZERO);
        assert_eq!(result.overtime_pay, Decimal::ZERO);
        assert_eq!(result.total, dec("670.00"));
    }

    #[test]
    fn test_overtime_beyond_forty_hours() {
        let result = calculate_hourly_pay(dec("10"), dec("50")).unwrap();

        assert_eq!(result.straight_hours, dec("40"));
        assert_eq!(result.overtime_hours, dec("10"));
        assert_eq!(result.straight_pay, dec("400"));
        assert_eq!(result.overtime_pay, dec("150"));
        assert_eq!(result.total, dec("550.00"));
    }

    #[test]
    fn test_fractional_overtime() {
        let result = calculate_hourly_pay(dec("20"), dec("40.5")).unwrap();

        assert_eq!(result.overtime_hours, dec("0.5"));
        assert_eq!(result.overtime_pay, dec("15"));
        assert_eq!(result.total, dec("815"));
    }

    #[test]
    fn test_maximum_week() {
        let result = calculate_hourly_pay(dec("1"), MAX_WEEKLY_HOURS).unwrap();

        // 40 + 128 * 1.5
        assert_eq!(result.total, dec("232"));
    }

    #[test]
    fn test_zero_wage_pays_nothing() {
        let result = calculate_hourly_pay(Decimal::ZERO, dec("60")).unwrap();
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_large_wage_within_range() {
        let result = calculate_hourly_pay(dec("1000000000000000000000"), MAX_WEEKLY_HOURS).unwrap();
        assert_eq!(result.total, dec("232000000000000000000000"));
    }

    #[test]
    fn test_overflowing_pay_is_an_error() {
        let err = calculate_hourly_pay(dec("1000000000000000000000000000"), MAX_WEEKLY_HOURS)
            .unwrap_err();
        assert_eq!(
            err,
            PayrollError::ArithmeticOverflow {
                operation: "hourly pay"
            }
        );

        assert!(calculate_hourly_pay(Decimal::MAX, dec("2")).is_err());
    }

    #[test]
    fn test_constants() {
        assert_eq!(STANDARD_WEEK_HOURS, dec("40"));
        assert_eq!(MAX_WEEKLY_HOURS, dec("168"));
        assert_eq!(OVERTIME_MULTIPLIER, dec("1.5"));
    }
}
