//! Commission calculation functionality.

use rust_decimal::Decimal;

/// Calculates commission as `commission_rate × gross_sales`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_commission;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let commission = calculate_commission(
///     Decimal::from(10_000),
///     Decimal::from_str("0.06").unwrap(),
/// );
/// assert_eq!(commission, Decimal::from(600));
/// ```
pub fn calculate_commission(gross_sales: Decimal, commission_rate: Decimal) -> Decimal {
    commission_rate * gross_sales
}
