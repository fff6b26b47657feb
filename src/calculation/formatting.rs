//! Number and currency formatting for summaries and reports.
//!
//! Values are rounded half away from zero to two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as dollars with thousands separators, e.g. `$10,000.00`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(10_000)), "$10,000.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let grouped = format_grouped(amount.abs());
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Formats a value with two decimals and thousands separators, e.g. `1,234.50`.
pub fn format_grouped(value: Decimal) -> String {
    let fixed = format_fixed(value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}

/// Formats a value with exactly two decimals and no grouping, e.g. `0.06`.
pub fn format_fixed(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_currency_small_amount() {
        assert_eq!(format_currency(dec("16.75")), "$16.75");
        assert_eq!(format_currency(dec("800")), "$800.00");
    }

    #[test]
    fn test_currency_groups_thousands() {
        assert_eq!(format_currency(dec("5000")), "$5,000.00");
        assert_eq!(format_currency(dec("1234567.891")), "$1,234,567.89");
    }

    #[test]
    fn test_currency_zero() {
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(dec("-1500")), "-$1,500.00");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(format_fixed(dec("0.125")), "0.13");
        assert_eq!(format_fixed(dec("2.004")), "2.00");
    }

    #[test]
    fn test_fixed_does_not_group() {
        assert_eq!(format_fixed(dec("0.06")), "0.06");
        assert_eq!(format_fixed(dec("12345")), "12345.00");
    }

    #[test]
    fn test_grouped_exact_multiple_of_three_digits() {
        assert_eq!(format_grouped(dec("100")), "100.00");
        assert_eq!(format_grouped(dec("100000")), "100,000.00");
        assert_eq!(format_grouped(dec("40")), "40.00");
    }
}
