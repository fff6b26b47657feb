//! Calculation logic for the Payroll Engine.
//!
//! This module contains the pure pay functions used by the employee model:
//! hourly pay with weekly overtime, commission on gross sales, percentage
//! raises, and the number formatting used in summaries and reports.

mod commission;
mod formatting;
mod hourly_pay;
mod raise;

pub use commission::calculate_commission;
pub use formatting::{format_currency, format_fixed, format_grouped};
pub use hourly_pay::{
    HourlyPayResult, MAX_WEEKLY_HOURS, OVERTIME_MULTIPLIER, STANDARD_WEEK_HOURS,
    calculate_hourly_pay,
};
pub use raise::{DEFAULT_RAISE_PERCENT, apply_raise};
