//! Hourly employee model.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    HourlyPayResult, MAX_WEEKLY_HOURS, calculate_hourly_pay, format_currency, format_grouped,
};
use crate::error::{PayrollError, PayrollResult};

use super::validation::{non_negative, within_inclusive};
use super::{Earnings, Identity};

const WAGE_MESSAGE: &str = "Hourly wage must be >= 0.0";
const HOURS_MESSAGE: &str = "Hours worked must be >= 0.0 and <= 168.0";

/// An employee paid by the hour, with overtime beyond 40 hours a week.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{Earnings, HourlyEmployee};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = HourlyEmployee::new(
///     "Karen",
///     "Price",
///     "222-22-2222",
///     Decimal::from_str("16.75").unwrap(),
///     Decimal::from(40),
/// )
/// .unwrap();
///
/// assert_eq!(employee.earnings(), Decimal::from_str("670.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HourlyEmployeeRecord")]
pub struct HourlyEmployee {
    #[serde(flatten)]
    identity: Identity,
    wage: Decimal,
    hours: Decimal,
    #[serde(skip_serializing)]
    pay: HourlyPayResult,
}

impl HourlyEmployee {
    /// Creates an hourly employee, validating wage and hours.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `wage < 0` or `hours` is outside `[0, 168]`,
    /// and `ArithmeticOverflow` if the resulting pay does not fit in a `Decimal`.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        social_security_number: impl Into<String>,
        wage: Decimal,
        hours: Decimal,
    ) -> PayrollResult<Self> {
        Self::from_parts(
            Identity::new(first_name, last_name, social_security_number),
            wage,
            hours,
        )
    }

    fn from_parts(identity: Identity, wage: Decimal, hours: Decimal) -> PayrollResult<Self> {
        let wage = validate_wage(wage)?;
        let hours = validate_hours(hours)?;
        Ok(Self {
            pay: calculate_hourly_pay(wage, hours)?,
            identity,
            wage,
            hours,
        })
    }

    /// Returns the hourly wage.
    pub fn wage(&self) -> Decimal {
        self.wage
    }

    /// Sets the hourly wage. On error the previous wage is kept.
    pub fn set_wage(&mut self, wage: Decimal) -> PayrollResult<()> {
        let wage = validate_wage(wage)?;
        self.pay = calculate_hourly_pay(wage, self.hours)?;
        self.wage = wage;
        Ok(())
    }

    /// Returns the hours worked this week.
    pub fn hours(&self) -> Decimal {
        self.hours
    }

    /// Sets the hours worked. On error the previous hours are kept.
    pub fn set_hours(&mut self, hours: Decimal) -> PayrollResult<()> {
        let hours = validate_hours(hours)?;
        self.pay = calculate_hourly_pay(self.wage, hours)?;
        self.hours = hours;
        Ok(())
    }

    /// Returns the straight-time/overtime breakdown behind [`Earnings::earnings`].
    pub fn pay_breakdown(&self) -> &HourlyPayResult {
        &self.pay
    }
}

impl Earnings for HourlyEmployee {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn earnings(&self) -> Decimal {
        self.pay.total
    }
}

impl fmt::Display for HourlyEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hourly employee: {}\nhourly wage: {}; hours worked: {}",
            self.identity,
            format_currency(self.wage),
            format_grouped(self.hours)
        )
    }
}

fn validate_wage(wage: Decimal) -> PayrollResult<Decimal> {
    non_negative(wage, "wage", WAGE_MESSAGE)
}

fn validate_hours(hours: Decimal) -> PayrollResult<Decimal> {
    within_inclusive(hours, Decimal::ZERO, MAX_WEEKLY_HOURS, "hours", HOURS_MESSAGE)
}

/// Unvalidated wire form; converted with the same checks as [`HourlyEmployee::new`].
#[derive(Deserialize)]
struct HourlyEmployeeRecord {
    #[serde(flatten)]
    identity: Identity,
    wage: Decimal,
    hours: Decimal,
}

impl TryFrom<HourlyEmployeeRecord> for HourlyEmployee {
    type Error = PayrollError;

    fn try_from(record: HourlyEmployeeRecord) -> PayrollResult<Self> {
        Self::from_parts(record.identity, record.wage, record.hours)
    }
}
