//! Base-plus-commission employee model.
//!
//! A base-plus-commission employee is a [`CommissionEmployee`] with a fixed
//! weekly base salary on top. The commission part is held by value and its
//! earnings are delegated to, never recomputed here. The combined total is
//! checked whenever either part changes.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{apply_raise, format_currency};
use crate::error::{PayrollError, PayrollResult};

use super::validation::non_negative;
use super::{CommissionEmployee, Earnings, Identity};

const BASE_SALARY_MESSAGE: &str = "Base salary must be >= 0.0";

/// A commission employee who also receives a weekly base salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{BasePlusCommissionEmployee, Earnings};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut employee = BasePlusCommissionEmployee::new(
///     "Bob",
///     "Lewis",
///     "444-44-4444",
///     Decimal::from(5_000),
///     Decimal::from_str("0.04").unwrap(),
///     Decimal::from(300),
/// )
/// .unwrap();
/// assert_eq!(employee.earnings(), Decimal::from(500));
///
/// employee.raise_base_salary(Decimal::from(10)).unwrap();
/// assert_eq!(employee.base_salary(), Decimal::from(330));
/// assert_eq!(employee.earnings(), Decimal::from(530));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BasePlusCommissionEmployeeRecord")]
pub struct BasePlusCommissionEmployee {
    #[serde(flatten)]
    commission: CommissionEmployee,
    base_salary: Decimal,
    #[serde(skip_serializing)]
    earnings: Decimal,
}

impl BasePlusCommissionEmployee {
    /// Creates a base-plus-commission employee.
    ///
    /// Commission fields are validated first, then the base salary.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for any commission field error (see
    /// [`CommissionEmployee::new`]) or if `base_salary < 0`, and
    /// `ArithmeticOverflow` if base salary plus commission does not fit in a
    /// `Decimal`.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        social_security_number: impl Into<String>,
        gross_sales: Decimal,
        commission_rate: Decimal,
        base_salary: Decimal,
    ) -> PayrollResult<Self> {
        let commission = CommissionEmployee::new(
            first_name,
            last_name,
            social_security_number,
            gross_sales,
            commission_rate,
        )?;
        Self::from_commission(commission, base_salary)
    }

    /// Adds a base salary to an existing commission employee.
    pub fn from_commission(
        commission: CommissionEmployee,
        base_salary: Decimal,
    ) -> PayrollResult<Self> {
        let base_salary = validate_base_salary(base_salary)?;
        Ok(Self {
            earnings: total_earnings(base_salary, &commission)?,
            commission,
            base_salary,
        })
    }

    /// Returns the commission part of this employee.
    pub fn commission(&self) -> &CommissionEmployee {
        &self.commission
    }

    /// Returns the gross sales for the week.
    pub fn gross_sales(&self) -> Decimal {
        self.commission.gross_sales()
    }

    /// Sets the gross sales. On error the previous value is kept.
    pub fn set_gross_sales(&mut self, gross_sales: Decimal) -> PayrollResult<()> {
        let mut commission = self.commission.clone();
        commission.set_gross_sales(gross_sales)?;
        self.replace_commission(commission)
    }

    /// Returns the commission rate.
    pub fn commission_rate(&self) -> Decimal {
        self.commission.commission_rate()
    }

    /// Sets the commission rate. On error the previous rate is kept.
    pub fn set_commission_rate(&mut self, commission_rate: Decimal) -> PayrollResult<()> {
        let mut commission = self.commission.clone();
        commission.set_commission_rate(commission_rate)?;
        self.replace_commission(commission)
    }

    fn replace_commission(&mut self, commission: CommissionEmployee) -> PayrollResult<()> {
        self.earnings = total_earnings(self.base_salary, &commission)?;
        self.commission = commission;
        Ok(())
    }

    /// Returns the weekly base salary.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Sets the base salary. On error the previous salary is kept.
    pub fn set_base_salary(&mut self, base_salary: Decimal) -> PayrollResult<()> {
        let base_salary = validate_base_salary(base_salary)?;
        self.earnings = total_earnings(base_salary, &self.commission)?;
        self.base_salary = base_salary;
        Ok(())
    }

    /// Raises the base salary by `percent` and returns the new base salary.
    ///
    /// The new value goes through [`set_base_salary`](Self::set_base_salary),
    /// so a cut below zero is rejected and leaves the salary unchanged, as
    /// does a raise whose result does not fit in a `Decimal`.
    pub fn raise_base_salary(&mut self, percent: Decimal) -> PayrollResult<Decimal> {
        self.set_base_salary(apply_raise(self.base_salary, percent)?)?;
        Ok(self.base_salary)
    }
}

impl Earnings for BasePlusCommissionEmployee {
    fn identity(&self) -> &Identity {
        self.commission.identity()
    }

    fn earnings(&self) -> Decimal {
        self.earnings
    }
}

impl fmt::Display for BasePlusCommissionEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base-salaried {}; base salary: {}",
            self.commission,
            format_currency(self.base_salary)
        )
    }
}

fn validate_base_salary(base_salary: Decimal) -> PayrollResult<Decimal> {
    non_negative(base_salary, "base_salary", BASE_SALARY_MESSAGE)
}

fn total_earnings(
    base_salary: Decimal,
    commission: &CommissionEmployee,
) -> PayrollResult<Decimal> {
    base_salary
        .checked_add(commission.earnings())
        .ok_or(PayrollError::ArithmeticOverflow {
            operation: "base-plus-commission earnings",
        })
}

#[derive(Deserialize)]
struct BasePlusCommissionEmployeeRecord {
    #[serde(flatten)]
    identity: Identity,
    gross_sales: Decimal,
    commission_rate: Decimal,
    base_salary: Decimal,
}

impl TryFrom<BasePlusCommissionEmployeeRecord> for BasePlusCommissionEmployee {
    type Error = PayrollError;

    fn try_from(record: BasePlusCommissionEmployeeRecord) -> PayrollResult<Self> {
        let commission = CommissionEmployee::new(
            record.identity.first_name(),
            record.identity.last_name(),
            record.identity.social_security_number(),
            record.gross_sales,
            record.commission_rate,
        )?;
        Self::from_commission(commission, record.base_salary)
    }
}
