//! Configuration types for payroll runs.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from YAML settings and roster files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_RAISE_PERCENT;
use crate::error::PayrollResult;
use crate::models::{
    BasePlusCommissionEmployee, CommissionEmployee, Employee, HourlyEmployee, SalariedEmployee,
};

/// Settings for a payroll run.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollSettings;
/// use rust_decimal::Decimal;
///
/// let settings: PayrollSettings = serde_yaml::from_str("base_salary_raise_percent: \"5\"").unwrap();
/// assert_eq!(settings.base_salary_raise_percent, Decimal::from(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PayrollSettings {
    /// Percentage raise applied to base-plus-commission base salaries.
    #[serde(default = "default_raise_percent")]
    pub base_salary_raise_percent: Decimal,
}

fn default_raise_percent() -> Decimal {
    DEFAULT_RAISE_PERCENT
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            base_salary_raise_percent: DEFAULT_RAISE_PERCENT,
        }
    }
}

/// An ordered list of employees of any variant.
///
/// Roster files look like:
///
/// ```yaml
/// employees:
///   - type: salaried
///     first_name: John
///     last_name: Smith
///     social_security_number: 111-11-1111
///     weekly_salary: "800.00"
///   - type: hourly
///     first_name: Karen
///     last_name: Price
///     social_security_number: 222-22-2222
///     wage: "16.75"
///     hours: "40"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Employees in processing order.
    pub employees: Vec<Employee>,
}

impl Roster {
    /// Returns the reference roster: one employee of each variant.
    pub fn demo() -> PayrollResult<Self> {
        Ok(Self {
            employees: vec![
                SalariedEmployee::new("John", "Smith", "111-11-1111", Decimal::new(800_00, 2))?
                    .into(),
                HourlyEmployee::new(
                    "Karen",
                    "Price",
                    "222-22-2222",
                    Decimal::new(16_75, 2),
                    Decimal::from(40),
                )?
                .into(),
                CommissionEmployee::new(
                    "Sue",
                    "Jones",
                    "333-33-3333",
                    Decimal::from(10_000),
                    Decimal::new(6, 2),
                )?
                .into(),
                BasePlusCommissionEmployee::new(
                    "Bob",
                    "Lewis",
                    "444-44-4444",
                    Decimal::from(5_000),
                    Decimal::new(4, 2),
                    Decimal::from(300),
                )?
                .into(),
            ],
        })
    }
}
