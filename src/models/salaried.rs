//! Salaried employee model.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::format_currency;
use crate::error::{PayrollError, PayrollResult};

use super::validation::non_negative;
use super::{Earnings, Identity};

const WEEKLY_SALARY_MESSAGE: &str = "Weekly salary must be >= 0.0";

/// An employee paid a fixed weekly salary regardless of hours worked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SalariedEmployeeRecord")]
pub struct SalariedEmployee {
    #[serde(flatten)]
    identity: Identity,
    weekly_salary: Decimal,
}

impl SalariedEmployee {
    /// Creates a salaried employee.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `weekly_salary < 0`.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        social_security_number: impl Into<String>,
        weekly_salary: Decimal,
    ) -> PayrollResult<Self> {
        Ok(Self {
            weekly_salary: validate_weekly_salary(weekly_salary)?,
            identity: Identity::new(first_name, last_name, social_security_number),
        })
    }

    /// Returns the weekly salary.
    pub fn weekly_salary(&self) -> Decimal {
        self.weekly_salary
    }

    /// Sets the weekly salary. On error the previous salary is kept.
    pub fn set_weekly_salary(&mut self, weekly_salary: Decimal) -> PayrollResult<()> {
        self.weekly_salary = validate_weekly_salary(weekly_salary)?;
        Ok(())
    }
}

impl Earnings for SalariedEmployee {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn earnings(&self) -> Decimal {
        self.weekly_salary
    }
}

impl fmt::Display for SalariedEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "salaried employee: {}\nweekly salary: {}",
            self.identity,
            format_currency(self.weekly_salary)
        )
    }
}

fn validate_weekly_salary(weekly_salary: Decimal) -> PayrollResult<Decimal> {
    non_negative(weekly_salary, "weekly_salary", WEEKLY_SALARY_MESSAGE)
}

#[derive(Deserialize)]
struct SalariedEmployeeRecord {
    #[serde(flatten)]
    identity: Identity,
    weekly_salary: Decimal,
}

impl TryFrom<SalariedEmployeeRecord> for SalariedEmployee {
    type Error = PayrollError;

    fn try_from(record: SalariedEmployeeRecord) -> PayrollResult<Self> {
        Ok(Self {
            weekly_salary: validate_weekly_salary(record.weekly_salary)?,
            identity: record.identity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_earnings_equal_weekly_salary() {
        let employee = SalariedEmployee::new("John", "Smith", "111-11-1111", dec("800")).unwrap();
        assert_eq!(employee.earnings(), dec("800"));
    }

    #[test]
    fn test_zero_salary_is_accepted() {
        let employee = SalariedEmployee::new("John", "Smith", "111-11-1111", Decimal::ZERO).unwrap();
        assert_eq!(employee.earnings(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let err = SalariedEmployee::new("John", "Smith", "111-11-1111", dec("-800")).unwrap_err();
        assert_eq!(err.to_string(), "Weekly salary must be >= 0.0");
        assert_eq!(err.field(), Some("weekly_salary"));
    }

    #[test]
    fn test_failed_setter_keeps_previous_salary() {
        let mut employee =
            SalariedEmployee::new("John", "Smith", "111-11-1111", dec("800")).unwrap();

        assert!(employee.set_weekly_salary(dec("-1")).is_err());
        assert_eq!(employee.weekly_salary(), dec("800"));

        employee.set_weekly_salary(dec("950.50")).unwrap();
        assert_eq!(employee.earnings(), dec("950.50"));
    }

    #[test]
    fn test_identity_accessors() {
        let employee = SalariedEmployee::new("John", "Smith", "111-11-1111", dec("800")).unwrap();
        assert_eq!(employee.first_name(), "John");
        assert_eq!(employee.last_name(), "Smith");
        assert_eq!(employee.social_security_number(), "111-11-1111");
    }

    #[test]
    fn test_summary() {
        let employee = SalariedEmployee::new("John", "Smith", "111-11-1111", dec("800")).unwrap();
        assert_eq!(
            employee.to_string(),
            "salaried employee: John Smith\n\
             social security number: 111-11-1111\n\
             weekly salary: $800.00"
        );
    }
}
