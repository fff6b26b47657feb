//! Commission employee model.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{calculate_commission, format_currency, format_fixed};
use crate::error::{PayrollError, PayrollResult};

use super::validation::{non_negative, within_exclusive};
use super::{Earnings, Identity};

const COMMISSION_RATE_MESSAGE: &str = "Commission rate must be > 0.0 and < 1.0";
const GROSS_SALES_MESSAGE: &str = "Gross sales must be >= 0.0";

/// An employee paid a fraction of their gross weekly sales.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{CommissionEmployee, Earnings};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = CommissionEmployee::new(
///     "Sue",
///     "Jones",
///     "333-33-3333",
///     Decimal::from(10_000),
///     Decimal::from_str("0.06").unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(employee.earnings(), Decimal::from(600));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CommissionEmployeeRecord")]
pub struct CommissionEmployee {
    #[serde(flatten)]
    identity: Identity,
    gross_sales: Decimal,
    commission_rate: Decimal,
}

impl CommissionEmployee {
    /// Creates a commission employee.
    ///
    /// The commission rate is checked before gross sales.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `commission_rate` is not strictly between
    /// 0 and 1, or if `gross_sales < 0`.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        social_security_number: impl Into<String>,
        gross_sales: Decimal,
        commission_rate: Decimal,
    ) -> PayrollResult<Self> {
        let commission_rate = validate_commission_rate(commission_rate)?;
        Ok(Self {
            gross_sales: validate_gross_sales(gross_sales)?,
            commission_rate,
            identity: Identity::new(first_name, last_name, social_security_number),
        })
    }

    /// Returns the gross sales for the week.
    pub fn gross_sales(&self) -> Decimal {
        self.gross_sales
    }

    /// Sets the gross sales. On error the previous value is kept.
    pub fn set_gross_sales(&mut self, gross_sales: Decimal) -> PayrollResult<()> {
        self.gross_sales = validate_gross_sales(gross_sales)?;
        Ok(())
    }

    /// Returns the commission rate.
    pub fn commission_rate(&self) -> Decimal {
        self.commission_rate
    }

    /// Sets the commission rate. On error the previous rate is kept.
    pub fn set_commission_rate(&mut self, commission_rate: Decimal) -> PayrollResult<()> {
        self.commission_rate = validate_commission_rate(commission_rate)?;
        Ok(())
    }
}

impl Earnings for CommissionEmployee {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn earnings(&self) -> Decimal {
        calculate_commission(self.gross_sales, self.commission_rate)
    }
}

impl fmt::Display for CommissionEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "commission employee: {}\ngross sales: {}; commission rate: {}",
            self.identity,
            format_currency(self.gross_sales),
            format_fixed(self.commission_rate)
        )
    }
}

fn validate_commission_rate(commission_rate: Decimal) -> PayrollResult<Decimal> {
    within_exclusive(
        commission_rate,
        Decimal::ZERO,
        Decimal::ONE,
        "commission_rate",
        COMMISSION_RATE_MESSAGE,
    )
}

fn validate_gross_sales(gross_sales: Decimal) -> PayrollResult<Decimal> {
    non_negative(gross_sales, "gross_sales", GROSS_SALES_MESSAGE)
}

#[derive(Deserialize)]
struct CommissionEmployeeRecord {
    #[serde(flatten)]
    identity: Identity,
    gross_sales: Decimal,
    commission_rate: Decimal,
}

impl TryFrom<CommissionEmployeeRecord> for CommissionEmployee {
    type Error = PayrollError;

    fn try_from(record: CommissionEmployeeRecord) -> PayrollResult<Self> {
        let commission_rate = validate_commission_rate(record.commission_rate)?;
        Ok(Self {
            gross_sales: validate_gross_sales(record.gross_sales)?,
            commission_rate,
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

    fn create_test_employee() -> CommissionEmployee {
        CommissionEmployee::new("Sue", "Jones", "333-33-3333", dec("10000"), dec("0.06")).unwrap()
    }

    #[test]
    fn test_earnings_are_rate_times_sales() {
        assert_eq!(create_test_employee().earnings(), dec("600.00"));
    }

    #[test]
    fn test_rate_endpoints_are_rejected() {
        for rate in ["0", "1", "-0.1", "1.5"] {
            let err = CommissionEmployee::new("a", "b", "c", dec("100"), dec(rate)).unwrap_err();
            assert_eq!(err.to_string(), "Commission rate must be > 0.0 and < 1.0");
            assert_eq!(err.field(), Some("commission_rate"));
        }
    }

    #[test]
    fn test_negative_sales_are_rejected() {
        let err = CommissionEmployee::new("a", "b", "c", dec("-1"), dec("0.1")).unwrap_err();
        assert_eq!(err.to_string(), "Gross sales must be >= 0.0");
    }

    #[test]
    fn test_rate_is_checked_before_sales() {
        let err = CommissionEmployee::new("a", "b", "c", dec("-1"), dec("2")).unwrap_err();
        assert_eq!(err.field(), Some("commission_rate"));
    }

    #[test]
    fn test_failed_setters_keep_previous_values() {
        let mut employee = create_test_employee();

        assert!(employee.set_commission_rate(dec("1.0")).is_err());
        assert!(employee.set_gross_sales(dec("-10")).is_err());

        assert_eq!(employee.commission_rate(), dec("0.06"));
        assert_eq!(employee.gross_sales(), dec("10000"));
    }

    #[test]
    fn test_setters_update_earnings() {
        let mut employee = create_test_employee();
        employee.set_gross_sales(dec("2000")).unwrap();
        employee.set_commission_rate(dec("0.1")).unwrap();
        assert_eq!(employee.earnings(), dec("200"));
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            create_test_employee().to_string(),
            "commission employee: Sue Jones\n\
             social security number: 333-33-3333\n\
             gross sales: $10,000.00; commission rate: 0.06"
        );
    }

    #[test]
    fn test_deserialize_rejects_invalid_rate() {
        let json = r#"{
            "first_name": "Sue",
            "last_name": "Jones",
            "social_security_number": "333-33-3333",
            "gross_sales": "10000",
            "commission_rate": "1"
        }"#;

        let err = serde_json::from_str::<CommissionEmployee>(json).unwrap_err();
        assert!(err.to_string().contains("Commission rate must be > 0.0 and < 1.0"));
    }
}
