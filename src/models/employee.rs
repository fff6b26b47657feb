//! The shared earnings contract and the closed set of employee variants.
//!
//! Every variant implements [`Earnings`] directly. [`Employee`] wraps the
//! four variants in a single sum type so heterogeneous rosters can be
//! processed uniformly, and [`EmployeeKind`] identifies the concrete variant.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    BasePlusCommissionEmployee, CommissionEmployee, HourlyEmployee, Identity, SalariedEmployee,
};

/// The capability shared by every employee variant.
///
/// Implementors provide their identity and a weekly earnings formula; the
/// identity accessors are derived from [`Earnings::identity`].
pub trait Earnings {
    /// Returns the identity fields of this employee.
    fn identity(&self) -> &Identity;

    /// Returns this week's pay. Always non-negative.
    fn earnings(&self) -> Decimal;

    /// Returns the first name.
    fn first_name(&self) -> &str {
        self.identity().first_name()
    }

    /// Returns the last name.
    fn last_name(&self) -> &str {
        self.identity().last_name()
    }

    /// Returns the social security number.
    fn social_security_number(&self) -> &str {
        self.identity().social_security_number()
    }

    /// Returns `"{first} {last}"`.
    fn full_name(&self) -> String {
        self.identity().full_name()
    }
}

/// Identifies the concrete variant of an [`Employee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Fixed weekly salary.
    Salaried,
    /// Hourly wage with weekly overtime.
    Hourly,
    /// Commission on gross sales.
    Commission,
    /// Base salary plus commission on gross sales.
    BasePlusCommission,
}

impl EmployeeKind {
    /// Returns the type name of the variant, e.g. `"SalariedEmployee"`.
    pub fn name(self) -> &'static str {
        match self {
            EmployeeKind::Salaried => "SalariedEmployee",
            EmployeeKind::Hourly => "HourlyEmployee",
            EmployeeKind::Commission => "CommissionEmployee",
            EmployeeKind::BasePlusCommission => "BasePlusCommissionEmployee",
        }
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any employee, regardless of how they are paid.
///
/// Rosters deserialize as a list of entries tagged by `type`:
///
/// ```
/// use payroll_engine::models::{Earnings, Employee, EmployeeKind};
/// use rust_decimal::Decimal;
///
/// let yaml = r#"
/// type: salaried
/// first_name: John
/// last_name: Smith
/// social_security_number: 111-11-1111
/// weekly_salary: "800.00"
/// "#;
///
/// let employee: Employee = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(employee.kind(), EmployeeKind::Salaried);
/// assert_eq!(employee.earnings(), Decimal::from(800));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Employee {
    /// A salaried employee.
    Salaried(SalariedEmployee),
    /// An hourly employee.
    Hourly(HourlyEmployee),
    /// A commission employee.
    Commission(CommissionEmployee),
    /// A base-plus-commission employee.
    BasePlusCommission(BasePlusCommissionEmployee),
}

impl Employee {
    /// Returns the concrete variant of this employee.
    pub fn kind(&self) -> EmployeeKind {
        match self {
            Employee::Salaried(_) => EmployeeKind::Salaried,
            Employee::Hourly(_) => EmployeeKind::Hourly,
            Employee::Commission(_) => EmployeeKind::Commission,
            Employee::BasePlusCommission(_) => EmployeeKind::BasePlusCommission,
        }
    }

    /// Returns the base-plus-commission record, if this is one.
    pub fn as_base_plus_commission(&self) -> Option<&BasePlusCommissionEmployee> {
        match self {
            Employee::BasePlusCommission(employee) => Some(employee),
            _ => None,
        }
    }

    /// Returns a mutable handle to the base-plus-commission record, if this is one.
    pub fn as_base_plus_commission_mut(&mut self) -> Option<&mut BasePlusCommissionEmployee> {
        match self {
            Employee::BasePlusCommission(employee) => Some(employee),
            _ => None,
        }
    }

    fn as_earnings(&self) -> &dyn Earnings {
        match self {
            Employee::Salaried(employee) => employee,
            Employee::Hourly(employee) => employee,
            Employee::Commission(employee) => employee,
            Employee::BasePlusCommission(employee) => employee,
        }
    }
}

impl Earnings for Employee {
    fn identity(&self) -> &Identity {
        self.as_earnings().identity()
    }

    fn earnings(&self) -> Decimal {
        self.as_earnings().earnings()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Employee::Salaried(employee) => fmt::Display::fmt(employee, f),
            Employee::Hourly(employee) => fmt::Display::fmt(employee, f),
            Employee::Commission(employee) => fmt::Display::fmt(employee, f),
            Employee::BasePlusCommission(employee) => fmt::Display::fmt(employee, f),
        }
    }
}

impl From<SalariedEmployee> for Employee {
    fn from(employee: SalariedEmployee) -> Self {
        Employee::Salaried(employee)
    }
}

impl From<HourlyEmployee> for Employee {
    fn from(employee: HourlyEmployee) -> Self {
        Employee::Hourly(employee)
    }
}

impl From<CommissionEmployee> for Employee {
    fn from(employee: CommissionEmployee) -> Self {
        Employee::Commission(employee)
    }
}

impl From<BasePlusCommissionEmployee> for Employee {
    fn from(employee: BasePlusCommissionEmployee) -> Self {
        Employee::BasePlusCommission(employee)
    }
}
