//! Payroll report models.
//!
//! A [`PayrollReport`] records what a payroll run did to each employee, in
//! roster order: the summary as it stood before processing, any base salary
//! raise applied, and the resulting earnings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::EmployeeKind;

/// A base salary raise applied during a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaiseApplied {
    /// The raise percentage.
    pub percent: Decimal,
    /// Base salary before the raise.
    pub previous_base_salary: Decimal,
    /// Base salary after the raise.
    pub new_base_salary: Decimal,
}

/// The outcome of processing one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayStatement {
    /// Position of the employee in the roster.
    pub index: usize,
    /// The concrete employee variant.
    pub kind: EmployeeKind,
    /// `"{first} {last}"`.
    pub employee_name: String,
    /// The employee summary captured before any raise was applied.
    pub summary: String,
    /// The raise applied, for base-plus-commission employees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raise: Option<RaiseApplied>,
    /// Earnings for the week, after any raise.
    pub earnings: Decimal,
}

/// The complete result of a payroll run.
///
/// # Example
///
/// ```
/// use payroll_engine::payroll::PayrollReport;
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let report = PayrollReport {
///     run_id: Uuid::new_v4(),
///     processed_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     statements: vec![],
///     total_earnings: Decimal::ZERO,
///     duration_us: 0,
/// };
/// assert!(report.kinds().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub processed_at: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// One statement per employee, in roster order.
    pub statements: Vec<PayStatement>,
    /// Sum of all statement earnings.
    pub total_earnings: Decimal,
    /// The run duration in microseconds.
    pub duration_us: u64,
}

impl PayrollReport {
    /// Returns the employee variant at each roster position.
    pub fn kinds(&self) -> Vec<EmployeeKind> {
        self.statements.iter().map(|statement| statement.kind).collect()
    }

    /// Returns the statements that carry a raise.
    pub fn raises(&self) -> impl Iterator<Item = &PayStatement> {
        self.statements
            .iter()
            .filter(|statement| statement.raise.is_some())
    }
}
