//! Payroll run processing.
//!
//! A [`PayrollRun`] walks a roster in order and processes every employee
//! through the shared [`Earnings`] contract, applying the configured base
//! salary raise to base-plus-commission employees along the way.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::PayrollSettings;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Earnings, Employee};

use super::report::{PayStatement, PayrollReport, RaiseApplied};

/// Processes a roster of employees with a fixed set of settings.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{PayrollSettings, Roster};
/// use payroll_engine::payroll::PayrollRun;
/// use rust_decimal::Decimal;
///
/// let mut roster = Roster::demo()?;
/// let report = PayrollRun::new(PayrollSettings::default()).process(&mut roster.employees)?;
///
/// assert_eq!(report.statements[3].earnings, Decimal::from(530));
/// assert_eq!(report.total_earnings, Decimal::from(2_600));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PayrollRun {
    settings: PayrollSettings,
}

impl PayrollRun {
    /// Creates a run with the given settings.
    pub fn new(settings: PayrollSettings) -> Self {
        Self { settings }
    }

    /// Processes every employee in order and returns the report.
    ///
    /// Base-plus-commission employees have their base salary raised in place
    /// before their earnings are taken; everyone else is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a raise would take a base salary below
    /// zero, and `ArithmeticOverflow` if a raise or the run total does not
    /// fit in a `Decimal`. That employee keeps their previous base salary;
    /// employees earlier in the roster keep any raise they already received.
    pub fn process(&self, employees: &mut [Employee]) -> PayrollResult<PayrollReport> {
        let run_id = Uuid::new_v4();
        let start_time = Instant::now();
        info!(
            run_id = %run_id,
            employees = employees.len(),
            raise_percent = %self.settings.base_salary_raise_percent,
            "Processing payroll run"
        );

        let mut statements = Vec::with_capacity(employees.len());
        for (index, employee) in employees.iter_mut().enumerate() {
            let statement = self.process_employee(index, employee).inspect_err(|err| {
                warn!(run_id = %run_id, index, error = %err, "Payroll run aborted");
            })?;
            debug!(
                run_id = %run_id,
                index,
                kind = %statement.kind,
                earnings = %statement.earnings,
                "Processed employee"
            );
            statements.push(statement);
        }

        let total_earnings = sum_earnings(&statements).inspect_err(|err| {
            warn!(run_id = %run_id, error = %err, "Payroll run aborted");
        })?;
        let duration_us = u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX);
        info!(
            run_id = %run_id,
            total_earnings = %total_earnings,
            duration_us,
            "Payroll run completed"
        );

        Ok(PayrollReport {
            run_id,
            processed_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            statements,
            total_earnings,
            duration_us,
        })
    }

    fn process_employee(
        &self,
        index: usize,
        employee: &mut Employee,
    ) -> PayrollResult<PayStatement> {
        let summary = employee.to_string();

        let raise = match employee.as_base_plus_commission_mut() {
            Some(base_plus) => {
                let percent = self.settings.base_salary_raise_percent;
                let previous_base_salary = base_plus.base_salary();
                let new_base_salary = base_plus.raise_base_salary(percent)?;
                info!(
                    index,
                    employee = %base_plus.full_name(),
                    previous_base_salary = %previous_base_salary,
                    new_base_salary = %new_base_salary,
                    "Applied base salary raise"
                );
                Some(RaiseApplied {
                    percent,
                    previous_base_salary,
                    new_base_salary,
                })
            }
            None => None,
        };

        Ok(PayStatement {
            index,
            kind: employee.kind(),
            employee_name: employee.full_name(),
            summary,
            raise,
            earnings: employee.earnings(),
        })
    }
}

fn sum_earnings(statements: &[PayStatement]) -> PayrollResult<Decimal> {
    statements.iter().try_fold(Decimal::ZERO, |total, statement| {
        total
            .checked_add(statement.earnings)
            .ok_or(PayrollError::ArithmeticOverflow {
                operation: "total earnings",
            })
    })
}

impl Default for PayrollRun {
    fn default() -> Self {
        Self::new(PayrollSettings::default())
    }
}
