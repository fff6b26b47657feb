//! Plain-text rendering of employees and payroll reports.

use crate::calculation::format_currency;
use crate::models::{Earnings, Employee};
use crate::payroll::PayrollReport;

/// Renders each employee with their current earnings.
pub fn render_individual(employees: &[Employee]) -> String {
    let mut out = String::from("Employees processed individually:\n\n");
    for employee in employees {
        out.push_str(&format!(
            "{}\nearned: {}\n\n",
            employee,
            format_currency(employee.earnings())
        ));
    }
    out
}

/// Renders a payroll report: each statement in order, then the variant of
/// each roster position.
pub fn render_report(report: &PayrollReport) -> String {
    let mut out = String::from("Employees processed polymorphically:\n\n");
    for statement in &report.statements {
        out.push_str(&statement.summary);
        out.push('\n');
        if let Some(raise) = &statement.raise {
            out.push_str(&format!(
                "new base salary with {}% increase is: {}\n",
                raise.percent.normalize(),
                format_currency(raise.new_base_salary)
            ));
        }
        out.push_str(&format!("earned {}\n\n", format_currency(statement.earnings)));
    }
    for statement in &report.statements {
        out.push_str(&format!("Employee {} is a {}\n", statement.index, statement.kind));
    }
    out
}
