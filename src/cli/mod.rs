//! Command line front end for the Payroll Engine.
//!
//! This module turns command line arguments into a payroll run and renders
//! the result either as text or as a JSON report.

mod args;
mod logging;
mod render;

pub use args::Cli;
pub use logging::init_logger;
pub use render::{render_individual, render_report};

use crate::error::{PayrollError, PayrollResult};
use crate::payroll::PayrollRun;

/// Runs payroll as described by `cli` and returns the output to print.
///
/// Text output lists every employee with their earnings before the run,
/// then the run itself. JSON output is the serialized
/// [`PayrollReport`](crate::payroll::PayrollReport).
pub fn execute(cli: &Cli) -> PayrollResult<String> {
    let settings = cli.resolve_settings()?;
    let mut roster = cli.resolve_roster()?;

    let individual = render_individual(&roster.employees);
    let report = PayrollRun::new(settings).process(&mut roster.employees)?;

    if cli.json {
        return serde_json::to_string_pretty(&report).map_err(|e| {
            PayrollError::ReportSerialization {
                message: e.to_string(),
            }
        });
    }

    Ok(format!("{}{}", individual, render_report(&report)))
}
