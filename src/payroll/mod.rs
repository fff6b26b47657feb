//! Payroll run processing for the Payroll Engine.
//!
//! This module processes a heterogeneous roster of employees uniformly and
//! records the outcome as a [`PayrollReport`].

mod report;
mod run;

pub use report::{PayStatement, PayrollReport, RaiseApplied};
pub use run::PayrollRun;
