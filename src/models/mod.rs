//! Core data models for the Payroll Engine.
//!
//! This module contains the employee variants, the identity record they
//! share, and the [`Earnings`] contract used to process them uniformly.

mod base_plus_commission;
mod commission;
mod employee;
mod hourly;
mod identity;
mod salaried;
mod validation;

pub use base_plus_commission::BasePlusCommissionEmployee;
pub use commission::CommissionEmployee;
pub use employee::{Earnings, Employee, EmployeeKind};
pub use hourly::HourlyEmployee;
pub use identity::Identity;
pub use salaried::SalariedEmployee;
