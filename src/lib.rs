//! Payroll Engine
//!
//! This crate computes weekly earnings for salaried, hourly, commission and
//! base-plus-commission employees, validates every pay field on construction
//! and mutation, and processes mixed rosters uniformly through a shared
//! earnings contract.

#![warn(missing_docs)]

pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
