//! Configuration loading for the Payroll Engine.
//!
//! This module provides functionality to load payroll settings and employee
//! rosters from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let roster = ConfigLoader::load_roster("./roster.yaml").unwrap();
//! println!("Loaded {} employees", roster.employees.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollSettings, Roster};
