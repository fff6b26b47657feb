//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! settings and employee rosters from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayrollSettings, Roster};

/// Loads payroll settings and rosters from YAML files.
///
/// Roster entries are validated while they are deserialized, so an entry
/// with an out-of-range field fails the whole load with
/// [`PayrollError::ConfigParseError`] naming the violated constraint.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let settings = ConfigLoader::load_settings("./payroll.yaml")?;
/// let roster = ConfigLoader::load_roster("./roster.yaml")?;
/// println!(
///     "{} employees, {}% base salary raise",
///     roster.employees.len(),
///     settings.base_salary_raise_percent
/// );
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads payroll settings from a YAML file.
    pub fn load_settings<P: AsRef<Path>>(path: P) -> PayrollResult<PayrollSettings> {
        let path = path.as_ref();
        let settings = Self::load_yaml::<PayrollSettings>(path)?;
        info!(
            path = %path.display(),
            raise_percent = %settings.base_salary_raise_percent,
            "Loaded payroll settings"
        );
        Ok(settings)
    }

    /// Loads an employee roster from a YAML file.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::ConfigNotFound`] if the file cannot be read
    /// - [`PayrollError::ConfigParseError`] if the YAML is malformed or any
    ///   entry fails validation
    pub fn load_roster<P: AsRef<Path>>(path: P) -> PayrollResult<Roster> {
        let path = path.as_ref();
        let roster = Self::load_yaml::<Roster>(path)?;
        info!(
            path = %path.display(),
            employees = roster.employees.len(),
            "Loaded employee roster"
        );
        Ok(roster)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
