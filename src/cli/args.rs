//! Command line arguments for the `payroll` binary.

use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

use crate::config::{ConfigLoader, PayrollSettings, Roster};
use crate::error::PayrollResult;

/// Runs weekly payroll over a roster of employees.
///
/// Without `--roster`, the reference roster of four employees (one of each
/// variant) is processed.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "payroll", version, about)]
pub struct Cli {
    /// YAML roster file to process instead of the reference roster.
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// YAML settings file.
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Base salary raise for base-plus-commission employees, in percent.
    /// Overrides the settings file.
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    pub raise_percent: Option<Decimal>,

    /// Print the payroll report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolves settings from the settings file and command line overrides.
    pub fn resolve_settings(&self) -> PayrollResult<PayrollSettings> {
        let mut settings = match &self.settings {
            Some(path) => ConfigLoader::load_settings(path)?,
            None => PayrollSettings::default(),
        };
        if let Some(percent) = self.raise_percent {
            settings.base_salary_raise_percent = percent;
        }
        Ok(settings)
    }

    /// Loads the roster file, or the reference roster when none was given.
    pub fn resolve_roster(&self) -> PayrollResult<Roster> {
        match &self.roster {
            Some(path) => ConfigLoader::load_roster(path),
            None => Roster::demo(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["payroll"]).unwrap();
        assert!(cli.roster.is_none());
        assert!(cli.raise_percent.is_none());
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "payroll",
            "--roster",
            "roster.yaml",
            "--settings",
            "payroll.yaml",
            "--raise-percent",
            "7.5",
            "--json",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.roster, Some(PathBuf::from("roster.yaml")));
        assert_eq!(cli.settings, Some(PathBuf::from("payroll.yaml")));
        assert_eq!(cli.raise_percent, Some(Decimal::new(75, 1)));
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_invalid_raise_percent_is_rejected() {
        assert!(Cli::try_parse_from(["payroll", "--raise-percent", "ten"]).is_err());
    }

    #[test]
    fn test_raise_percent_overrides_default() {
        let cli = Cli {
            raise_percent: Some(Decimal::from(3)),
            ..Cli::default()
        };
        assert_eq!(
            cli.resolve_settings().unwrap().base_salary_raise_percent,
            Decimal::from(3)
        );
    }

    #[test]
    fn test_resolve_roster_defaults_to_demo() {
        let roster = Cli::default().resolve_roster().unwrap();
        assert_eq!(roster, Roster::demo().unwrap());
    }
}
