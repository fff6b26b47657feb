use std::process::ExitCode;

use clap::Parser;
use payroll_engine::cli::{Cli, execute, init_logger};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match execute(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Payroll failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
