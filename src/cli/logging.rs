//! Tracing subscriber setup for the `payroll` binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `payroll_engine=info`, or
/// `payroll_engine=debug` when `verbose` is set. Logs go to stderr so that
/// report output on stdout stays clean.
pub fn init_logger(verbose: bool) {
    let default_directive = if verbose {
        "payroll_engine=debug"
    } else {
        "payroll_engine=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
