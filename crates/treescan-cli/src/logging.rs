//! Diagnostic logging setup
//!
//! Diagnostics always go to standard error so the JSON report on
//! standard output stays machine-readable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "TREESCAN_LOG";

/// Filter for the given verbosity, unless `TREESCAN_LOG` is set and valid
#[must_use]
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose))
}

/// Filter used when no override is present
#[must_use]
pub fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("off")
    }
}

/// Install the global subscriber
pub fn setup_logging(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(build_filter(verbose))
        .try_init();
}
