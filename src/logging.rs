//! Tracing setup for the `bmitrack` binary.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "BMITRACK_LOG";

/// Initialize logging with the default `warn` level.
///
/// Output goes to stderr so that JSON on stdout stays parseable. The level can
/// be overridden with `BMITRACK_LOG` (e.g. `BMITRACK_LOG=debug`).
pub fn init() {
    init_with_level("warn")
}

/// Initialize logging with `default_level` when `BMITRACK_LOG` is unset.
/// A subscriber that is already installed is left in place.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
