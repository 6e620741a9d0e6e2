//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`; the report itself is plain
//! stdout output and never passes through the subscriber.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `seaquest=debug`)
pub const LOG_ENV: &str = "SEAQUEST_LOG";

/// Filter used when `SEAQUEST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
