//!
//! Diagnostic logging shared by the binaries.
//!

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Filter used when the terminal output is suppressed.
pub const QUIET_FILTER: &str = "error";

///
/// Installs the stderr subscriber.
///
/// `RUST_LOG` is honored unless `quiet` is set. Repeated calls are no-ops.
///
pub fn initialize(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        std::env::var(EnvFilter::DEFAULT_ENV)
            .ok()
            .and_then(|expression| EnvFilter::try_new(expression).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
