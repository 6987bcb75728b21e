//! Structured logging setup.
//!
//! Logs go to stderr so command output on stdout stays parseable. The filter
//! comes from `RUST_LOG` and defaults to warnings only.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging for the application.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
