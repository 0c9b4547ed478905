//! Diagnostics backend for the demo binary.
//!
//! Library code logs through the `log` facade; the subscriber installed here
//! forwards those records to stderr, filtered by `STAYPATH_LOG`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::TryInitError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "STAYPATH_LOG";

/// Filter used when `STAYPATH_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `STAYPATH_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a stderr `fmt` subscriber. Fails if one is already installed.
pub fn init() -> Result<(), TryInitError> {
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
}
