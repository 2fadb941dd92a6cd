//! Subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

/// Level used when `REPOPROBE_LOG` is unset or unparsable.
pub const DEFAULT_LEVEL: &str = "warn";

/// Installs a compact `fmt` subscriber writing to stderr.
///
/// The filter comes from `REPOPROBE_LOG` (any `EnvFilter` directive, e.g.
/// `debug` or `repoprobe=trace`). Calling this twice is harmless; the second
/// call leaves the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}
