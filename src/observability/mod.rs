//! Observability
//!
//! Tracing subscriber setup for the binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Set to any value to emit JSON log lines
pub const LOG_JSON_ENV: &str = "CAFFEE_LOG_JSON";

/// Install the global subscriber.
///
/// Honours `RUST_LOG`, defaulting to `info`. Returns `false` when a
/// subscriber was already installed.
pub fn init_tracing(structured: bool) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let result = if structured {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.is_ok()
}

/// Whether JSON logging was requested through the environment
pub fn structured_from_env() -> bool {
    std::env::var_os(LOG_JSON_ENV).is_some()
}
