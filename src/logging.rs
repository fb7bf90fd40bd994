//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr so they never interleave with the console
//! receiver's output on stdout.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when the configured one does not parse.
pub const FALLBACK_FILTER: &str = "warn";

/// Builds the filter for `directive`, falling back to `FALLBACK_FILTER`.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Installs the global subscriber. Calling it a second time is a no-op.
pub fn init(directive: &str) {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(directive))
        .try_init();
}
