//! Logging setup
//!
//! Logs go to stderr; stdout carries only JSON results.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the default `info` filter.
pub fn init() {
    init_with_filter("info");
}

/// Initialize tracing with a custom default filter, overridden by `RUST_LOG`.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
