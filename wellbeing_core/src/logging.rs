//! Tracing setup for the `wellbeing` binary.
//!
//! Everything goes to stderr. Stdout carries the menu and prompts, and a
//! log line landing in the middle of a prompt would garble the transcript.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber
///
/// Quiet by default (`warn`); `verbose` lowers the floor to `debug`.
/// A `RUST_LOG` value in the environment wins over both.
pub fn init(verbose: bool) {
    init_with_level(if verbose { "debug" } else { "warn" })
}

/// Install the global subscriber with `default_level` as the fallback filter
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route debug logs into the test harness output; safe to call repeatedly
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
