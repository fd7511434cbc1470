//! Shared setup for the Cayley client binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes logging to stderr.
///
/// The level defaults to `info` and is overridden by `RUST_LOG`
/// (e.g. `RUST_LOG=cayley=debug`). Stdout stays reserved for results.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
