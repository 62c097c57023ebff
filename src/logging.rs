//! Tracing setup
//!
//! Logs go to stderr so they never interleave with line-mode output.
//! `RUST_LOG` takes precedence over the verbosity flag.

use tracing::trace;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Filter directive for a `-v` count
#[must_use]
pub fn directive_for_verbosity(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("hangman={level}")
}

/// Install the global subscriber
///
/// Calling it twice is harmless: the second install is ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(verbosity)));

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();

    if installed.is_ok() {
        trace!("tracing initialized");
    }
}
