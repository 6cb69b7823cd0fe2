//! Diagnostic logging setup.
//!
//! Log events go to stderr so they never mix with the editor's own output on
//! stdout. `RUST_LOG` wins when set; otherwise the level follows the
//! configured verbosity.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a filter directive.
pub fn level_for(verbosity: i64) -> &'static str {
    match verbosity {
        i64::MIN..=0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Calling this twice is harmless.
pub fn init(verbosity: i64) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
