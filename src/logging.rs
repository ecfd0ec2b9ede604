use std::sync::OnceLock;

use tracing::warn;
use tracing_subscriber::EnvFilter;

static INIT_GUARD: OnceLock<Result<(), String>> = OnceLock::new();

const DEFAULT_FILTER: &str = "info";

/// Installs the process-wide `fmt` subscriber, filtered by `RUST_LOG`
/// (default `info`) and writing to stderr so PPM output on stdout stays clean.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_logging() {
    let result = INIT_GUARD.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|err| err.to_string())
    });

    if let Err(err) = result {
        warn!("failed to initialise tracing subscriber: {err}");
    }
}
