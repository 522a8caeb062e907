//! Diagnostic logging setup (stderr, filtered by `PUNCHCLOCK_LOG`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PUNCHCLOCK_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn enable_logging() {
    let level = std::env::var(LOG_ENV).unwrap_or_else(|_| "warn".into());
    let filter = EnvFilter::try_new(format!(
        "{}={level}",
        env!("CARGO_PKG_NAME").replace('-', "_")
    ))
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
