//! Diagnostic logging to stderr via `tracing`.
//!
//! Level comes from `RATTENDANCE_LOG` (e.g. `debug`, `rattendance=trace`),
//! defaulting to `warn`.

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "RATTENDANCE_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (e.g. in tests) is not an error worth reporting
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
