//! Tracing subscriber setup.
//!
//! The crate logs through `tracing` macros only; a consuming binary calls
//! [`init_tracing`] once at startup. Filtering comes from `MARQUEE_LOG`
//! (falling back to `RUST_LOG` syntax), defaulting to `marquee=info`.

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "MARQUEE_LOG";

const DEFAULT_FILTER: &str = "marquee=info";

/// Install a global subscriber writing to stderr.
///
/// Repeated calls are no-ops: the first subscriber wins, matching test
/// binaries that may race to initialize.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
