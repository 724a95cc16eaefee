//! Logging initialization.
//!
//! Respects `RUST_LOG`; mutator application and request assembly log at
//! debug level.

use env_logger::Env;

/// Initialize the global logger, defaulting to `info` when `RUST_LOG` is
/// unset.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
