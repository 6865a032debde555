//! Logger initialization for the binary.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` once.
///
/// This function is idempotent; subsequent calls are ignored. Intended
/// usage is early in `main`. Respects `RUST_LOG`; without it the level
/// defaults to `warn` so the tool stays quiet, and all log output goes to
/// stderr (stdout is reserved for the confirmation lines).
pub fn init() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
