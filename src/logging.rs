//! Diagnostic logging setup
//!
//! Structured logs go to stderr through `tracing-subscriber`. The filter is
//! read from `TONE_PREVIEW_LOG` (same syntax as `RUST_LOG`) and defaults to
//! `info`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV_VAR: &str = "TONE_PREVIEW_LOG";
const DEFAULT_FILTER: &str = "info";

/// Build the filter from the environment, falling back to the default level.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(env_filter())
        .try_init();
}
