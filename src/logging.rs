//! Tracing subscriber setup.

use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the crate, derived from the toggles.
pub fn default_directive(logging: &LoggingConfig) -> String {
    format!("balance_board={}", logging.level())
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the toggles.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(logging)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}
