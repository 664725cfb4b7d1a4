pub mod backend;
#[cfg(feature = "tauri")]
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod picker;
pub mod session;

pub use error::{Error, Result};
pub use session::{Navigator, Screen, Session, SessionStatus};

use config::NavigatorConfig;
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` overrides `default_filter`.
/// Later calls are no-ops.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(default_filter));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Install the fmt subscriber with the config's `log_filter` as default.
pub fn init_tracing_from(config: &NavigatorConfig) {
    init_tracing(&config.log_filter);
}

// An unparsable configured filter must not silence logging.
fn fallback_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|e| {
        eprintln!("invalid log filter {:?} ({}); using info", directives, e);
        EnvFilter::new("info")
    })
}
