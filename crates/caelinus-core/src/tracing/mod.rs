//! Tracing subscriber setup.
//!
//! `CAELINUS_LOG` takes precedence over the configured level, using the usual
//! `EnvFilter` directive syntax ("debug", "caelinus_client=trace", ...).

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "CAELINUS_LOG";

static INIT: OnceLock<bool> = OnceLock::new();

/// Install the global subscriber once. Later calls are no-ops.
///
/// Returns false if another subscriber was already installed by the host.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    *INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(config.effective_log_level()));
        let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
        let installed = if config.effective_json_logs() {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        installed.is_ok()
    })
}
