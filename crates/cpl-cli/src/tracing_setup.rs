//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cpl_core::config::ObservabilityConfig;
use cpl_core::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the subscriber once. Logs go to stderr so command output on
/// stdout stays machine-readable.
///
/// `CPL_LOG` takes precedence (e.g. `CPL_LOG=cpl_scoring=debug,cpl_storage=info`);
/// otherwise the configured level applies.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let registry = tracing_subscriber::registry().with(filter);
        if config.json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
