use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config;

/// Logging setup.
pub struct LoggingConfig;

impl LoggingConfig {
    /// Initialize the tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence when set; otherwise the filter follows
    /// `FLOWMAN_ENV` (`dev` gives debug output, anything else info and
    /// warnings only).
    pub fn init() {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            if config::is_dev_env() {
                EnvFilter::new("flowman=debug,info")
            } else {
                EnvFilter::new("flowman=info,warn")
            }
        });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true))
            .init();
    }

    /// Initialize with an explicit filter string.
    pub fn init_with_filter(filter: &str) {
        tracing_subscriber::registry()
            .with(EnvFilter::new(filter))
            .with(fmt::layer())
            .init();
    }
}
