//! Logging setup
//!
//! Installs the global `tracing` subscriber. Library code only emits events;
//! the binary decides where they go.

use crate::config::LoggingConfig;
use crate::utils::error::{Result, ServiceError};
use tracing_subscriber::EnvFilter;

/// Build the filter for the subscriber, preferring `RUST_LOG` when set
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            ServiceError::config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Initialize the global tracing subscriber
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| ServiceError::internal(format!("Failed to install logger: {}", e)))
}
