//! Subscriber installation.

use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{LogFormat, LogLevel};

/// Errors from logging setup.
#[derive(Error, Debug)]
pub enum ObservabilityError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Invalid log format: {0}")]
    InvalidFormat(String),

    #[error("Failed to install subscriber: {0}")]
    Subscriber(String),
}

/// Default filter directive: `level` for the storefront crates, warn elsewhere.
pub fn default_directive(level: LogLevel) -> String {
    let level = level.as_str();
    format!(
        "warn,luz_commerce={level},luz_storefront={level},luz_observability={level},luz={level}"
    )
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `level` when set.
pub fn init_logging(format: LogFormat, level: LogLevel) -> Result<(), ObservabilityError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Human => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| ObservabilityError::Subscriber(e.to_string()))
}
