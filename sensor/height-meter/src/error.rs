//! Error types for height-meter crate.

use thiserror::Error;

/// Errors that can occur while setting up a height meter.
///
/// Ticks themselves never fail: a missing hit or pose is an ordinary state.
/// Errors only arise at the configuration boundary.
#[derive(Debug, Error)]
pub enum MeterError {
    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl MeterError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

/// Result type for height meter operations.
pub type Result<T> = std::result::Result<T, MeterError>;
