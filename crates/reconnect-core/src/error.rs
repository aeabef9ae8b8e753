//! Error types for the reconnect card

use thiserror::Error;

/// Main error type for card setup.
///
/// Everything that can go wrong happens at startup. Once a card is
/// initialized, spawning and removing decorations never fails.
#[derive(Error, Debug)]
pub enum CardError {
    /// Configuration values are out of range or inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Card was initialized outside a tokio runtime
    #[error("No tokio runtime available to drive card timers")]
    NoRuntime,

    /// Global tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
