//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during logging initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber was already installed, or installing it failed
    #[error("Failed to initialize logging: {0}")]
    InitFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
