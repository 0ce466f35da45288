//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Simulated latency {actual}ms exceeds maximum of {max}ms")]
    LatencyTooLarge { actual: u64, max: u64 },

    #[error("Reference data file not found: {0}")]
    ReferenceDataNotFound(String),

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
