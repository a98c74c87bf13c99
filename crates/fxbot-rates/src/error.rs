//! Error types for exchange-rate operations

use thiserror::Error;

/// Errors that can occur while fetching or analysing exchange rates
#[derive(Debug, Error)]
pub enum RatesError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Arithmetic error, such as a percentage change over a zero base rate
    #[error("Arithmetic error: {0}")]
    ArithmeticError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for rate operations
pub type Result<T> = std::result::Result<T, RatesError>;
