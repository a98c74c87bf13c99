//! Error types for the bot surface

use thiserror::Error;

/// Errors that can occur while running the bot
#[derive(Debug, Error)]
pub enum BotError {
    /// Error from the rates layer
    #[error("Rates error: {0}")]
    RatesError(#[from] fxbot_rates::RatesError),

    /// Telegram Bot API reported failure or returned an unusable envelope
    #[error("Telegram API error: {0}")]
    TelegramError(String),

    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Chart rendering error
    #[error("Chart error: {0}")]
    ChartError(String),

    /// Malformed or unknown user command
    #[error("Command error: {0}")]
    CommandError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, BotError>;
