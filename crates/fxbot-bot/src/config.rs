//! Configuration for the Telegram bot

use fxbot_rates::FixerConfig;

use crate::error::{BotError, Result};

/// Default long-poll timeout passed to getUpdates, in seconds
pub const DEFAULT_POLL_TIMEOUT_SECS: u32 = 30;

/// Configuration for the bot process
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Bot token from BotFather
    pub telegram_token: String,
    /// Rate provider configuration
    pub fixer: FixerConfig,
    /// Long-poll timeout for getUpdates, in seconds
    pub poll_timeout_secs: u32,
}

impl BotConfig {
    /// Create config from environment variables
    ///
    /// Reads `TELEGRAM_BOT_TOKEN` and `FIXER_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let telegram_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| BotError::ConfigError("TELEGRAM_BOT_TOKEN not set".to_string()))?;
        let fixer = FixerConfig::from_env()?;

        Ok(Self {
            telegram_token,
            fixer,
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT_SECS,
        })
    }

    /// Create a builder
    pub fn builder() -> BotConfigBuilder {
        BotConfigBuilder::default()
    }
}

/// Builder for [`BotConfig`]
#[derive(Debug, Default)]
pub struct BotConfigBuilder {
    telegram_token: Option<String>,
    fixer: Option<FixerConfig>,
    poll_timeout_secs: Option<u32>,
}

impl BotConfigBuilder {
    /// Set the Telegram bot token
    pub fn telegram_token(mut self, token: impl Into<String>) -> Self {
        self.telegram_token = Some(token.into());
        self
    }

    /// Set the rate provider configuration
    pub fn fixer(mut self, config: FixerConfig) -> Self {
        self.fixer = Some(config);
        self
    }

    /// Set the long-poll timeout in seconds
    pub fn poll_timeout_secs(mut self, secs: u32) -> Self {
        self.poll_timeout_secs = Some(secs);
        self
    }

    /// Build the config
    pub fn build(self) -> Result<BotConfig> {
        let telegram_token = self
            .telegram_token
            .ok_or_else(|| BotError::ConfigError("Telegram token is required".to_string()))?;
        let fixer = self
            .fixer
            .ok_or_else(|| BotError::ConfigError("Fixer configuration is required".to_string()))?;

        Ok(BotConfig {
            telegram_token,
            fixer,
            poll_timeout_secs: self.poll_timeout_secs.unwrap_or(DEFAULT_POLL_TIMEOUT_SECS),
        })
    }
}
