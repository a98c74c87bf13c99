//! Configuration for the Fixer API client

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{RatesError, Result};

/// Default base URL for the apilayer-hosted Fixer API
pub const DEFAULT_BASE_URL: &str = "https://api.apilayer.com/fixer/";

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`crate::api::FixerClient`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixerConfig {
    /// API key sent in the `apikey` request header
    pub api_key: String,
    /// Base URL of the rate provider
    pub base_url: String,
    /// Timeout applied to every request
    pub request_timeout: Duration,
}

impl FixerConfig {
    /// Create a configuration with default URL and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Create a configuration from the `FIXER_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("FIXER_API_KEY")
            .map_err(|_| RatesError::ConfigError("FIXER_API_KEY not set".to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Override the provider base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check the configuration for unusable values
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(RatesError::ConfigError("API key must not be empty".to_string()));
        }
        if self.base_url.is_empty() {
            return Err(RatesError::ConfigError("Base URL must not be empty".to_string()));
        }
        if self.request_timeout.is_zero() {
            return Err(RatesError::ConfigError(
                "Request timeout must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = FixerConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = FixerConfig::new("test-key")
            .with_base_url("http://localhost:8080/fixer/")
            .with_request_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://localhost:8080/fixer/");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validate_rejects_empty_api_key() {
        let config = FixerConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = FixerConfig::new("test-key").with_request_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
