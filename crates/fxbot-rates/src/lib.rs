//! Exchange-rate data access and series analytics
//!
//! This crate provides the data layer for the fxbot Telegram bot. It includes:
//!
//! - A Fixer API client for supported currencies, latest rates and
//!   historical day-by-day series
//! - A chronological series model ([`RateSeries`]) built from newest-first
//!   provider responses
//! - Trend classification and percentage-change analytics over rate
//!   sequences
//! - A [`RateProvider`] trait so callers can swap the real client for a
//!   scripted one in tests
//!
//! # Example
//!
//! ```rust,ignore
//! use fxbot_rates::{FixerClient, RateProvider, classify_trend};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Reads FIXER_API_KEY from the environment
//!     let client = FixerClient::from_env()?;
//!
//!     if let Some(rate) = client.latest_rate("USD", "EUR").await? {
//!         println!("1 USD = {rate} EUR");
//!     }
//!
//!     let series = client.historical_series("USD", "EUR", 30).await;
//!     println!("30-day trend: {}", classify_trend(&series.rates()));
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod config;
pub mod error;
pub mod provider;
pub mod series;

// Re-export main types for convenience
pub use analytics::{Trend, classify_trend, percentage_change};
pub use api::FixerClient;
pub use config::FixerConfig;
pub use error::{RatesError, Result};
pub use provider::RateProvider;
pub use series::{RatePoint, RateSeries};
