//! Provider abstraction over exchange-rate sources

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::series::RateSeries;

/// Async source of exchange-rate data
///
/// [`crate::api::FixerClient`] is the production implementation. Command
/// handlers depend on this trait rather than the concrete client so they can
/// run against scripted providers in tests.
///
/// Absence and failure are kept apart: a provider that answered but had
/// nothing useful returns `Ok(None)`, while a transport-level failure
/// surfaces as an error. Historical fetches never fail as a whole; dates
/// that cannot be resolved are dropped from the series.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Supported currency codes mapped to display names
    async fn supported_currencies(&self) -> Result<Option<BTreeMap<String, String>>>;

    /// Latest rate for one unit of `base` expressed in `target` units
    async fn latest_rate(&self, base: &str, target: &str) -> Result<Option<f64>>;

    /// Day-by-day rates covering the last `days` calendar days, oldest first
    async fn historical_series(&self, base: &str, target: &str, days: u32) -> RateSeries;
}
