//! Fixer exchange-rate API client
//!
//! Fixer (hosted on apilayer) serves current and historical foreign-exchange
//! rates for 170+ currencies, refreshed every 60 seconds on paid plans.
//!
//! API Key: Free registration at https://apilayer.com/marketplace/fixer-api
//! Authentication: `apikey` request header

use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::config::FixerConfig;
use crate::error::Result;
use crate::provider::RateProvider;
use crate::series::{RatePoint, RateSeries};

/// Response from the `symbols` endpoint
#[derive(Debug, Clone, Deserialize)]
struct SymbolsResponse {
    #[serde(default)]
    success: bool,
    symbols: Option<BTreeMap<String, String>>,
}

/// Response from the `latest` and date endpoints
#[derive(Debug, Clone, Deserialize)]
struct RatesResponse {
    #[serde(default)]
    success: bool,
    rates: Option<HashMap<String, f64>>,
}

impl RatesResponse {
    /// Rate for `target`, if the provider reported success and quoted it
    fn rate_for(&self, target: &str) -> Option<f64> {
        if !self.success {
            return None;
        }
        self.rates.as_ref()?.get(target).copied()
    }
}

/// Fixer API client
#[derive(Debug, Clone)]
pub struct FixerClient {
    client: Client,
    config: FixerConfig,
}

impl FixerClient {
    /// Create a new Fixer client
    ///
    /// # Arguments
    /// * `config` - API key, base URL and timeout settings
    pub fn new(config: FixerConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { client, config })
    }

    /// Create from environment variable FIXER_API_KEY
    pub fn from_env() -> Result<Self> {
        Self::new(FixerConfig::from_env()?)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Get the mapping of supported currency codes to display names
    ///
    /// Returns `Ok(None)` when the provider flags failure or the body is not
    /// the expected shape. Transport errors propagate.
    pub async fn get_symbols(&self) -> Result<Option<BTreeMap<String, String>>> {
        let response = self
            .client
            .get(self.endpoint("symbols"))
            .header("apikey", &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        let data: SymbolsResponse = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Unreadable symbols response ({}): {}", status, e);
                return Ok(None);
            }
        };

        if !data.success {
            tracing::warn!("Fixer reported failure for symbols request ({})", status);
            return Ok(None);
        }

        Ok(data.symbols)
    }

    /// Get the latest rate for one unit of `base` expressed in `target` units
    ///
    /// Absence (provider failure, missing quote, unknown code) comes back as
    /// `Ok(None)`; only transport errors are `Err`.
    pub async fn get_latest_rate(&self, base: &str, target: &str) -> Result<Option<f64>> {
        self.fetch_rate("latest", base, target).await
    }

    /// Get the rate quoted on a specific calendar date
    pub async fn get_rate_on(
        &self,
        date: NaiveDate,
        base: &str,
        target: &str,
    ) -> Result<Option<f64>> {
        let path = date.format("%Y-%m-%d").to_string();
        self.fetch_rate(&path, base, target).await
    }

    async fn fetch_rate(&self, path: &str, base: &str, target: &str) -> Result<Option<f64>> {
        let response = self
            .client
            .get(self.endpoint(path))
            .header("apikey", &self.config.api_key)
            .query(&[("base", base), ("symbols", target)])
            .send()
            .await?;

        let status = response.status();
        let data: RatesResponse = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Unreadable rates response ({}): {}", status, e);
                return Ok(None);
            }
        };

        Ok(data.rate_for(target))
    }

    /// Get day-by-day rates for the last `days` calendar days, today included
    ///
    /// Fetches one date at a time, newest first, and drops any date whose
    /// rate cannot be resolved. The returned series is chronological and may
    /// hold fewer than `days` points; it is empty when every date failed.
    pub async fn get_historical_series(&self, base: &str, target: &str, days: u32) -> RateSeries {
        let today = Utc::now().date_naive();
        let mut points = Vec::new();

        for date in window_dates(today, days) {
            match self.get_rate_on(date, base, target).await {
                Ok(Some(rate)) => points.push(RatePoint::new(date, rate)),
                Ok(None) => {
                    tracing::warn!("No {}/{} rate for {}, dropping date", base, target, date);
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch {}/{} for {}: {}", base, target, date, e);
                }
            }
        }

        RateSeries::from_newest_first(points)
    }
}

#[async_trait]
impl RateProvider for FixerClient {
    async fn supported_currencies(&self) -> Result<Option<BTreeMap<String, String>>> {
        self.get_symbols().await
    }

    async fn latest_rate(&self, base: &str, target: &str) -> Result<Option<f64>> {
        self.get_latest_rate(base, target).await
    }

    async fn historical_series(&self, base: &str, target: &str, days: u32) -> RateSeries {
        self.get_historical_series(base, target, days).await
    }
}

/// Calendar dates covering the last `days` days, newest first
///
/// Stops at the earliest representable date, so an oversized window
/// shrinks instead of overflowing.
fn window_dates(today: NaiveDate, days: u32) -> impl Iterator<Item = NaiveDate> {
    (0..days).map_while(move |offset| today.checked_sub_days(Days::new(u64::from(offset))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FixerClient::new(FixerConfig::new("test_key")).unwrap();
        assert_eq!(client.config.api_key, "test_key");
    }

    #[test]
    fn test_client_creation_rejects_empty_key() {
        assert!(FixerClient::new(FixerConfig::new("")).is_err());
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = FixerClient::new(FixerConfig::new("test_key")).unwrap();
        assert_eq!(client.endpoint("latest"), "https://api.apilayer.com/fixer/latest");

        let client = FixerClient::new(
            FixerConfig::new("test_key").with_base_url("http://localhost:8080/fixer"),
        )
        .unwrap();
        assert_eq!(client.endpoint("symbols"), "http://localhost:8080/fixer/symbols");
    }

    #[test]
    fn test_window_dates_run_newest_first() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let dates: Vec<NaiveDate> = window_dates(today, 3).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            ]
        );
    }

    #[test]
    fn test_window_dates_cross_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let dates: Vec<NaiveDate> = window_dates(today, 2).collect();
        assert_eq!(dates[1], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_window_dates_empty_for_zero_days() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(window_dates(today, 0).count(), 0);
    }

    #[test]
    fn test_window_dates_stop_at_calendar_floor() {
        let start = NaiveDate::MIN.checked_add_days(Days::new(2)).unwrap();
        let dates: Vec<NaiveDate> = window_dates(start, 10).collect();
        assert_eq!(dates.len(), 3);
        assert_eq!(dates.last(), Some(&NaiveDate::MIN));
    }

    #[test]
    fn test_rates_response_extraction() {
        let data: RatesResponse =
            serde_json::from_str(r#"{"success": true, "base": "USD", "rates": {"EUR": 0.92}}"#)
                .unwrap();
        assert_eq!(data.rate_for("EUR"), Some(0.92));
        assert_eq!(data.rate_for("GBP"), None);
    }

    #[test]
    fn test_rates_response_failure_flag_hides_rates() {
        let data: RatesResponse =
            serde_json::from_str(r#"{"success": false, "rates": {"EUR": 0.92}}"#).unwrap();
        assert_eq!(data.rate_for("EUR"), None);
    }

    #[test]
    fn test_rates_response_tolerates_missing_fields() {
        let data: RatesResponse = serde_json::from_str(r#"{"error": "invalid_api_key"}"#).unwrap();
        assert_eq!(data.rate_for("EUR"), None);
    }

    #[test]
    fn test_symbols_response_parsing() {
        let data: SymbolsResponse = serde_json::from_str(
            r#"{"success": true, "symbols": {"EUR": "Euro", "USD": "United States Dollar"}}"#,
        )
        .unwrap();
        assert!(data.success);
        let symbols = data.symbols.unwrap();
        assert_eq!(symbols.get("EUR").map(String::as_str), Some("Euro"));
    }

    #[tokio::test]
    #[ignore] // Requires API key and network access
    async fn test_get_latest_rate() {
        let client = FixerClient::from_env().unwrap();
        let rate = client.get_latest_rate("USD", "EUR").await.unwrap();
        assert!(rate.is_some());
        assert!(rate.unwrap() > 0.0);
    }

    #[tokio::test]
    #[ignore] // Requires API key and network access
    async fn test_get_symbols() {
        let client = FixerClient::from_env().unwrap();
        let symbols = client.get_symbols().await.unwrap();
        assert!(symbols.is_some());
        assert!(symbols.unwrap().contains_key("EUR"));
    }

    #[tokio::test]
    #[ignore] // Requires API key and network access
    async fn test_get_historical_series() {
        let client = FixerClient::from_env().unwrap();
        let series = client.get_historical_series("USD", "EUR", 7).await;
        assert!(!series.is_empty());
        assert!(series.len() <= 7);
    }
}
