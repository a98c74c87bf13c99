//! Command handling
//!
//! Turns parsed commands into replies using a [`RateProvider`]. Provider
//! absence and transport failure both collapse into the same
//! "Failed to fetch data." text for the chat; the distinction only matters
//! for logging. Chart rendering failures answer with their own text, since
//! there the fetch itself succeeded.

use chrono::Utc;
use tempfile::NamedTempFile;

use fxbot_rates::{RateProvider, classify_trend, percentage_change};

use crate::chart;
use crate::commands::Command;
use crate::error::Result;

/// Text sent when the provider cannot supply the requested data
pub const FETCH_FAILED: &str = "Failed to fetch data.";

/// Text sent when fetched data cannot be turned into a chart
pub const CHART_FAILED: &str = "Failed to render chart.";

/// Greeting for /start
pub const WELCOME: &str = "Hi! I track currency exchange rates.\nSend /help to see what I can do.";

/// Callback data prefix for the refresh button
const REFRESH_PREFIX: &str = "rate";

/// Build the callback data carried by a refresh button
pub fn refresh_callback_data(base: &str, target: &str) -> String {
    format!("{REFRESH_PREFIX}:{base}:{target}")
}

/// Extract the currency pair from refresh callback data
pub fn parse_refresh_callback(data: &str) -> Option<(String, String)> {
    let mut parts = data.split(':');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(REFRESH_PREFIX), Some(base), Some(target), None)
            if !base.is_empty() && !target.is_empty() =>
        {
            Some((base.to_string(), target.to_string()))
        }
        _ => None,
    }
}

/// Outcome of handling a command, ready for the transport layer
#[derive(Debug)]
pub enum Reply {
    /// Plain text
    Text(String),
    /// Rate quote; carries the pair so the transport can attach a refresh button
    RateQuote {
        text: String,
        base: String,
        target: String,
    },
    /// Chart photo with a caption; the temp file drops after upload
    Chart {
        image: NamedTempFile,
        caption: String,
    },
}

/// Turns commands into replies using the configured rate provider
pub struct CommandHandler<P> {
    provider: P,
}

impl<P: RateProvider> CommandHandler<P> {
    /// Create a handler around a rate provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Handle a parsed command
    pub async fn handle(&self, command: Command) -> Reply {
        match command {
            Command::Start => Reply::Text(WELCOME.to_string()),
            Command::Help => Reply::Text(Command::help_text().to_string()),
            Command::Rate { base, target } => self.handle_rate(base, target).await,
            Command::History { base, target, days } => {
                self.handle_history(base, target, days).await
            }
            Command::Currencies => self.handle_currencies().await,
        }
    }

    /// Refreshed text for an existing quote message
    pub async fn refresh_rate(&self, base: &str, target: &str) -> String {
        match self.provider.latest_rate(base, target).await {
            Ok(Some(rate)) => format!(
                "{}\nUpdated at {}",
                rate_line(base, target, rate),
                Utc::now().format("%H:%M:%S UTC")
            ),
            Ok(None) => FETCH_FAILED.to_string(),
            Err(e) => {
                tracing::error!("Rate refresh for {}/{} failed: {}", base, target, e);
                FETCH_FAILED.to_string()
            }
        }
    }

    async fn handle_rate(&self, base: String, target: String) -> Reply {
        match self.provider.latest_rate(&base, &target).await {
            Ok(Some(rate)) => Reply::RateQuote {
                text: rate_line(&base, &target, rate),
                base,
                target,
            },
            Ok(None) => Reply::Text(FETCH_FAILED.to_string()),
            Err(e) => {
                tracing::error!("Rate lookup for {}/{} failed: {}", base, target, e);
                Reply::Text(FETCH_FAILED.to_string())
            }
        }
    }

    async fn handle_history(&self, base: String, target: String, days: u32) -> Reply {
        let series = self.provider.historical_series(&base, &target, days).await;
        if series.is_empty() {
            return Reply::Text(FETCH_FAILED.to_string());
        }

        let caption = history_caption(&base, &target, days, &series.rates());
        chart_reply(
            chart::render_series_png(&series, &base, &target),
            caption,
            &base,
            &target,
        )
    }

    async fn handle_currencies(&self) -> Reply {
        match self.provider.supported_currencies().await {
            Ok(Some(currencies)) => {
                let mut lines = Vec::with_capacity(currencies.len() + 1);
                lines.push("Available currencies:".to_string());
                for (code, name) in &currencies {
                    lines.push(format!("{code}: {name}"));
                }
                Reply::Text(lines.join("\n"))
            }
            Ok(None) => Reply::Text(FETCH_FAILED.to_string()),
            Err(e) => {
                tracing::error!("Currency list fetch failed: {}", e);
                Reply::Text(FETCH_FAILED.to_string())
            }
        }
    }
}

fn rate_line(base: &str, target: &str, rate: f64) -> String {
    format!("1 {base} = {rate:.4} {target}")
}

/// Wrap a finished chart render, or report the failure
fn chart_reply(render: Result<NamedTempFile>, caption: String, base: &str, target: &str) -> Reply {
    match render {
        Ok(image) => Reply::Chart { image, caption },
        Err(e) => {
            tracing::error!("Chart rendering for {}/{} failed: {}", base, target, e);
            Reply::Text(CHART_FAILED.to_string())
        }
    }
}

/// Caption for the history chart: pair, window, trend and change
fn history_caption(base: &str, target: &str, days: u32, rates: &[f64]) -> String {
    let trend = classify_trend(rates);
    let header = format!("{base}/{target} over the last {days} days");
    match percentage_change(rates) {
        Ok(Some(change)) => format!("{header}\nTrend: {trend} ({change:+.2}%)"),
        Ok(None) => format!("{header}\nTrend: {trend}"),
        Err(e) => {
            tracing::warn!("Percentage change for {}/{} unavailable: {}", base, target, e);
            format!("{header}\nTrend: {trend}")
        }
    }
}
