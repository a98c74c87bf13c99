//! Telegram surface for the currency exchange-rate bot
//!
//! This crate wires the rate provider from `fxbot-rates` to a Telegram
//! chat. It includes:
//!
//! - Command parsing (`/rate`, `/history`, `/currency`, `/start`, `/help`)
//! - A command handler producing text, refreshable rate quotes, and chart
//!   photos
//! - Dark-themed PNG chart rendering for historical series
//! - A typed Telegram Bot API subset with a long-poll dispatcher
//!
//! # Example
//!
//! ```rust,ignore
//! use fxbot_bot::{BotConfig, CommandHandler, Dispatcher, TelegramApi};
//! use fxbot_rates::FixerClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Reads TELEGRAM_BOT_TOKEN and FIXER_API_KEY from the environment
//!     let config = BotConfig::from_env()?;
//!     let provider = FixerClient::new(config.fixer.clone())?;
//!     let api = TelegramApi::new(config.telegram_token.clone())?;
//!
//!     Dispatcher::new(api, CommandHandler::new(provider), config.poll_timeout_secs)
//!         .run()
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod commands;
pub mod config;
pub mod error;
pub mod handler;
pub mod telegram;

// Re-export main types for convenience
pub use commands::Command;
pub use config::BotConfig;
pub use error::{BotError, Result};
pub use handler::{CommandHandler, Reply};
pub use telegram::{Dispatcher, TelegramApi};
