//! fxbot - Telegram currency exchange-rate bot
//!
//! # Usage
//!
//! ```bash
//! # Set up environment variables
//! export TELEGRAM_BOT_TOKEN="123456:ABC-DEF..."
//! export FIXER_API_KEY="your-fixer-key"
//!
//! # Run the bot
//! cargo run --bin fxbot -p fxbot-bot
//! ```

use fxbot_bot::{BotConfig, CommandHandler, Dispatcher, TelegramApi};
use fxbot_rates::FixerClient;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "warn,fxbot_bot=info,fxbot_rates=info".to_string()),
        )
        .init();

    let config = BotConfig::from_env()?;
    let provider = FixerClient::new(config.fixer.clone())?;
    let api = TelegramApi::new(config.telegram_token.clone())?;
    let dispatcher = Dispatcher::new(api, CommandHandler::new(provider), config.poll_timeout_secs);

    tracing::info!("Starting fxbot");
    dispatcher.run().await?;
    Ok(())
}
