//! Command parsing for the currency bot
//!
//! Commands arrive as Telegram message text (`/rate USD EUR`). Currency
//! codes are uppercased during parsing; argument-shape problems come back
//! as [`BotError::CommandError`] carrying the exact text to send to the
//! chat, so they never reach the rate provider.

use crate::error::{BotError, Result};

/// Usage hint for /rate
pub const USAGE_RATE: &str = "Usage: /rate <base> <target>\nExample: /rate USD EUR";

/// Usage hint for /history
pub const USAGE_HISTORY: &str =
    "Usage: /history <base> <target> <days>\nExample: /history USD EUR 30";

/// Hint for unknown commands and plain text
pub const UNKNOWN_COMMAND: &str = "Unknown command. Send /help to see what I can do.";

/// Parsed command from a chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Greeting with a pointer to /help
    Start,
    /// List of available commands
    Help,
    /// Current rate for a currency pair
    Rate { base: String, target: String },
    /// Chart of the last `days` days for a currency pair
    History { base: String, target: String, days: u32 },
    /// List of supported currencies
    Currencies,
}

impl Command {
    /// Parse a command from message text
    ///
    /// Argument counts are exact; surplus tokens are rejected with the same
    /// usage string as missing ones.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if !input.starts_with('/') {
            return Err(BotError::CommandError(UNKNOWN_COMMAND.to_string()));
        }

        let parts: Vec<&str> = input[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Err(BotError::CommandError(UNKNOWN_COMMAND.to_string()));
        }

        // In group chats commands arrive as /rate@botname
        let cmd = parts[0]
            .split('@')
            .next()
            .unwrap_or(parts[0])
            .to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "start" => Ok(Command::Start),
            "help" => Ok(Command::Help),
            "rate" => match args {
                [base, target] => Ok(Command::Rate {
                    base: base.to_uppercase(),
                    target: target.to_uppercase(),
                }),
                _ => Err(BotError::CommandError(USAGE_RATE.to_string())),
            },
            "history" => match args {
                [base, target, days] => {
                    let days = days
                        .parse::<u32>()
                        .ok()
                        .filter(|days| *days > 0)
                        .ok_or_else(|| BotError::CommandError(USAGE_HISTORY.to_string()))?;
                    Ok(Command::History {
                        base: base.to_uppercase(),
                        target: target.to_uppercase(),
                        days,
                    })
                }
                _ => Err(BotError::CommandError(USAGE_HISTORY.to_string())),
            },
            "currency" | "currencies" => Ok(Command::Currencies),
            _ => Err(BotError::CommandError(UNKNOWN_COMMAND.to_string())),
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r"Currency Exchange Bot

Commands:
  /rate <base> <target>            Current exchange rate, e.g. /rate USD EUR
  /history <base> <target> <days>  Rate chart for the last N days, e.g. /history USD EUR 30
  /currency                        List supported currency codes
  /help                            Show this message"
    }
}
