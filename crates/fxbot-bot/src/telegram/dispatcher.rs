//! Long-poll dispatch loop
//!
//! One update is handled to completion before the offset advances, so a
//! slow provider stalls only the command that hit it. Failed polls and
//! per-update errors are logged and survived; only startup failure ends
//! the loop.

use std::time::Duration;

use fxbot_rates::RateProvider;

use crate::commands::Command;
use crate::error::{BotError, Result};
use crate::handler::{self, CommandHandler, Reply};
use crate::telegram::api::TelegramApi;
use crate::telegram::types::{
    CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup, Message, Update,
};

/// Pause after a failed poll before trying again
const POLL_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Connects Telegram updates to the command handler
pub struct Dispatcher<P> {
    api: TelegramApi,
    handler: CommandHandler<P>,
    poll_timeout_secs: u32,
}

impl<P: RateProvider> Dispatcher<P> {
    /// Create a dispatcher
    pub fn new(api: TelegramApi, handler: CommandHandler<P>, poll_timeout_secs: u32) -> Self {
        Self {
            api,
            handler,
            poll_timeout_secs,
        }
    }

    /// Poll for updates until the process is stopped
    pub async fn run(&self) -> Result<()> {
        let me = self.api.get_me().await?;
        tracing::info!(
            "Connected as @{}",
            me.username.as_deref().unwrap_or("unknown")
        );

        let mut offset = None;
        loop {
            let updates = match self.api.get_updates(offset, self.poll_timeout_secs).await {
                Ok(updates) => updates,
                Err(e) => {
                    tracing::error!("Polling failed: {}", e);
                    tokio::time::sleep(POLL_RETRY_DELAY).await;
                    continue;
                }
            };

            for update in updates {
                offset = Some(update.update_id + 1);
                if let Err(e) = self.process_update(update).await {
                    tracing::error!("Update processing failed: {}", e);
                }
            }
        }
    }

    async fn process_update(&self, update: Update) -> Result<()> {
        if let Some(message) = update.message {
            self.process_message(message).await
        } else if let Some(callback) = update.callback_query {
            self.process_callback(callback).await
        } else {
            Ok(())
        }
    }

    async fn process_message(&self, message: Message) -> Result<()> {
        let Some(text) = message.text.as_deref() else {
            return Ok(());
        };
        let chat_id = message.chat.id;

        let command = match Command::parse(text) {
            Ok(command) => command,
            Err(BotError::CommandError(hint)) => {
                // Usage and unknown-command hints go straight back to the chat
                self.api.send_message(chat_id, &hint, None).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match self.handler.handle(command).await {
            Reply::Text(text) => {
                self.api.send_message(chat_id, &text, None).await?;
            }
            Reply::RateQuote { text, base, target } => {
                let keyboard = refresh_keyboard(&base, &target);
                self.api.send_message(chat_id, &text, Some(&keyboard)).await?;
            }
            Reply::Chart { image, caption } => {
                self.api.send_photo(chat_id, image.path(), &caption).await?;
            }
        }
        Ok(())
    }

    async fn process_callback(&self, callback: CallbackQuery) -> Result<()> {
        // Acknowledge first so the button stops spinning even if the edit fails
        self.api.answer_callback_query(&callback.id).await?;

        let Some((base, target)) = callback
            .data
            .as_deref()
            .and_then(handler::parse_refresh_callback)
        else {
            return Ok(());
        };
        let Some(message) = callback.message else {
            return Ok(());
        };

        let text = self.handler.refresh_rate(&base, &target).await;
        let keyboard = refresh_keyboard(&base, &target);
        self.api
            .edit_message_text(message.chat.id, message.message_id, &text, Some(&keyboard))
            .await?;
        Ok(())
    }
}

/// Inline keyboard with a single refresh button for the pair
fn refresh_keyboard(base: &str, target: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::single(InlineKeyboardButton::callback(
        "Refresh",
        handler::refresh_callback_data(base, target),
    ))
}
