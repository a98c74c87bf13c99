//! Telegram Bot API client
//!
//! Thin typed wrapper over the handful of methods the bot needs: getMe,
//! getUpdates, sendMessage, editMessageText, sendPhoto and
//! answerCallbackQuery. Every response arrives in the
//! `{ ok, result, description }` envelope; `ok: false` surfaces as a
//! [`BotError::TelegramError`] carrying the description.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

use crate::error::{BotError, Result};
use crate::telegram::types::{ApiResponse, InlineKeyboardMarkup, Message, Update, User};

/// Default Bot API server
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Timeout for ordinary (non-polling) requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Headroom on top of the long-poll timeout
const POLL_TIMEOUT_MARGIN: Duration = Duration::from_secs(10);

/// Telegram Bot API client
#[derive(Debug, Clone)]
pub struct TelegramApi {
    client: Client,
    base_url: String,
    token: String,
}

impl TelegramApi {
    /// Create a new client for the given bot token
    pub fn new(token: impl Into<String>) -> Result<Self> {
        // Timeouts are set per request; a client-wide one would cut long polls short
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: TELEGRAM_API_BASE.to_string(),
            token: token.into(),
        })
    }

    /// Override the API server, e.g. to point tests at a local stub
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.base_url.trim_end_matches('/'),
            self.token,
            method
        )
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await?;
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| BotError::TelegramError(format!("Unreadable {method} response: {e}")))?;

        if !envelope.ok {
            let description = envelope
                .description
                .unwrap_or_else(|| "no description".to_string());
            return Err(BotError::TelegramError(format!("{method} failed: {description}")));
        }

        envelope
            .result
            .ok_or_else(|| BotError::TelegramError(format!("{method} returned no result")))
    }

    /// Identify the bot account behind the token
    pub async fn get_me(&self) -> Result<User> {
        let request = self
            .client
            .get(self.method_url("getMe"))
            .timeout(REQUEST_TIMEOUT);
        self.execute("getMe", request).await
    }

    /// Long-poll for updates past `offset`
    pub async fn get_updates(&self, offset: Option<i64>, timeout_secs: u32) -> Result<Vec<Update>> {
        let mut payload = serde_json::json!({
            "timeout": timeout_secs,
            "allowed_updates": ["message", "callback_query"],
        });
        if let Some(offset) = offset {
            payload["offset"] = offset.into();
        }

        let request = self
            .client
            .post(self.method_url("getUpdates"))
            .json(&payload)
            .timeout(Duration::from_secs(u64::from(timeout_secs)) + POLL_TIMEOUT_MARGIN);
        self.execute("getUpdates", request).await
    }

    /// Send a text message, optionally with an inline keyboard
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboardMarkup>,
    ) -> Result<Message> {
        let mut payload = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });
        if let Some(keyboard) = keyboard {
            payload["reply_markup"] = serde_json::to_value(keyboard)?;
        }

        let request = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&payload)
            .timeout(REQUEST_TIMEOUT);
        self.execute("sendMessage", request).await
    }

    /// Replace the text (and keyboard) of a previously sent message
    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboardMarkup>,
    ) -> Result<()> {
        let mut payload = serde_json::json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "text": text,
        });
        if let Some(keyboard) = keyboard {
            payload["reply_markup"] = serde_json::to_value(keyboard)?;
        }

        let request = self
            .client
            .post(self.method_url("editMessageText"))
            .json(&payload)
            .timeout(REQUEST_TIMEOUT);
        // The result is the edited message or plain `true`; neither is needed
        let _: Value = self.execute("editMessageText", request).await?;
        Ok(())
    }

    /// Upload a photo from disk with a caption
    pub async fn send_photo(&self, chat_id: i64, photo: &Path, caption: &str) -> Result<()> {
        let bytes = tokio::fs::read(photo).await?;
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name("chart.png")
            .mime_str("image/png")?;
        let form = reqwest::multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .text("caption", caption.to_string())
            .part("photo", part);

        let request = self
            .client
            .post(self.method_url("sendPhoto"))
            .multipart(form)
            .timeout(REQUEST_TIMEOUT);
        let _: Value = self.execute("sendPhoto", request).await?;
        Ok(())
    }

    /// Acknowledge a callback query so the client stops its spinner
    pub async fn answer_callback_query(&self, callback_query_id: &str) -> Result<()> {
        let payload = serde_json::json!({ "callback_query_id": callback_query_id });
        let request = self
            .client
            .post(self.method_url("answerCallbackQuery"))
            .json(&payload)
            .timeout(REQUEST_TIMEOUT);
        let _: Value = self.execute("answerCallbackQuery", request).await?;
        Ok(())
    }
}
