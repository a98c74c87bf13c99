//! Typed subset of the Telegram Bot API
//!
//! Only the fields the bot actually reads are modeled; everything else in
//! the payload is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Envelope wrapping every Bot API response
///
/// `result` stays a plain `Option`; a field-level `#[serde(default)]` here
/// would put a `T: Default` bound on the derived impl, and `User`/`Message`
/// have no `Default`. Missing `Option` fields deserialize to `None` anyway.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

/// A bot or user account, as returned by getMe
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

/// A chat the bot participates in
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// An incoming or previously sent message
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

/// A press of an inline keyboard button
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub data: Option<String>,
    /// Message the pressed button was attached to
    pub message: Option<Message>,
}

/// One long-poll update; carries either a message or a callback query
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub callback_query: Option<CallbackQuery>,
}

/// Inline keyboard attached to an outgoing message
#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// A keyboard holding a single button
    pub fn single(button: InlineKeyboardButton) -> Self {
        Self {
            inline_keyboard: vec![vec![button]],
        }
    }
}

/// One button of an inline keyboard
#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

impl InlineKeyboardButton {
    /// Create a callback button
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: data.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_with_message() {
        let update: Update = serde_json::from_str(
            r#"{
                "update_id": 42,
                "message": {
                    "message_id": 7,
                    "chat": {"id": 100, "type": "private"},
                    "from": {"id": 5, "is_bot": false, "first_name": "A"},
                    "text": "/rate USD EUR"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(update.update_id, 42);
        let message = update.message.unwrap();
        assert_eq!(message.chat.id, 100);
        assert_eq!(message.text.as_deref(), Some("/rate USD EUR"));
        assert!(update.callback_query.is_none());
    }

    #[test]
    fn test_update_with_callback_query() {
        let update: Update = serde_json::from_str(
            r#"{
                "update_id": 43,
                "callback_query": {
                    "id": "777",
                    "from": {"id": 5, "is_bot": false, "first_name": "A"},
                    "data": "rate:USD:EUR",
                    "message": {"message_id": 8, "chat": {"id": 100}}
                }
            }"#,
        )
        .unwrap();

        let callback = update.callback_query.unwrap();
        assert_eq!(callback.data.as_deref(), Some("rate:USD:EUR"));
        assert_eq!(callback.message.unwrap().message_id, 8);
    }

    #[test]
    fn test_ok_envelope_carries_result() {
        let response: ApiResponse<User> = serde_json::from_str(
            r#"{"ok": true, "result": {"id": 42, "is_bot": true, "first_name": "fx", "username": "fxbot"}}"#,
        )
        .unwrap();

        assert!(response.ok);
        let user = response.result.unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.username.as_deref(), Some("fxbot"));
    }

    #[test]
    fn test_error_envelope() {
        let response: ApiResponse<User> = serde_json::from_str(
            r#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#,
        )
        .unwrap();

        assert!(!response.ok);
        assert!(response.result.is_none());
        assert_eq!(response.description.as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn test_keyboard_serialization() {
        let keyboard =
            InlineKeyboardMarkup::single(InlineKeyboardButton::callback("Refresh", "rate:USD:EUR"));
        let json = serde_json::to_value(&keyboard).unwrap();
        assert_eq!(json["inline_keyboard"][0][0]["text"], "Refresh");
        assert_eq!(json["inline_keyboard"][0][0]["callback_data"], "rate:USD:EUR");
    }
}
