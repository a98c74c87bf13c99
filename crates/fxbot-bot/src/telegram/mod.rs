//! Telegram transport: typed API subset and the long-poll dispatcher

pub mod api;
pub mod dispatcher;
pub mod types;

pub use api::TelegramApi;
pub use dispatcher::Dispatcher;
