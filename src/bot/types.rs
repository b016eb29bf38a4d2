//! Telegram Bot API wire types
//!
//! Only the fields the transport reads or writes are modeled; unknown
//! fields are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Envelope of every Bot API response
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramResponse<T> {
    /// Whether the call succeeded
    pub ok: bool,
    /// Payload on success
    pub result: Option<T>,
    /// Error text on failure
    #[serde(default)]
    pub description: Option<String>,
    /// HTTP-like error code on failure
    #[serde(default)]
    pub error_code: Option<u16>,
}

/// One incoming update from `getUpdates`
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// Monotonic update identifier
    pub update_id: i64,
    /// New incoming message, if this update carries one
    #[serde(default)]
    pub message: Option<Message>,
}

/// A chat message
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Message identifier within the chat
    pub message_id: i64,
    /// Chat the message belongs to
    pub chat: Chat,
    /// Sender, absent for channel posts
    #[serde(default)]
    pub from: Option<User>,
    /// Text body, absent for stickers, photos and the like
    #[serde(default)]
    pub text: Option<String>,
}

/// A chat
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    /// Chat identifier
    pub id: i64,
    /// `private`, `group`, `supergroup` or `channel`
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A user or bot
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// User identifier
    pub id: i64,
    /// Whether the sender is a bot
    #[serde(default)]
    pub is_bot: bool,
    /// Optional `@username`
    #[serde(default)]
    pub username: Option<String>,
}

/// Text formatting mode for outgoing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    /// Legacy Markdown, enough for fenced code blocks
    Markdown,
}

/// `sendMessage` request body
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SendMessage<'a> {
    /// Destination chat
    pub chat_id: i64,
    /// Message text
    pub text: &'a str,
    /// Formatting mode, plain text when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
}

/// `getUpdates` request body
#[derive(Debug, Clone, Serialize)]
pub struct GetUpdates {
    /// First update to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Long-poll timeout in seconds
    pub timeout: u64,
    /// Update kinds to receive
    pub allowed_updates: Vec<String>,
}

/// `deleteWebhook` request body
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeleteWebhook {
    /// Discard updates queued while offline
    pub drop_pending_updates: bool,
}
