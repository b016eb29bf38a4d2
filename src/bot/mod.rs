//! Chat bot layer
//!
//! Transport-independent pieces of the Telegram bot: wire types and the
//! dispatcher turning each incoming message into a reply. The long-polling
//! client lives in the binary.

mod handler;
mod types;

pub use handler::{BotCommand, Reply, handle_text, handle_update};
pub use types::{
    Chat, DeleteWebhook, GetUpdates, Message, ParseMode, SendMessage, TelegramResponse, Update,
    User,
};

/// Reply to `/start`
pub const GREETING: &str = "Send me a list of codes.\n\
                            \n\
                            I will:\n\
                            • show invalid codes with original numbers\n\
                            • show duplicate codes with original numbers\n\
                            • give final unique valid codes with copy button";

/// Reply to `/ping`
pub const PING_REPLY: &str = "✅ Bot is awake and responding";
