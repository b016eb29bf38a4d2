//! Message dispatch for the chat transport
//!
//! Maps one incoming text to one reply. Pure: the transport owns the network.

use log::{debug, error};

use crate::pipeline;

use super::types::{ParseMode, Update};
use super::{GREETING, PING_REPLY};

/// What an incoming message asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand<'a> {
    /// `/start` - show the greeting
    Start,
    /// `/ping` - heartbeat
    Ping,
    /// Anything else - a code list to check
    Text(&'a str),
}

impl<'a> BotCommand<'a> {
    /// Parse a message body
    ///
    /// The first token must be `/start` or `/ping`. A command addressed as
    /// `/ping@some_bot` only counts when `some_bot` is `bot_username`
    /// (ignoring ASCII case); with no known username any address is
    /// accepted. Other slash commands are treated as text.
    #[must_use]
    pub fn parse(text: &'a str, bot_username: Option<&str>) -> Self {
        let first = text.split(char::is_whitespace).next().unwrap_or_default();
        let Some(command) = first.strip_prefix('/') else {
            return Self::Text(text);
        };

        let name = match command.split_once('@') {
            None => command,
            Some((name, target)) if addressed_to(target, bot_username) => name,
            Some(_) => return Self::Text(text),
        };

        match name {
            "start" => Self::Start,
            "ping" => Self::Ping,
            _ => Self::Text(text),
        }
    }
}

fn addressed_to(target: &str, bot_username: Option<&str>) -> bool {
    bot_username.is_none_or(|me| target.eq_ignore_ascii_case(me.trim_start_matches('@')))
}

/// One outgoing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Message text
    pub text: String,
    /// Formatting mode, plain text when `None`
    pub parse_mode: Option<ParseMode>,
}

impl Reply {
    /// Plain-text reply
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: None,
        }
    }

    /// Markdown reply
    #[must_use]
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: Some(ParseMode::Markdown),
        }
    }
}

/// Build the reply for one message body
///
/// `bot_username` is the bot's own `@username`, used to tell its commands
/// from those addressed to other bots in a group chat.
#[must_use]
pub fn handle_text(text: &str, bot_username: Option<&str>) -> Reply {
    match BotCommand::parse(text, bot_username) {
        BotCommand::Start => Reply::plain(GREETING),
        BotCommand::Ping => Reply::plain(PING_REPLY),
        BotCommand::Text(body) => match pipeline::try_process(body.as_bytes()) {
            Ok(report) => Reply::markdown(report),
            Err(e) => {
                error!("Bot error: {e}");
                Reply::plain(pipeline::FALLBACK_MESSAGE)
            },
        },
    }
}

/// Build the reply for an update, with the chat to send it to
///
/// Updates without a text message are ignored.
#[must_use]
pub fn handle_update(update: &Update, bot_username: Option<&str>) -> Option<(i64, Reply)> {
    let message = update.message.as_ref()?;
    let Some(text) = message.text.as_deref() else {
        debug!("Ignoring non-text update {}", update.update_id);
        return None;
    };

    debug!("Handling update {} from chat {}", update.update_id, message.chat.id);
    Some((message.chat.id, handle_text(text, bot_username)))
}
