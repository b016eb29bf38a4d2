//! Telegram long-polling adapter
//!
//! Polls `getUpdates`, hands each message to the bot dispatcher and sends
//! the reply back. One failed update never stops the loop.

use std::time::Duration;

use anyhow::Context;
use log::{info, warn};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use codesift::bot::{
    DeleteWebhook, GetUpdates, Message, SendMessage, TelegramResponse, Update, User,
    handle_update,
};
use codesift::config::BotConfig;

/// Pause before polling again after a failed `getUpdates`
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Extra time on top of the long-poll timeout before the HTTP call gives up
const REQUEST_GRACE: Duration = Duration::from_secs(10);

/// Errors from Bot API calls
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Network or decoding failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered `ok: false`
    #[error("api error {}: {description}", .code.map_or_else(|| "?".to_string(), |c| c.to_string()))]
    Api {
        /// Error code reported by the API
        code: Option<u16>,
        /// Error description reported by the API
        description: String,
    },
}

/// Minimal Bot API client
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base: String,
}

impl TelegramClient {
    /// Create a client for `token`
    pub fn new(config: &BotConfig, token: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.poll_timeout_secs) + REQUEST_GRACE)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base: method_base(&config.api_base, token),
        })
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, TelegramError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.post(format!("{}/{method}", self.base)).json(body).send().await?;
        let envelope: TelegramResponse<T> = response.json().await?;

        match envelope.result {
            Some(result) if envelope.ok => Ok(result),
            _ => Err(TelegramError::Api {
                code: envelope.error_code,
                description: envelope.description.unwrap_or_else(|| format!("{method} failed")),
            }),
        }
    }

    /// The bot's own account
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        self.call("getMe", &serde_json::Map::new()).await
    }

    /// Switch to polling mode, optionally discarding queued updates
    pub async fn delete_webhook(&self, drop_pending_updates: bool) -> Result<bool, TelegramError> {
        self.call(
            "deleteWebhook",
            &DeleteWebhook {
                drop_pending_updates,
            },
        )
        .await
    }

    /// Long-poll for new updates
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: u64,
    ) -> Result<Vec<Update>, TelegramError> {
        let body = GetUpdates {
            offset,
            timeout,
            allowed_updates: vec!["message".to_string()],
        };
        self.call("getUpdates", &body).await
    }

    /// Send one message
    pub async fn send_message(&self, message: &SendMessage<'_>) -> Result<Message, TelegramError> {
        self.call("sendMessage", message).await
    }
}

/// `https://api.telegram.org/bot<token>` without a trailing slash
fn method_base(api_base: &str, token: &str) -> String {
    format!("{}/bot{token}", api_base.trim_end_matches('/'))
}

/// Run the bot until SIGINT or SIGTERM
pub async fn run(config: &BotConfig, token: &str) -> anyhow::Result<()> {
    let client = TelegramClient::new(config, token)?;
    let me = client.get_me().await.context("Failed to look up the bot account")?;
    client
        .delete_webhook(config.drop_pending_updates)
        .await
        .context("Failed to switch the bot to polling mode")?;

    let username = me.username;
    info!("🤖 Bot is running as @{}...", username.as_deref().unwrap_or("?"));

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);
    let mut offset = None;

    loop {
        tokio::select! {
            signal = &mut shutdown => {
                info!("Received {signal}, stopping bot");
                break;
            }
            result = poll_once(&client, offset, config.poll_timeout_secs, username.as_deref()) => match result {
                Ok(next) => offset = next,
                Err(e) => {
                    warn!("Polling failed: {e}");
                    tokio::time::sleep(RETRY_DELAY).await;
                },
            },
        }
    }

    Ok(())
}

/// Fetch one batch of updates and answer each of them
///
/// Returns the offset for the next poll: one past the last update seen, or
/// `offset` unchanged when the batch was empty.
async fn poll_once(
    client: &TelegramClient,
    offset: Option<i64>,
    timeout: u64,
    bot_username: Option<&str>,
) -> Result<Option<i64>, TelegramError> {
    let updates = client.get_updates(offset, timeout).await?;

    let mut next = offset;
    for update in updates {
        next = Some(update.update_id + 1);
        dispatch(client, &update, bot_username).await;
    }
    Ok(next)
}

/// Whether a rejected Markdown message is worth resending as plain text
fn is_markup_error(code: Option<u16>, description: &str) -> bool {
    code == Some(400) && description.contains("can't parse entities")
}

/// Reply to one update; failures are logged and swallowed
async fn dispatch(client: &TelegramClient, update: &Update, bot_username: Option<&str>) {
    let Some((chat_id, reply)) = handle_update(update, bot_username) else {
        return;
    };

    let message = SendMessage {
        chat_id,
        text: &reply.text,
        parse_mode: reply.parse_mode,
    };

    match client.send_message(&message).await {
        Ok(_) => {},
        // Markdown the API cannot parse, e.g. stray `_` in an invalid line
        Err(TelegramError::Api { code, description })
            if message.parse_mode.is_some() && is_markup_error(code, &description) =>
        {
            warn!("Chat {chat_id} rejected Markdown ({description}), resending as plain text");
            let plain = SendMessage {
                parse_mode: None,
                ..message
            };
            if let Err(e) = client.send_message(&plain).await {
                warn!("Failed to reply to chat {chat_id}: {e}");
            }
        },
        Err(e) => warn!("Failed to reply to chat {chat_id}: {e}"),
    }
}

/// Resolve with the signal name on SIGINT or SIGTERM
async fn shutdown_signal() -> &'static str {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for SIGINT: {e}");
            std::future::pending::<()>().await;
        }
        "SIGINT"
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                "SIGTERM"
            },
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<&'static str>().await
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    }
}
