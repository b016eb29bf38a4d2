//! Telegram bot command

use std::path::Path;

use anyhow::Context;

use codesift::config::Config;

use crate::server;

/// Run the bot until SIGINT or SIGTERM
pub fn bot(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    let token = config.bot_token()?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(server::telegram::run(&config.bot, token))
}
