//! Configuration management
//!
//! Settings for the chat transport and the HTTP endpoint. Loaded from
//! `~/.codesift/config.toml` (or `--config`), then overridden by environment
//! variables. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Bot token variable
pub const ENV_BOT_TOKEN: &str = "BOT_TOKEN";
/// HTTP bind address variable
pub const ENV_BIND: &str = "CODESIFT_BIND";
/// HTTP port variable
pub const ENV_PORT: &str = "CODESIFT_PORT";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },

    /// An environment override could not be parsed
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv {
        /// Variable name
        name: String,
        /// Offending value
        value: String,
    },

    /// The bot was started without a token
    #[error("BOT_TOKEN is missing (set it in the environment or as [bot].token in the config file)")]
    MissingToken,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Chat transport settings
    #[serde(default)]
    pub bot: BotConfig,
    /// HTTP endpoint settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Chat transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Bot API token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Skip messages queued while the bot was offline
    #[serde(default = "default_drop_pending")]
    pub drop_pending_updates: bool,
    /// Long-poll timeout in seconds
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u64,
    /// Bot API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

const fn default_drop_pending() -> bool {
    true
}

const fn default_poll_timeout() -> u64 {
    30
}

fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: None,
            drop_pending_updates: default_drop_pending(),
            poll_timeout_secs: default_poll_timeout(),
            api_base: default_api_base(),
        }
    }
}

/// HTTP endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `bind:port` socket address string
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Config {
    /// Load from `path` (or the global config) and apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(paths::global_config, Path::to_path_buf);
        let mut config = Self::load_file(&path)?;
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Load a config file; a missing file yields defaults
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override settings from variables returned by `lookup`
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(token) = get(ENV_BOT_TOKEN) {
            self.bot.token = Some(token);
        }
        if let Some(bind) = get(ENV_BIND) {
            self.server.bind = bind;
        }
        if let Some(port) = get(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_PORT.to_string(),
                value: port.clone(),
            })?;
        }
        Ok(())
    }

    /// The bot token, required to run the chat transport
    pub fn bot_token(&self) -> Result<&str, ConfigError> {
        self.bot
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)
    }

    /// Copy with secrets masked, for display
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.bot.token.is_some() {
            copy.bot.token = Some("***".to_string());
        }
        copy
    }

    /// Serialize as pretty TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
