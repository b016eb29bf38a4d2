//! Transport adapters
//!
//! These adapters translate between network protocols and the
//! transport-agnostic `api` and `bot` layers.
//!
//! Currently supported:
//! - `tiny_http` - HTTP endpoint
//! - `telegram` - Telegram Bot API long polling

#[cfg(feature = "telegram")]
pub mod telegram;
#[cfg(feature = "http")]
pub mod tiny_http;
