//! Command implementations

#[cfg(feature = "telegram")]
mod bot;
mod check;
mod config_cmd;
#[cfg(feature = "http")]
mod serve;

#[cfg(feature = "telegram")]
pub use bot::bot;
pub use check::check;
pub use config_cmd::show_config;
#[cfg(feature = "http")]
pub use serve::serve;
