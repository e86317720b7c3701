//! # relay-telegram
//!
//! Telegram layer for the relay: adapters (teloxide → core types), [`relay_core::Transport`]
//! implementation, environment config, and the dispatcher runner.
//! Handles only Telegram connectivity and handler-chain execution; no correlation logic.

mod adapters;
mod config;
mod runner;
mod transport;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use config::{RelayConfig, DEFAULT_DATABASE_URL, DEFAULT_LOG_FILE};
pub use runner::run_dispatcher;
pub use transport::{reveal_keyboard, TelegramTransport};
