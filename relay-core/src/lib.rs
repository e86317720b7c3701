//! # relay-core
//!
//! Core types and traits for the anonymous relay bot: [`Transport`], [`Handler`], message, callback
//! and user types, the [`RelayError`] taxonomy and tracing initialization. Transport-agnostic; used by
//! relay, handler-chain and relay-telegram.

pub mod error;
pub mod logger;
pub mod transport;
pub mod types;

pub use error::{RelayError, Result};
pub use logger::init_tracing;
pub use transport::Transport;
pub use types::{
    CallbackQuery, Chat, FileRef, Handler, HandlerResponse, InboundEvent, MediaContent, Message,
    MessageId, PhotoVariant, ToCoreCallback, ToCoreMessage, ToCoreUser, User,
};
