//! Transport abstraction for the relay.
//!
//! [`Transport`] is the set of messaging-platform capabilities the relay depends on. It is
//! transport-agnostic; relay-telegram implements it via teloxide and tests substitute a mock.

use crate::error::Result;
use crate::types::{Message, MessageId};
use async_trait::async_trait;

/// Messaging capabilities consumed by the relay engine and the reveal handler.
///
/// Every call is a single attempt: implementations must not retry, and a timeout is reported as
/// [`crate::RelayError::ExternalCall`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a text message to the given chat and returns its id.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<MessageId>;

    /// Sends a text message into the chat the given message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;

    /// Copies `source` (any content kind) into `to_chat` and returns the id of the new message.
    /// `caption` is passed through unchanged; `None` keeps whatever the source carries.
    async fn copy_message(
        &self,
        to_chat: i64,
        source: &Message,
        caption: Option<&str>,
    ) -> Result<MessageId>;

    /// Attaches the "show author" button to `message_id` in `chat_id`; pressing it delivers `payload`.
    async fn attach_reveal_button(&self, chat_id: i64, message_id: MessageId, payload: &str)
        -> Result<()>;

    /// Removes the inline keyboard from `message_id`. Removing an absent keyboard is not an error.
    async fn clear_reveal_button(&self, chat_id: i64, message_id: MessageId) -> Result<()>;

    /// Acknowledges a callback query so the client stops showing a spinner.
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;
}
