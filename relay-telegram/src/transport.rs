//! Wraps teloxide::Bot and implements [`relay_core::Transport`]. Production code talks to Telegram;
//! tests substitute another Transport impl.

use async_trait::async_trait;
use relay_core::{Message, MessageId, RelayError, Result, Transport};
use teloxide::{
    payloads::{CopyMessageSetters, EditMessageReplyMarkupSetters},
    prelude::*,
    types::{
        CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup,
        MessageId as TgMessageId,
    },
    ApiError, RequestError,
};
use tracing::debug;

/// Label of the reveal button.
const REVEAL_BUTTON_TEXT: &str = "👤 Show author";

fn external(e: RequestError) -> RelayError {
    RelayError::ExternalCall(e.to_string())
}

/// Single-button keyboard that sends `payload` back as callback data.
pub fn reveal_keyboard(payload: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        REVEAL_BUTTON_TEXT,
        payload.to_string(),
    )]])
}

/// Thin wrapper around teloxide::Bot that implements relay-core's Transport trait.
pub struct TelegramTransport {
    bot: teloxide::Bot,
}

impl TelegramTransport {
    /// Creates a transport from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<MessageId> {
        let sent = self
            .bot
            .send_message(ChatId(chat_id), text.to_string())
            .await
            .map_err(external)?;
        Ok(sent.id.0)
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(message.chat.id, text).await.map(|_| ())
    }

    async fn copy_message(
        &self,
        to_chat: i64,
        source: &Message,
        caption: Option<&str>,
    ) -> Result<MessageId> {
        let mut request = self.bot.copy_message(
            ChatId(to_chat),
            ChatId(source.chat.id),
            TgMessageId(source.id),
        );
        // Re-sending an unchanged caption would strip its formatting entities.
        if let Some(caption) = caption.filter(|c| source.caption.as_deref() != Some(*c)) {
            request = request.caption(caption.to_string());
        }
        let copied = request.await.map_err(external)?;
        Ok(copied.0)
    }

    async fn attach_reveal_button(
        &self,
        chat_id: i64,
        message_id: MessageId,
        payload: &str,
    ) -> Result<()> {
        self.bot
            .edit_message_reply_markup(ChatId(chat_id), TgMessageId(message_id))
            .reply_markup(reveal_keyboard(payload))
            .await
            .map_err(external)?;
        Ok(())
    }

    async fn clear_reveal_button(&self, chat_id: i64, message_id: MessageId) -> Result<()> {
        match self
            .bot
            .edit_message_reply_markup(ChatId(chat_id), TgMessageId(message_id))
            .await
        {
            Ok(_) => Ok(()),
            Err(RequestError::Api(ApiError::MessageNotModified)) => {
                debug!(chat_id, message_id, "Reveal button already removed");
                Ok(())
            }
            Err(e) => Err(external(e)),
        }
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()))
            .await
            .map_err(external)?;
        Ok(())
    }
}
