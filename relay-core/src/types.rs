//! Core types: user, chat, message content, callback query, inbound event, handler response, and
//! Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Transport-assigned message id (unique per chat).
pub type MessageId = i32;

/// Opaque reference to transport-side attachment content (a Telegram file id).
pub type FileRef = String;

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
}

impl User {
    /// Name shown to the operator when the sender is revealed.
    pub fn display_name(&self) -> &str {
        &self.first_name
    }
}

/// Chat (private or group) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// One resolution of a photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoVariant {
    pub file: FileRef,
    pub width: u32,
    pub height: u32,
}

/// Attachment capabilities a message may carry. Telegram sets at most one of these per message,
/// but nothing here assumes that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaContent {
    /// All resolutions of the photo, as delivered by the transport.
    pub photo: Vec<PhotoVariant>,
    pub video: Option<FileRef>,
    pub document: Option<FileRef>,
    pub voice: Option<FileRef>,
    pub audio: Option<FileRef>,
    pub sticker: Option<FileRef>,
    pub animation: Option<FileRef>,
}

impl MediaContent {
    /// Returns true if no attachment capability is present.
    pub fn is_empty(&self) -> bool {
        self.photo.is_empty()
            && self.video.is_none()
            && self.document.is_none()
            && self.voice.is_none()
            && self.audio.is_none()
            && self.sticker.is_none()
            && self.animation.is_none()
    }
}

/// A single inbound message with its author, chat, content and reply context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub user: User,
    pub chat: Chat,
    pub text: Option<String>,
    pub caption: Option<String>,
    pub media: MediaContent,
    /// Id of the message this one replies to, if any.
    pub reply_to_message_id: Option<MessageId>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Text if present, else caption, else empty string.
    pub fn text_or_caption(&self) -> &str {
        self.text
            .as_deref()
            .or(self.caption.as_deref())
            .unwrap_or("")
    }
}

/// Inline button press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    pub data: Option<String>,
    /// Chat and id of the message carrying the pressed button, when the transport still knows it.
    pub message: Option<(i64, MessageId)>,
}

/// Everything the relay reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InboundEvent {
    Message(Message),
    Callback(CallbackQuery),
}

impl InboundEvent {
    /// The user who caused the event.
    pub fn user(&self) -> &User {
        match self {
            InboundEvent::Message(m) => &m.user,
            InboundEvent::Callback(q) => &q.from,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            InboundEvent::Message(_) => "message",
            InboundEvent::Callback(_) => "callback",
        }
    }
}

/// Handler result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; the event was handled.
    Stop,
    /// Not this handler's event, try next.
    Ignore,
    /// Stop the chain and record the notice that was sent back.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Converts a transport-specific callback query to core [`CallbackQuery`].
pub trait ToCoreCallback: Send + Sync {
    fn to_core(&self) -> CallbackQuery;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until
/// Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _event: &InboundEvent) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the event. Return Stop or Reply to end the handle phase. Default: Ignore.
    async fn handle(&self, _event: &InboundEvent) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Ignore)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _event: &InboundEvent,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
