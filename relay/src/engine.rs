//! Relay engine: routes sender messages to the operator and operator replies back to senders.
//!
//! Sender path: copy to operator → put correlation record → attach reveal button → confirm.
//! Operator path: reply target → get record → copy reply to the sender → confirm.
//! External calls are attempted once; every path ends with exactly one notice.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use relay_core::{
    Handler, HandlerResponse, InboundEvent, Message, MessageId, RelayError, Result, Transport,
};
use storage::{CorrelationRecord, CorrelationStore, StorageError};
use tracing::{debug, error, info, instrument, warn};

use crate::content::classify;
use crate::notices;
use crate::payload::reveal_payload;
use crate::settings::RelaySettings;

/// Where an inbound message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Anyone but the operator.
    SenderMessage,
    /// Operator replying to a message in the operator chat; the target is presumed to be a relayed
    /// copy.
    OperatorReply { admin_copy_id: MessageId },
    /// Operator writing without a reply target, or anywhere but the operator chat. Message ids are
    /// only unique per chat, so a reply elsewhere never names a relayed copy.
    OperatorOther,
}

/// Classifies a message relative to the operator identity and chat.
pub fn route_message(message: &Message, settings: &RelaySettings) -> Route {
    if !settings.is_operator(message.user.id) {
        return Route::SenderMessage;
    }
    match message.reply_to_message_id {
        Some(admin_copy_id) if message.chat.id == settings.operator_chat() => {
            Route::OperatorReply { admin_copy_id }
        }
        _ => Route::OperatorOther,
    }
}

/// Builds the record for a sender message whose copy got `admin_copy_id`.
pub fn build_record(
    message: &Message,
    admin_copy_id: MessageId,
    created_at: DateTime<Utc>,
) -> CorrelationRecord {
    let content = classify(message);
    CorrelationRecord {
        sender_id: message.user.id,
        sender_handle: message.user.username.clone(),
        sender_display_name: message.user.display_name().to_string(),
        created_at,
        content_kind: content.kind,
        text: content.text,
        attachment_ref: content.attachment_ref,
        admin_copy_id,
    }
}

/// Terminal state of one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Copied, recorded, button attached, sender confirmed.
    Delivered { admin_copy_id: MessageId },
    /// The copy to the operator failed; nothing was recorded.
    CopyFailed,
    /// Copied but the record could not be stored; the operator-side copy has no correlation.
    NotRecorded { admin_copy_id: MessageId },
    /// Copied and recorded but the reveal button could not be attached.
    ButtonFailed { admin_copy_id: MessageId },
    /// Operator reply copied to the sender.
    ReplyForwarded { sender_id: i64 },
    /// Record found but the copy to the sender failed (or the lookup itself failed).
    ReplyFailed,
    /// Reply target has no correlation record.
    AuthorNotFound,
    OperatorOther,
}

impl RelayOutcome {
    /// Notice sent back for this outcome, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            RelayOutcome::Delivered { .. } => Some(notices::DELIVERED),
            RelayOutcome::CopyFailed
            | RelayOutcome::NotRecorded { .. }
            | RelayOutcome::ButtonFailed { .. } => Some(notices::SEND_FAILED),
            RelayOutcome::ReplyForwarded { .. } => Some(notices::REPLY_SENT),
            RelayOutcome::ReplyFailed => Some(notices::REPLY_FAILED),
            RelayOutcome::AuthorNotFound => Some(notices::AUTHOR_NOT_FOUND),
            RelayOutcome::OperatorOther => None,
        }
    }
}

/// Maps store failures onto the relay taxonomy.
pub(crate) fn storage_failure(e: StorageError) -> RelayError {
    match e {
        StorageError::Conflict(id) => RelayError::Conflict(id),
        other => RelayError::Storage(other.to_string()),
    }
}

/// Sender ↔ operator router backed by a [`CorrelationStore`].
pub struct RelayEngine {
    transport: Arc<dyn Transport>,
    store: Arc<dyn CorrelationStore>,
    settings: RelaySettings,
}

impl RelayEngine {
    pub fn new(
        transport: Arc<dyn Transport>,
        store: Arc<dyn CorrelationStore>,
        settings: RelaySettings,
    ) -> Self {
        Self {
            transport,
            store,
            settings,
        }
    }

    /// Routes one message, performs every side effect and sends the resulting notice.
    #[instrument(skip(self, message), fields(user_id = message.user.id, message_id = message.id))]
    pub async fn handle_message(&self, message: &Message) -> RelayOutcome {
        let outcome = match route_message(message, &self.settings) {
            Route::SenderMessage => self.relay_to_operator(message).await,
            Route::OperatorReply { admin_copy_id } => {
                self.forward_reply(message, admin_copy_id).await
            }
            Route::OperatorOther => {
                debug!(
                    chat_id = message.chat.id,
                    "Operator message is not a reply to a copy, nothing to relay"
                );
                RelayOutcome::OperatorOther
            }
        };

        if let Some(notice) = outcome.notice() {
            self.notify(message, notice).await;
        }
        outcome
    }

    async fn relay_to_operator(&self, message: &Message) -> RelayOutcome {
        let operator_chat = self.settings.operator_chat();

        let admin_copy_id = match self
            .transport
            .copy_message(operator_chat, message, message.caption.as_deref())
            .await
        {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "Copy to operator failed");
                return RelayOutcome::CopyFailed;
            }
        };

        let record = build_record(message, admin_copy_id, Utc::now());
        if let Err(e) = self.store.put(&record).await.map_err(storage_failure) {
            error!(
                error = %e,
                admin_copy_id,
                "Relayed copy has no correlation record; replies and reveal for it will fail"
            );
            return RelayOutcome::NotRecorded { admin_copy_id };
        }

        if let Err(e) = self
            .transport
            .attach_reveal_button(operator_chat, admin_copy_id, &reveal_payload(admin_copy_id))
            .await
        {
            warn!(error = %e, admin_copy_id, "Attaching reveal button failed");
            return RelayOutcome::ButtonFailed { admin_copy_id };
        }

        info!(
            admin_copy_id,
            content_kind = %record.content_kind,
            "Message relayed to operator"
        );
        RelayOutcome::Delivered { admin_copy_id }
    }

    async fn forward_reply(&self, reply: &Message, admin_copy_id: MessageId) -> RelayOutcome {
        let record = match self.store.get(admin_copy_id).await.map_err(storage_failure) {
            Ok(Some(record)) => record,
            Ok(None) => {
                let e = RelayError::Validation(format!(
                    "reply target {} is not a relayed copy",
                    admin_copy_id
                ));
                info!(error = %e, "Operator reply not correlated");
                return RelayOutcome::AuthorNotFound;
            }
            Err(e) => {
                error!(error = %e, admin_copy_id, "Correlation lookup failed");
                return RelayOutcome::ReplyFailed;
            }
        };

        match self
            .transport
            .copy_message(record.sender_id, reply, reply.caption.as_deref())
            .await
        {
            Ok(_) => {
                info!(admin_copy_id, sender_id = record.sender_id, "Reply forwarded");
                RelayOutcome::ReplyForwarded {
                    sender_id: record.sender_id,
                }
            }
            Err(e) => {
                warn!(error = %e, admin_copy_id, "Forwarding reply failed");
                RelayOutcome::ReplyFailed
            }
        }
    }

    async fn notify(&self, message: &Message, text: &str) {
        if let Err(e) = self.transport.reply_to(message, text).await {
            warn!(error = %e, chat_id = message.chat.id, "Sending notice failed");
        }
    }
}

#[async_trait]
impl Handler for RelayEngine {
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let InboundEvent::Message(message) = event else {
            return Ok(HandlerResponse::Ignore);
        };
        Ok(match self.handle_message(message).await.notice() {
            Some(notice) => HandlerResponse::Reply(notice.to_string()),
            None => HandlerResponse::Continue,
        })
    }
}
