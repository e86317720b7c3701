//! Reveal handler: shows the operator who sent a relayed message.
//!
//! Order is fixed: acknowledge, authorize, parse, look up. A caller who is not the operator never
//! reaches the store.

use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{
    CallbackQuery, Handler, HandlerResponse, InboundEvent, MessageId, RelayError, Result,
    Transport,
};
use storage::CorrelationStore;
use tracing::{error, info, instrument, warn};

use crate::engine::storage_failure;
use crate::notices;
use crate::payload::parse_reveal_payload;
use crate::profile::render_profile;
use crate::settings::RelaySettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Profile sent and button removal requested.
    Revealed { admin_copy_id: MessageId },
    /// Caller is not the operator.
    Denied,
    /// Callback data is not a reveal payload.
    InvalidPayload,
    NotFound { admin_copy_id: MessageId },
    /// Store lookup or profile delivery failed; the operator got a failure notice.
    Failed { admin_copy_id: MessageId },
}

pub struct RevealHandler {
    transport: Arc<dyn Transport>,
    store: Arc<dyn CorrelationStore>,
    settings: RelaySettings,
}

impl RevealHandler {
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

    #[instrument(skip(self, query), fields(user_id = query.from.id, data = ?query.data))]
    pub async fn handle_callback(&self, query: &CallbackQuery) -> RevealOutcome {
        if let Err(e) = self.transport.answer_callback(&query.id).await {
            warn!(error = %e, "Acknowledging callback failed");
        }

        if !self.settings.is_operator(query.from.id) {
            let e = RelayError::Unauthorized(query.from.id);
            warn!(error = %e, "Reveal attempt by non-operator");
            self.send(query.from.id, notices::ACCESS_DENIED).await;
            return RevealOutcome::Denied;
        }

        let Some(admin_copy_id) = query.data.as_deref().and_then(parse_reveal_payload) else {
            let e = RelayError::Validation(format!("not a reveal payload: {:?}", query.data));
            warn!(error = %e, "Ignoring callback");
            return RevealOutcome::InvalidPayload;
        };

        let operator_chat = self.settings.operator_chat();
        let record = match self.store.get(admin_copy_id).await.map_err(storage_failure) {
            Ok(Some(record)) => record,
            Ok(None) => {
                info!(error = %RelayError::NotFound(admin_copy_id), "Reveal target unknown");
                self.send(operator_chat, notices::AUTHOR_NOT_FOUND).await;
                return RevealOutcome::NotFound { admin_copy_id };
            }
            Err(e) => {
                error!(error = %e, admin_copy_id, "Correlation lookup failed");
                self.send(operator_chat, notices::REVEAL_FAILED).await;
                return RevealOutcome::Failed { admin_copy_id };
            }
        };

        if let Err(e) = self
            .transport
            .send_message(operator_chat, &render_profile(&record))
            .await
        {
            warn!(error = %e, admin_copy_id, "Sending profile failed");
            self.send(operator_chat, notices::REVEAL_FAILED).await;
            return RevealOutcome::Failed { admin_copy_id };
        }

        // The button may already be gone (second press, stale client); that is not a failure.
        if let Err(e) = self
            .transport
            .clear_reveal_button(operator_chat, admin_copy_id)
            .await
        {
            warn!(error = %e, admin_copy_id, "Removing reveal button failed");
        }

        info!(admin_copy_id, sender_id = record.sender_id, "Author revealed");
        RevealOutcome::Revealed { admin_copy_id }
    }

    async fn send(&self, chat_id: i64, text: &str) {
        if let Err(e) = self.transport.send_message(chat_id, text).await {
            warn!(error = %e, chat_id, "Sending notice failed");
        }
    }
}

#[async_trait]
impl Handler for RevealHandler {
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let InboundEvent::Callback(query) = event else {
            return Ok(HandlerResponse::Ignore);
        };
        Ok(match self.handle_callback(query).await {
            RevealOutcome::InvalidPayload => HandlerResponse::Ignore,
            _ => HandlerResponse::Stop,
        })
    }
}
