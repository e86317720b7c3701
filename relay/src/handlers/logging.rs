//! Handler for logging every inbound event.

use async_trait::async_trait;
use relay_core::{Handler, HandlerResponse, InboundEvent, Result};
use tracing::{debug, info, instrument};

/// Logs each event in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &InboundEvent) -> Result<bool> {
        match event {
            InboundEvent::Message(m) => info!(
                user_id = m.user.id,
                chat_id = m.chat.id,
                message_id = m.id,
                reply_to = ?m.reply_to_message_id,
                text_len = m.text_or_caption().len(),
                has_media = !m.media.is_empty(),
                "Received message"
            ),
            InboundEvent::Callback(q) => info!(
                user_id = q.from.id,
                data = ?q.data,
                source_message = ?q.message,
                "Received callback"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &InboundEvent, response: &HandlerResponse) -> Result<()> {
        debug!(
            kind = event.kind(),
            user_id = event.user().id,
            response = ?response,
            "Processed event"
        );
        Ok(())
    }
}
