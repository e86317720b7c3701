//! Bot commands. `/start` greets; no command is ever relayed.

use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Handler, HandlerResponse, InboundEvent, Message, Result, Transport};
use tracing::{debug, warn};

use crate::notices;

pub struct StartCommandHandler {
    transport: Arc<dyn Transport>,
}

impl StartCommandHandler {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

/// Command name without the leading slash, bot mention and arguments: `/start@bot x` → `start`.
/// A slash not directly followed by a command word (`/`, `/ hi`, `/@bot`) is ordinary text.
fn command_name(message: &Message) -> Option<&str> {
    let text = message.text.as_deref()?.strip_prefix('/')?;
    if text.starts_with(char::is_whitespace) {
        return None;
    }
    let word = text.split_whitespace().next()?;
    word.split('@').next().filter(|name| !name.is_empty())
}

#[async_trait]
impl Handler for StartCommandHandler {
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let InboundEvent::Message(message) = event else {
            return Ok(HandlerResponse::Ignore);
        };
        match command_name(message) {
            None => Ok(HandlerResponse::Ignore),
            Some("start") => {
                if let Err(e) = self.transport.reply_to(message, notices::GREETING).await {
                    warn!(error = %e, user_id = message.user.id, "Sending greeting failed");
                }
                Ok(HandlerResponse::Reply(notices::GREETING.to_string()))
            }
            Some(other) => {
                debug!(command = other, user_id = message.user.id, "Unknown command dropped");
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
