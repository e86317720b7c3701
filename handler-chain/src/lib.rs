//! # Handler chain
//!
//! Runs a sequence of handlers for each inbound event: every `before` in order (any `false` stops
//! the chain), then `handle` until one returns Stop or Reply, then every `after` in reverse order.

use relay_core::{Handler, HandlerResponse, InboundEvent, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered list of handlers shared by every event task.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in order; first Stop/Reply ends the handle phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs before, handle and after phases. Returns the first Stop or Reply, or Continue if no
    /// handler claimed the event.
    #[instrument(skip(self, event), fields(kind = event.kind(), user_id = event.user().id))]
    pub async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Continue;

        debug!("step: handler_chain started");

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            if !handler.before(event).await? {
                info!(handler = %handler_name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(event).await?;
            debug!(handler = %handler_name, response = ?response, "step: handler done");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(event, &final_response).await?;
        }

        debug!(response = ?final_response, "step: handler_chain finished");

        Ok(final_response)
    }
}

// Tests live in tests/handler_chain_test.rs
