//! Event builders and a wired-up relay for tests.

use std::sync::Arc;

use chrono::Utc;
use handler_chain::HandlerChain;
use relay::{LoggingHandler, RelayEngine, RelaySettings, RevealHandler, StartCommandHandler};
use relay_core::{CallbackQuery, Chat, InboundEvent, MediaContent, Message, MessageId, User};
use storage::{CorrelationStore, SqliteCorrelationStore};

use super::mock_transport::MockTransport;
use super::spy_store::SpyStore;

pub const OPERATOR_ID: i64 = 42;

pub fn user(id: i64, username: Option<&str>, first_name: &str) -> User {
    User {
        id,
        username: username.map(str::to_string),
        first_name: first_name.to_string(),
        last_name: None,
    }
}

pub fn operator() -> User {
    user(OPERATOR_ID, Some("admin"), "Admin")
}

/// Private-chat message from `from` with the given text.
pub fn text_message(from: User, id: MessageId, text: &str) -> Message {
    Message {
        id,
        chat: Chat {
            id: from.id,
            chat_type: "private".to_string(),
        },
        user: from,
        text: Some(text.to_string()),
        caption: None,
        media: MediaContent::default(),
        reply_to_message_id: None,
        created_at: Utc::now(),
    }
}

/// Private-chat message from `from` carrying `media` and an optional caption.
pub fn media_message(from: User, id: MessageId, media: MediaContent, caption: Option<&str>) -> Message {
    Message {
        text: None,
        caption: caption.map(str::to_string),
        media,
        ..text_message(from, id, "")
    }
}

/// Operator message replying to `admin_copy_id`.
pub fn operator_reply(id: MessageId, admin_copy_id: MessageId, text: &str) -> Message {
    Message {
        reply_to_message_id: Some(admin_copy_id),
        ..text_message(operator(), id, text)
    }
}

pub fn callback(from: User, data: &str) -> CallbackQuery {
    CallbackQuery {
        id: format!("cb-{}", from.id),
        from,
        data: Some(data.to_string()),
        message: None,
    }
}

/// Engine, reveal handler and chain over an in-memory store and a mock transport.
pub struct Harness {
    pub transport: Arc<MockTransport>,
    pub store: Arc<SpyStore>,
    pub engine: Arc<RelayEngine>,
    pub reveal: Arc<RevealHandler>,
    pub chain: HandlerChain,
}

impl Harness {
    pub async fn new(first_copy_id: MessageId) -> Self {
        let inner: Arc<dyn CorrelationStore> = Arc::new(
            SqliteCorrelationStore::new("sqlite::memory:")
                .await
                .expect("Failed to create store"),
        );
        Self::with_store(first_copy_id, inner)
    }

    pub fn with_store(first_copy_id: MessageId, inner: Arc<dyn CorrelationStore>) -> Self {
        let transport = Arc::new(MockTransport::new(first_copy_id));
        let store = Arc::new(SpyStore::new(inner));
        let settings = RelaySettings::new(OPERATOR_ID);

        let engine = Arc::new(RelayEngine::new(transport.clone(), store.clone(), settings));
        let reveal = Arc::new(RevealHandler::new(transport.clone(), store.clone(), settings));
        let chain = HandlerChain::new()
            .add_handler(Arc::new(LoggingHandler))
            .add_handler(Arc::new(StartCommandHandler::new(transport.clone())))
            .add_handler(engine.clone())
            .add_handler(reveal.clone());

        Self {
            transport,
            store,
            engine,
            reveal,
            chain,
        }
    }

    pub async fn dispatch_message(&self, message: Message) {
        self.chain
            .handle(&InboundEvent::Message(message))
            .await
            .expect("chain failed");
    }

    pub async fn dispatch_callback(&self, query: CallbackQuery) {
        self.chain
            .handle(&InboundEvent::Callback(query))
            .await
            .expect("chain failed");
    }
}
