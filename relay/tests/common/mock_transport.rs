//! Mock implementation of [`relay_core::Transport`] for integration tests.
//!
//! Records every call, hands out sequential copy ids, and fails selected operations on demand so
//! tests can assert on side effects without hitting Telegram.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use relay_core::{Message, MessageId, RelayError, Result, Transport};

/// One recorded transport call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Send { chat_id: i64, text: String },
    Reply { chat_id: i64, text: String },
    Copy {
        to_chat: i64,
        source_id: MessageId,
        caption: Option<String>,
        new_id: MessageId,
    },
    Attach {
        chat_id: i64,
        message_id: MessageId,
        payload: String,
    },
    Clear { chat_id: i64, message_id: MessageId },
    Answer { callback_id: String },
}

pub struct MockTransport {
    calls: Mutex<Vec<Call>>,
    next_copy_id: AtomicI32,
    next_sent_id: AtomicI32,
    pub fail_copy_to: Mutex<Option<i64>>,
    pub fail_send_containing: Mutex<Option<String>>,
    pub fail_attach: AtomicBool,
    pub fail_clear: AtomicBool,
}

impl MockTransport {
    /// Copies get ids `first_copy_id`, `first_copy_id + 1`, ...
    pub fn new(first_copy_id: MessageId) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_copy_id: AtomicI32::new(first_copy_id),
            next_sent_id: AtomicI32::new(900_000),
            fail_copy_to: Mutex::new(None),
            fail_send_containing: Mutex::new(None),
            fail_attach: AtomicBool::new(false),
            fail_clear: AtomicBool::new(false),
        }
    }

    /// Every copy into `chat_id` fails from now on.
    pub fn fail_copies_to(&self, chat_id: i64) {
        *self.fail_copy_to.lock().unwrap() = Some(chat_id);
    }

    /// Every `send_message` whose text contains `needle` fails from now on.
    pub fn fail_sends_containing(&self, needle: &str) {
        *self.fail_send_containing.lock().unwrap() = Some(needle.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Copies that landed in `chat_id`.
    pub fn copies_to(&self, chat_id: i64) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Copy { to_chat, .. } if *to_chat == chat_id))
            .collect()
    }

    /// Texts sent to `chat_id` by either `send_message` or `reply_to`.
    pub fn texts_to(&self, chat_id: i64) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Send { chat_id: id, text } | Call::Reply { chat_id: id, text }
                    if id == chat_id =>
                {
                    Some(text)
                }
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<MessageId> {
        if let Some(needle) = self.fail_send_containing.lock().unwrap().as_deref() {
            if text.contains(needle) {
                return Err(RelayError::ExternalCall("sendMessage failed".to_string()));
            }
        }
        self.record(Call::Send {
            chat_id,
            text: text.to_string(),
        });
        Ok(self.next_sent_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(Call::Reply {
            chat_id: message.chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn copy_message(
        &self,
        to_chat: i64,
        source: &Message,
        caption: Option<&str>,
    ) -> Result<MessageId> {
        if *self.fail_copy_to.lock().unwrap() == Some(to_chat) {
            return Err(RelayError::ExternalCall("copyMessage timed out".to_string()));
        }
        let new_id = self.next_copy_id.fetch_add(1, Ordering::SeqCst);
        self.record(Call::Copy {
            to_chat,
            source_id: source.id,
            caption: caption.map(str::to_string),
            new_id,
        });
        Ok(new_id)
    }

    async fn attach_reveal_button(
        &self,
        chat_id: i64,
        message_id: MessageId,
        payload: &str,
    ) -> Result<()> {
        if self.fail_attach.load(Ordering::SeqCst) {
            return Err(RelayError::ExternalCall("editMessageReplyMarkup failed".to_string()));
        }
        self.record(Call::Attach {
            chat_id,
            message_id,
            payload: payload.to_string(),
        });
        Ok(())
    }

    async fn clear_reveal_button(&self, chat_id: i64, message_id: MessageId) -> Result<()> {
        self.record(Call::Clear {
            chat_id,
            message_id,
        });
        if self.fail_clear.load(Ordering::SeqCst) {
            return Err(RelayError::ExternalCall("message can't be edited".to_string()));
        }
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.record(Call::Answer {
            callback_id: callback_id.to_string(),
        });
        Ok(())
    }
}
