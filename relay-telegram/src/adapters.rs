//! Adapters from Telegram (teloxide) types to relay_core types.
//! Depends only on teloxide and relay_core type definitions.

use relay_core::{
    CallbackQuery, Chat, MediaContent, Message, PhotoVariant, ToCoreCallback, ToCoreMessage,
    ToCoreUser, User,
};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: self.0.first_name.clone(),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
///
/// Messages without an author (channel posts, service messages) convert with user id 0; callers
/// should drop them before relaying.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0,
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: String::new(),
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            text: self.0.text().map(str::to_string),
            caption: self.0.caption().map(str::to_string),
            media: self.media(),
            reply_to_message_id: self.0.reply_to_message().map(|m| m.id.0),
            created_at: self.0.date,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Collects every attachment capability the message exposes.
    fn media(&self) -> MediaContent {
        let msg = self.0;
        MediaContent {
            photo: msg
                .photo()
                .map(|sizes| {
                    sizes
                        .iter()
                        .map(|p| PhotoVariant {
                            file: p.file.id.to_string(),
                            width: p.width,
                            height: p.height,
                        })
                        .collect()
                })
                .unwrap_or_default(),
            video: msg.video().map(|v| v.file.id.to_string()),
            document: msg.document().map(|d| d.file.id.to_string()),
            voice: msg.voice().map(|v| v.file.id.to_string()),
            audio: msg.audio().map(|a| a.file.id.to_string()),
            sticker: msg.sticker().map(|s| s.file.id.to_string()),
            animation: msg.animation().map(|a| a.file.id.to_string()),
        }
    }

    /// Returns true if the message has a human author.
    pub fn has_author(&self) -> bool {
        self.0.from.as_ref().is_some_and(|u| !u.is_bot)
    }
}

/// Wraps a teloxide CallbackQuery for conversion to core [`CallbackQuery`].
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreCallback for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> CallbackQuery {
        CallbackQuery {
            id: self.0.id.0.clone(),
            from: TelegramUserWrapper(&self.0.from).to_core(),
            data: self.0.data.clone(),
            message: self.0.message.as_ref().map(|m| (m.chat().id.0, m.id().0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, names.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, "Test");
        assert_eq!(core_user.display_name(), "Test");
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }
}
