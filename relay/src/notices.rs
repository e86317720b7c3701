//! Fixed user- and operator-facing notices. None of them carries internal error detail.

pub const GREETING: &str = "👋 Hi! I'm an anonymous message bot.\n\
Send me any message (text, photo, video, voice, ...) and it will be passed to the admin anonymously.";

pub const DELIVERED: &str = "✅ Message delivered to the admin!";
pub const SEND_FAILED: &str = "❌ Failed to send your message";

pub const REPLY_SENT: &str = "✅ Reply sent!";
pub const REPLY_FAILED: &str = "❌ Failed to send the reply";

pub const AUTHOR_NOT_FOUND: &str = "❌ Author not found";
pub const ACCESS_DENIED: &str = "⛔ Access denied";
pub const REVEAL_FAILED: &str = "❌ Failed to load the author";
