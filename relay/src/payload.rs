//! Button payload codec: a fixed marker followed by the decimal admin copy id.

use relay_core::MessageId;

/// Prefix of every reveal payload.
pub const REVEAL_MARKER: &str = "show_";

pub fn reveal_payload(admin_copy_id: MessageId) -> String {
    format!("{}{}", REVEAL_MARKER, admin_copy_id)
}

/// Returns the admin copy id named by `data`, or `None` if `data` is not a reveal payload.
pub fn parse_reveal_payload(data: &str) -> Option<MessageId> {
    data.strip_prefix(REVEAL_MARKER)?.parse().ok()
}
