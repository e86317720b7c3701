//! Sender profile shown to the operator on reveal.

use chrono::{Local, TimeZone};
use storage::CorrelationRecord;

/// Local date-time pattern used for `created_at`.
pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Shown in place of the handle when the sender has none.
pub const NO_HANDLE: &str = "none";

/// Renders the profile with `created_at` in the server's local time zone.
pub fn render_profile(record: &CorrelationRecord) -> String {
    render_profile_in(record, &Local)
}

/// Renders the profile with `created_at` converted to `tz`.
pub fn render_profile_in<Tz>(record: &CorrelationRecord, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let handle = record
        .sender_handle
        .as_deref()
        .map(|h| format!("@{}", h))
        .unwrap_or_else(|| NO_HANDLE.to_string());
    let date = record.created_at.with_timezone(tz).format(DATE_FORMAT);

    format!(
        "📨 Author info\n\
         👤 Name: {}\n\
         🆔 ID: {}\n\
         📱 Username: {}\n\
         📅 Date: {}\n\
         💬 Text: {}",
        record.sender_display_name, record.sender_id, handle, date, record.text
    )
}
