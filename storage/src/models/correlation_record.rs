//! Correlation record model for persistence.
//!
//! Maps to the `correlations` table and is used by SqliteCorrelationStore.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ContentKind;
use crate::error::StorageError;

/// Binding from the operator-side copy of a message back to its sender and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationRecord {
    pub sender_id: i64,
    pub sender_handle: Option<String>,
    pub sender_display_name: String,
    pub created_at: DateTime<Utc>,
    pub content_kind: ContentKind,
    pub text: String,
    /// Present iff `content_kind` is not `Text`.
    pub attachment_ref: Option<String>,
    pub admin_copy_id: i32,
}

/// Row shape as stored; `content_kind` is still a string.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CorrelationRow {
    pub sender_id: i64,
    pub sender_handle: Option<String>,
    pub sender_display_name: String,
    pub created_at: DateTime<Utc>,
    pub content_kind: String,
    pub text: String,
    pub attachment_ref: Option<String>,
    pub admin_copy_id: i32,
}

impl TryFrom<CorrelationRow> for CorrelationRecord {
    type Error = StorageError;

    fn try_from(row: CorrelationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            sender_id: row.sender_id,
            sender_handle: row.sender_handle,
            sender_display_name: row.sender_display_name,
            created_at: row.created_at,
            content_kind: row.content_kind.parse()?,
            text: row.text,
            attachment_ref: row.attachment_ref,
            admin_copy_id: row.admin_copy_id,
        })
    }
}
