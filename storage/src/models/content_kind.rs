//! Content kind of a relayed message.
//!
//! Persisted as a lowercase string in the `content_kind` column.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Photo,
    Video,
    Document,
    Voice,
    Audio,
    Sticker,
    Animation,
}

impl ContentKind {
    /// Order in which attachment capabilities are tested when classifying a message.
    /// `Text` is the fallback and is never tested.
    pub const PRECEDENCE: [ContentKind; 7] = [
        ContentKind::Photo,
        ContentKind::Video,
        ContentKind::Document,
        ContentKind::Voice,
        ContentKind::Audio,
        ContentKind::Sticker,
        ContentKind::Animation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Photo => "photo",
            ContentKind::Video => "video",
            ContentKind::Document => "document",
            ContentKind::Voice => "voice",
            ContentKind::Audio => "audio",
            ContentKind::Sticker => "sticker",
            ContentKind::Animation => "animation",
        }
    }

    /// Whether records of this kind carry an attachment reference.
    pub fn has_attachment(&self) -> bool {
        !matches!(self, ContentKind::Text)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ContentKind::Text),
            "photo" => Ok(ContentKind::Photo),
            "video" => Ok(ContentKind::Video),
            "document" => Ok(ContentKind::Document),
            "voice" => Ok(ContentKind::Voice),
            "audio" => Ok(ContentKind::Audio),
            "sticker" => Ok(ContentKind::Sticker),
            "animation" => Ok(ContentKind::Animation),
            other => Err(StorageError::Corrupt(format!("unknown content kind: {}", other))),
        }
    }
}
