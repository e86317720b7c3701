//! Content-kind classification.
//!
//! Capabilities are tested in [`ContentKind::PRECEDENCE`] order and the first one present wins;
//! a message with none of them is `Text`. Supporting a new kind means adding a variant, a
//! precedence slot and an arm in [`attachment_for`].

use relay_core::{FileRef, MediaContent, Message};
use storage::ContentKind;

/// Result of classifying a message's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: ContentKind,
    /// `None` iff `kind` is `Text`.
    pub attachment_ref: Option<FileRef>,
    /// Text if present, else caption, else empty.
    pub text: String,
}

/// Attachment reference for `kind`, if the media carries that capability.
/// Photos resolve to the variant with the largest pixel area (last one on ties).
pub fn attachment_for(kind: ContentKind, media: &MediaContent) -> Option<FileRef> {
    match kind {
        ContentKind::Text => None,
        ContentKind::Photo => media
            .photo
            .iter()
            .max_by_key(|p| u64::from(p.width) * u64::from(p.height))
            .map(|p| p.file.clone()),
        ContentKind::Video => media.video.clone(),
        ContentKind::Document => media.document.clone(),
        ContentKind::Voice => media.voice.clone(),
        ContentKind::Audio => media.audio.clone(),
        ContentKind::Sticker => media.sticker.clone(),
        ContentKind::Animation => media.animation.clone(),
    }
}

/// Picks the content kind and attachment of `media` by fixed precedence.
pub fn classify_media(media: &MediaContent) -> (ContentKind, Option<FileRef>) {
    ContentKind::PRECEDENCE
        .iter()
        .find_map(|&kind| attachment_for(kind, media).map(|file| (kind, Some(file))))
        .unwrap_or((ContentKind::Text, None))
}

/// Classifies a whole message: kind, attachment and text.
pub fn classify(message: &Message) -> Classification {
    let (kind, attachment_ref) = classify_media(&message.media);
    Classification {
        kind,
        attachment_ref,
        text: message.text_or_caption().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::PhotoVariant;

    fn full_media() -> MediaContent {
        MediaContent {
            photo: vec![PhotoVariant {
                file: "photo".to_string(),
                width: 90,
                height: 90,
            }],
            video: Some("video".to_string()),
            document: Some("document".to_string()),
            voice: Some("voice".to_string()),
            audio: Some("audio".to_string()),
            sticker: Some("sticker".to_string()),
            animation: Some("animation".to_string()),
        }
    }

    /// Strips capabilities one by one in precedence order; each step the next kind must win.
    #[test]
    fn test_precedence_order_is_fixed() {
        let mut media = full_media();
        let expected = [
            ContentKind::Photo,
            ContentKind::Video,
            ContentKind::Document,
            ContentKind::Voice,
            ContentKind::Audio,
            ContentKind::Sticker,
            ContentKind::Animation,
            ContentKind::Text,
        ];
        for kind in expected {
            let (got, file) = classify_media(&media);
            assert_eq!(got, kind);
            assert_eq!(file.as_deref(), kind.has_attachment().then_some(kind.as_str()));
            match kind {
                ContentKind::Photo => media.photo.clear(),
                ContentKind::Video => media.video = None,
                ContentKind::Document => media.document = None,
                ContentKind::Voice => media.voice = None,
                ContentKind::Audio => media.audio = None,
                ContentKind::Sticker => media.sticker = None,
                ContentKind::Animation => media.animation = None,
                ContentKind::Text => {}
            }
        }
    }

    /// Every pair of capabilities resolves to the one that comes first in the precedence table.
    #[test]
    fn test_pairs_resolve_to_earlier_kind() {
        let kinds = ContentKind::PRECEDENCE;
        for (i, &first) in kinds.iter().enumerate() {
            for &second in &kinds[i + 1..] {
                let mut media = MediaContent::default();
                for kind in [second, first] {
                    set(&mut media, kind);
                }
                assert_eq!(classify_media(&media).0, first, "{first} vs {second}");
            }
        }
    }

    #[test]
    fn test_largest_photo_variant_wins() {
        let media = MediaContent {
            photo: vec![
                PhotoVariant {
                    file: "small".to_string(),
                    width: 90,
                    height: 60,
                },
                PhotoVariant {
                    file: "large".to_string(),
                    width: 1280,
                    height: 853,
                },
                PhotoVariant {
                    file: "medium".to_string(),
                    width: 320,
                    height: 213,
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            classify_media(&media),
            (ContentKind::Photo, Some("large".to_string()))
        );
    }

    #[test]
    fn test_no_media_is_text() {
        assert_eq!(
            classify_media(&MediaContent::default()),
            (ContentKind::Text, None)
        );
    }

    fn set(media: &mut MediaContent, kind: ContentKind) {
        let file = Some(kind.as_str().to_string());
        match kind {
            ContentKind::Photo => {
                media.photo = vec![PhotoVariant {
                    file: kind.as_str().to_string(),
                    width: 1,
                    height: 1,
                }]
            }
            ContentKind::Video => media.video = file,
            ContentKind::Document => media.document = file,
            ContentKind::Voice => media.voice = file,
            ContentKind::Audio => media.audio = file,
            ContentKind::Sticker => media.sticker = file,
            ContentKind::Animation => media.animation = file,
            ContentKind::Text => {}
        }
    }
}
