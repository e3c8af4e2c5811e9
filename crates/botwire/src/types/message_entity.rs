use serde::{Deserialize, Serialize};

/// Kind of span annotation, carried in the wire `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Mention,
    Hashtag,
    BotCommand,
    Url,
    Email,
    Bold,
    Italic,
    Code,
    Pre,
    TextLink,
}

/// A tagged span over a message's text: formatting or a semantic annotation.
///
/// `offset` and `length` count UTF-16 code units, matching the platform's
/// string indexing: characters outside the Basic Multilingual Plane count as
/// two units, not one.
///
/// Unlike the other entities, two `MessageEntity` values are equal only when
/// every field matches; identical spans are indistinguishable keys in a
/// resolution result.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub offset: usize,
    pub length: usize,
    /// Target of a `text_link` span.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl MessageEntity {
    pub fn new(kind: EntityKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            offset,
            length,
            url: None,
        }
    }

    pub fn text_link(offset: usize, length: usize, url: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::TextLink,
            offset,
            length,
            url: Some(url.into()),
        }
    }
}
