use serde::{Deserialize, Serialize};

use super::PhotoSize;

/// A sticker.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sticker {
    pub file_id: String,
    pub width: i64,
    pub height: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

natural_key!(Sticker => file_id);

impl Sticker {
    pub fn new(file_id: impl Into<String>, width: i64, height: i64) -> Self {
        Self {
            file_id: file_id.into(),
            width,
            height,
            thumb: None,
            emoji: None,
            file_size: None,
        }
    }
}
