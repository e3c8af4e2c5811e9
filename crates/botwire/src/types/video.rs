use serde::{Deserialize, Serialize};

use super::PhotoSize;

/// A video file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Video {
    pub file_id: String,
    pub width: i64,
    pub height: i64,
    /// Duration in seconds.
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

natural_key!(Video => file_id);

impl Video {
    pub fn new(file_id: impl Into<String>, width: i64, height: i64, duration: i64) -> Self {
        Self {
            file_id: file_id.into(),
            width,
            height,
            duration,
            thumb: None,
            mime_type: None,
            file_size: None,
        }
    }
}
