use serde::{Deserialize, Serialize};

use super::PhotoSize;

/// A round video message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VideoNote {
    pub file_id: String,
    /// Diameter of the video in pixels.
    pub length: i64,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

natural_key!(VideoNote => file_id);

impl VideoNote {
    pub fn new(file_id: impl Into<String>, length: i64, duration: i64) -> Self {
        Self {
            file_id: file_id.into(),
            length,
            duration,
            thumb: None,
            file_size: None,
        }
    }
}
