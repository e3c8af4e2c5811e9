use serde::{Deserialize, Serialize};

use super::PhotoSize;

/// A general file, as opposed to photos, voice messages and audio files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Document {
    pub file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

natural_key!(Document => file_id);

impl Document {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            thumb: None,
            file_name: None,
            mime_type: None,
            file_size: None,
        }
    }
}
