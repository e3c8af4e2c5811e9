use serde::{Deserialize, Serialize};

/// An audio file the platform treats as music.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Audio {
    pub file_id: String,
    /// Duration in seconds.
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

natural_key!(Audio => file_id);

impl Audio {
    pub fn new(file_id: impl Into<String>, duration: i64) -> Self {
        Self {
            file_id: file_id.into(),
            duration,
            performer: None,
            title: None,
            mime_type: None,
            file_size: None,
        }
    }
}
