use serde::{Deserialize, Serialize};

/// One size of a photo or thumbnail.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub width: i64,
    pub height: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

natural_key!(PhotoSize => file_id);

impl PhotoSize {
    pub fn new(file_id: impl Into<String>, width: i64, height: i64) -> Self {
        Self {
            file_id: file_id.into(),
            width,
            height,
            file_size: None,
        }
    }
}
