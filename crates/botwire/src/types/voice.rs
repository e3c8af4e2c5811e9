use serde::{Deserialize, Serialize};

/// A voice message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Voice {
    pub file_id: String,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

natural_key!(Voice => file_id);

impl Voice {
    pub fn new(file_id: impl Into<String>, duration: i64) -> Self {
        Self {
            file_id: file_id.into(),
            duration,
            mime_type: None,
            file_size: None,
        }
    }
}
