use serde::{Deserialize, Serialize};

/// A file ready to be downloaded, as returned by `getFile`.
///
/// The actual download (and where the bytes land) belongs to the transport
/// and its caller; see [`crate::Api::download_file`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct File {
    pub file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

natural_key!(File => file_id);

impl File {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            file_size: None,
            file_path: None,
        }
    }
}
