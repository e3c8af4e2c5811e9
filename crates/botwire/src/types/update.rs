use serde::{Deserialize, Serialize};

use crate::domain::UpdateId;

use super::Message;

/// One incoming update from the remote API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Update {
    pub update_id: UpdateId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Message>,
}

natural_key!(Update => update_id);

impl Update {
    pub fn new(update_id: i64) -> Self {
        Self {
            update_id: UpdateId(update_id),
            message: None,
            edited_message: None,
            channel_post: None,
        }
    }
}
