use serde::{Deserialize, Serialize};

use crate::domain::ChatId;

/// Kind of chat, carried in the wire `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

/// A conversation: private chat, group, supergroup or channel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    #[serde(rename = "type")]
    pub kind: ChatKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_members_are_administrators: Option<bool>,
}

natural_key!(Chat => id);

impl Chat {
    pub fn new(id: i64, kind: ChatKind) -> Self {
        Self {
            id: ChatId(id),
            kind,
            title: None,
            username: None,
            first_name: None,
            last_name: None,
            all_members_are_administrators: None,
        }
    }
}
