use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// A user or bot account.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bot: Option<bool>,
}

natural_key!(User => id);

impl User {
    pub fn new(id: i64, first_name: impl Into<String>) -> Self {
        Self {
            id: UserId(id),
            first_name: first_name.into(),
            last_name: None,
            username: None,
            language_code: None,
            is_bot: None,
        }
    }
}
