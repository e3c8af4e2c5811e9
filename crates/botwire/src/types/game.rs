use serde::{Deserialize, Serialize};

use super::{MessageEntity, PhotoSize};

/// A game to be shared in a chat.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub description: String,
    pub photo: Vec<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_entities: Option<Vec<MessageEntity>>,
}

natural_key!(Game => title, description);

impl Game {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        photo: Vec<PhotoSize>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            photo,
            text: None,
            text_entities: None,
        }
    }
}
