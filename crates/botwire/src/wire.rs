//! Generic wire documents and the codec between them and typed entities.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// A wire-format JSON object, as received from or sent to the remote API.
pub type Document = serde_json::Map<String, Value>;

/// Decode a wire document into a typed entity.
///
/// Unknown keys are ignored. A missing required field or a malformed nested
/// entity is a parse failure, never a silently substituted default.
pub fn from_document<T: DeserializeOwned>(doc: Document) -> Result<T> {
    from_value(Value::Object(doc))
}

/// Decode an arbitrary JSON value (some endpoints return bools or arrays).
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(Error::from)
}

/// Encode a typed entity into a wire document, omitting absent fields.
pub fn to_document<T: Serialize>(entity: &T) -> Result<Document> {
    match serde_json::to_value(entity)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::Parse(format!("expected a JSON object, got {other}"))),
    }
}

/// Encode a typed entity as a JSON string.
pub fn to_json<T: Serialize>(entity: &T) -> Result<String> {
    serde_json::to_string(entity).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{Audio, User};

    #[test]
    fn unknown_keys_are_ignored() {
        let doc = to_document(&json!({
            "file_id": "abc",
            "duration": 3,
            "caption": "not an audio field",
        }))
        .unwrap();
        let audio: Audio = from_document(doc).unwrap();
        assert_eq!(audio.file_id, "abc");
        assert_eq!(audio.duration, 3);
    }

    #[test]
    fn missing_required_field_is_a_parse_failure() {
        let doc = to_document(&json!({"duration": 3})).unwrap();
        let err = from_document::<Audio>(doc).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn absent_optional_fields_are_omitted() {
        let user = User::new(2, "testuser");
        let doc = to_document(&user).unwrap();
        assert_eq!(doc["id"], json!(2));
        assert_eq!(doc["first_name"], json!("testuser"));
        assert!(!doc.contains_key("last_name"));
        assert!(!doc.contains_key("username"));
    }

    #[test]
    fn round_trips_through_json_text() {
        let user = User::new(2, "testuser");
        let text = to_json(&user).unwrap();
        let back: User = from_value(serde_json::from_str(&text).unwrap()).unwrap();
        assert_eq!(back, user);
    }
}
