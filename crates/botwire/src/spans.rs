//! Resolution of entity spans against message text.
//!
//! Span offsets and lengths count UTF-16 code units (see
//! [`MessageEntity`]), so slicing walks the text tracking code-unit
//! positions rather than indexing bytes or scalar values directly.

use std::collections::HashMap;

use crate::types::{EntityKind, MessageEntity};
use crate::{Error, Result};

/// Total length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Slice `text` by UTF-16 code-unit offset and length.
///
/// Fails when the span runs past the end of the text or an endpoint lands
/// inside a surrogate pair.
pub fn utf16_slice(text: &str, offset: usize, length: usize) -> Result<&str> {
    let end = offset
        .checked_add(length)
        .ok_or_else(|| Error::Parse(format!("entity span {offset}+{length} overflows")))?;

    let mut start_byte = None;
    let mut end_byte = None;
    let mut units = 0usize;
    for (i, ch) in text.char_indices() {
        if units == offset && start_byte.is_none() {
            start_byte = Some(i);
        }
        if units == end {
            end_byte = Some(i);
            break;
        }
        units += ch.len_utf16();
    }
    // A span may end exactly at the end of the text.
    if start_byte.is_none() && units == offset {
        start_byte = Some(text.len());
    }
    if end_byte.is_none() && units == end {
        end_byte = Some(text.len());
    }

    match (start_byte, end_byte) {
        (Some(s), Some(e)) => Ok(&text[s..e]),
        _ => Err(Error::Parse(format!(
            "entity span {offset}+{length} does not fit the text"
        ))),
    }
}

/// Resolve one entity against `text`.
///
/// For `text_link` entities the resolved value is the link target, not the
/// covered substring.
pub fn parse_entity(text: &str, entity: &MessageEntity) -> Result<String> {
    if entity.kind == EntityKind::TextLink {
        return entity
            .url
            .clone()
            .ok_or_else(|| Error::Parse("text_link entity without url".into()));
    }
    Ok(utf16_slice(text, entity.offset, entity.length)?.to_string())
}

/// Resolve all entities (optionally only those of one kind) to a mapping
/// from entity to resolved value.
///
/// Entities compare by value, so identical spans collapse into one key.
pub fn parse_entities(
    text: &str,
    entities: &[MessageEntity],
    filter: Option<EntityKind>,
) -> Result<HashMap<MessageEntity, String>> {
    let mut resolved = HashMap::new();
    for entity in entities {
        if filter.is_some_and(|kind| entity.kind != kind) {
            continue;
        }
        resolved.insert(entity.clone(), parse_entity(text, entity)?);
    }
    Ok(resolved)
}
