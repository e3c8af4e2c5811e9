//! Rendering entity-annotated text as HTML or Markdown.

use crate::spans::{utf16_len, utf16_slice};
use crate::types::{EntityKind, MessageEntity};
use crate::Result;

/// Markup dialect to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flavor {
    Html,
    Markdown,
}

/// Escape HTML special characters.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Backslash-escape Markdown control characters.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '_' | '*' | '`' | '[') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Render `text` with its entity spans in the given flavor.
///
/// Entities are handled in offset order; text between spans is copied with
/// flavor escaping. Overlapping entities are not supported: a span starting
/// before the previous one ended is skipped and its text rendered plain.
/// With zero entities the result is the escaped text, structurally
/// unchanged — astral characters pass through and never shift later
/// offsets, which count UTF-16 units.
pub fn render(text: &str, entities: &[MessageEntity], flavor: Flavor) -> Result<String> {
    let mut ordered: Vec<&MessageEntity> = entities.iter().collect();
    ordered.sort_by_key(|e| e.offset);

    let escape = |s: &str| match flavor {
        Flavor::Html => escape_html(s),
        Flavor::Markdown => escape_markdown(s),
    };

    let mut out = String::new();
    let mut pos = 0usize; // UTF-16 units consumed so far
    for entity in ordered {
        if entity.offset < pos {
            continue;
        }
        out.push_str(&escape(utf16_slice(text, pos, entity.offset - pos)?));
        let span = utf16_slice(text, entity.offset, entity.length)?;
        out.push_str(&wrap(span, entity, flavor));
        pos = entity.offset + entity.length;
    }
    out.push_str(&escape(utf16_slice(text, pos, utf16_len(text) - pos)?));
    Ok(out)
}

fn wrap(span: &str, entity: &MessageEntity, flavor: Flavor) -> String {
    let url = entity.url.as_deref().unwrap_or("");
    match flavor {
        Flavor::Html => {
            let escaped = escape_html(span);
            match entity.kind {
                EntityKind::Bold => format!("<b>{escaped}</b>"),
                EntityKind::Italic => format!("<i>{escaped}</i>"),
                EntityKind::Code => format!("<code>{escaped}</code>"),
                EntityKind::Pre => format!("<pre>{escaped}</pre>"),
                EntityKind::TextLink => format!(r#"<a href="{url}">{escaped}</a>"#),
                _ => escaped,
            }
        }
        // Code and pre span content stays raw in Markdown.
        Flavor::Markdown => match entity.kind {
            EntityKind::Bold => format!("*{}*", escape_markdown(span)),
            EntityKind::Italic => format!("_{}_", escape_markdown(span)),
            EntityKind::Code => format!("`{span}`"),
            EntityKind::Pre => format!("```{span}```"),
            EntityKind::TextLink => format!("[{}]({url})", escape_markdown(span)),
            _ => escape_markdown(span),
        },
    }
}
