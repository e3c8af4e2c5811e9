//! Typed request parameters for the generic call layer.
//!
//! One explicit struct per endpoint. Optional fields are `None` when absent
//! and omitted from the wire document, so a falsy-but-present value (zero,
//! empty string) is never confused with a missing one. `validate` rejects
//! calls that lack a required identifying field before any transport work.

use serde::Serialize;

use crate::domain::{ChatId, MessageId};
use crate::{Error, Result};

/// A serializable parameter set bound to one endpoint.
pub trait Request: Serialize + Send + Sync {
    const ENDPOINT: &'static str;

    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{field} must not be empty")));
    }
    Ok(())
}

#[derive(Clone, Debug, Serialize)]
pub struct SendMessage {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<MessageId>,
}

impl SendMessage {
    pub fn new(chat_id: ChatId, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            parse_mode: None,
            disable_notification: None,
            reply_to_message_id: None,
        }
    }
}

impl Request for SendMessage {
    const ENDPOINT: &'static str = "sendMessage";

    fn validate(&self) -> Result<()> {
        require("text", &self.text)
    }
}

/// Declares a send-by-file-id request: one required file-id field plus the
/// shared reply/notification options.
macro_rules! send_file_request {
    ($(#[$doc:meta])* $name:ident, $endpoint:literal, $file_field:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, Serialize)]
        pub struct $name {
            pub chat_id: ChatId,
            pub $file_field: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub caption: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub disable_notification: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub reply_to_message_id: Option<MessageId>,
        }

        impl $name {
            pub fn new(chat_id: ChatId, $file_field: impl Into<String>) -> Self {
                Self {
                    chat_id,
                    $file_field: $file_field.into(),
                    caption: None,
                    disable_notification: None,
                    reply_to_message_id: None,
                }
            }
        }

        impl Request for $name {
            const ENDPOINT: &'static str = $endpoint;

            fn validate(&self) -> Result<()> {
                require(stringify!($file_field), &self.$file_field)
            }
        }
    };
}

/// Resend an audio file by its file id. Carries the audio-specific metadata
/// overrides alongside the shared options, so it is not macro-generated.
#[derive(Clone, Debug, Serialize)]
pub struct SendAudio {
    pub chat_id: ChatId,
    pub audio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<MessageId>,
}

impl SendAudio {
    pub fn new(chat_id: ChatId, audio: impl Into<String>) -> Self {
        Self {
            chat_id,
            audio: audio.into(),
            caption: None,
            duration: None,
            performer: None,
            title: None,
            disable_notification: None,
            reply_to_message_id: None,
        }
    }
}

impl Request for SendAudio {
    const ENDPOINT: &'static str = "sendAudio";

    fn validate(&self) -> Result<()> {
        require("audio", &self.audio)
    }
}

send_file_request!(SendDocument, "sendDocument", document);
send_file_request!(SendPhoto, "sendPhoto", photo);
send_file_request!(SendSticker, "sendSticker", sticker);
send_file_request!(SendVideo, "sendVideo", video);
send_file_request!(SendVideoNote, "sendVideoNote", video_note);
send_file_request!(SendVoice, "sendVoice", voice);

#[derive(Clone, Debug, Serialize)]
pub struct SendLocation {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<MessageId>,
}

impl SendLocation {
    pub fn new(chat_id: ChatId, latitude: f64, longitude: f64) -> Self {
        Self {
            chat_id,
            latitude,
            longitude,
            disable_notification: None,
            reply_to_message_id: None,
        }
    }
}

impl Request for SendLocation {
    const ENDPOINT: &'static str = "sendLocation";
}

#[derive(Clone, Debug, Serialize)]
pub struct SendVenue {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<MessageId>,
}

impl SendVenue {
    pub fn new(
        chat_id: ChatId,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            chat_id,
            latitude,
            longitude,
            title: title.into(),
            address: address.into(),
            foursquare_id: None,
            disable_notification: None,
            reply_to_message_id: None,
        }
    }
}

impl Request for SendVenue {
    const ENDPOINT: &'static str = "sendVenue";
}

#[derive(Clone, Debug, Serialize)]
pub struct SendContact {
    pub chat_id: ChatId,
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<MessageId>,
}

impl SendContact {
    pub fn new(
        chat_id: ChatId,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            chat_id,
            phone_number: phone_number.into(),
            first_name: first_name.into(),
            last_name: None,
            disable_notification: None,
            reply_to_message_id: None,
        }
    }
}

impl Request for SendContact {
    const ENDPOINT: &'static str = "sendContact";

    fn validate(&self) -> Result<()> {
        require("phone_number", &self.phone_number)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ForwardMessage {
    /// Destination chat, distinct from the source chat.
    pub chat_id: ChatId,
    pub from_chat_id: ChatId,
    pub message_id: MessageId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl Request for ForwardMessage {
    const ENDPOINT: &'static str = "forwardMessage";
}

#[derive(Clone, Debug, Serialize)]
pub struct EditMessageText {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
}

impl Request for EditMessageText {
    const ENDPOINT: &'static str = "editMessageText";

    fn validate(&self) -> Result<()> {
        require("text", &self.text)
    }
}

/// Inline keyboard sent back to the remote side: rows of button labels.
pub type ReplyMarkup = Vec<Vec<String>>;

#[derive(Clone, Debug, Serialize)]
pub struct EditMessageReplyMarkup {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    pub reply_markup: ReplyMarkup,
}

impl Request for EditMessageReplyMarkup {
    const ENDPOINT: &'static str = "editMessageReplyMarkup";
}

#[derive(Clone, Debug, Serialize)]
pub struct EditMessageCaption {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    pub caption: String,
}

impl Request for EditMessageCaption {
    const ENDPOINT: &'static str = "editMessageCaption";
}

#[derive(Clone, Debug, Serialize)]
pub struct DeleteMessage {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

impl Request for DeleteMessage {
    const ENDPOINT: &'static str = "deleteMessage";
}
