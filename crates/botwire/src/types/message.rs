use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::Api;
use crate::domain::{ChatId, MessageId};
use crate::markup::{self, Flavor};
use crate::requests::{
    DeleteMessage, EditMessageCaption, EditMessageReplyMarkup, EditMessageText, ForwardMessage,
    ReplyMarkup, SendAudio, SendContact, SendDocument, SendLocation, SendMessage, SendPhoto,
    SendSticker, SendVenue, SendVideo, SendVideoNote, SendVoice,
};
use crate::{spans, wire, Error, Result};

use super::{
    Audio, Chat, Contact, Document, EntityKind, Game, Invoice, Location, MessageEntity, PhotoSize,
    Sticker, SuccessfulPayment, User, Venue, Video, VideoNote, Voice,
};

/// The media payload of a message.
///
/// The wire format carries at most one of the corresponding keys. Should a
/// payload carry several, decoding keeps the first in the declaration order
/// below (Audio, Document, Game, Photo, ...).
#[derive(Clone, Debug, PartialEq)]
pub enum Attachment {
    Audio(Audio),
    Document(Document),
    Game(Game),
    Photo(Vec<PhotoSize>),
    Sticker(Sticker),
    Video(Video),
    VideoNote(VideoNote),
    Voice(Voice),
    Contact(Contact),
    Location(Location),
    Venue(Venue),
    Invoice(Invoice),
    SuccessfulPayment(SuccessfulPayment),
}

/// A message in a chat.
///
/// Immutable value object once decoded, except for the API handle attached
/// after construction so the action helpers can reach the transport. The
/// handle never appears in the wire form.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "RawMessage", into = "RawMessage")]
pub struct Message {
    pub message_id: MessageId,
    pub from_user: Option<User>,
    pub date: Option<DateTime<Utc>>,
    pub chat: Option<Chat>,
    pub forward_from: Option<User>,
    pub forward_from_chat: Option<Chat>,
    pub forward_from_message_id: Option<MessageId>,
    pub forward_date: Option<DateTime<Utc>>,
    pub reply_to_message: Option<Box<Message>>,
    pub edit_date: Option<DateTime<Utc>>,
    pub text: Option<String>,
    /// Spans over `text`, in wire order.
    pub entities: Vec<MessageEntity>,
    pub caption: Option<String>,
    pub attachment: Option<Attachment>,
    pub new_chat_members: Vec<User>,
    pub left_chat_member: Option<User>,
    pub new_chat_title: Option<String>,
    pub new_chat_photo: Vec<PhotoSize>,
    pub delete_chat_photo: Option<bool>,
    pub group_chat_created: Option<bool>,
    pub supergroup_chat_created: Option<bool>,
    pub channel_chat_created: Option<bool>,
    pub migrate_to_chat_id: Option<ChatId>,
    pub migrate_from_chat_id: Option<ChatId>,
    pub pinned_message: Option<Box<Message>>,
    pub(crate) api: Option<Api>,
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.message_id == other.message_id && self.chat_ref() == other.chat_ref()
    }
}

impl Eq for Message {}

impl std::hash::Hash for Message {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.message_id.hash(state);
        self.chat_ref().hash(state);
    }
}

impl Message {
    pub fn new(message_id: i64) -> Self {
        Self {
            message_id: MessageId(message_id),
            from_user: None,
            date: None,
            chat: None,
            forward_from: None,
            forward_from_chat: None,
            forward_from_message_id: None,
            forward_date: None,
            reply_to_message: None,
            edit_date: None,
            text: None,
            entities: Vec::new(),
            caption: None,
            attachment: None,
            new_chat_members: Vec::new(),
            left_chat_member: None,
            new_chat_title: None,
            new_chat_photo: Vec::new(),
            delete_chat_photo: None,
            group_chat_created: None,
            supergroup_chat_created: None,
            channel_chat_created: None,
            migrate_to_chat_id: None,
            migrate_from_chat_id: None,
            pinned_message: None,
            api: None,
        }
    }

    /// Decode a wire document and wire the API handle into the result (and
    /// its nested messages) so the action helpers can be used directly.
    pub fn from_document(doc: wire::Document, api: Api) -> Result<Self> {
        let mut msg: Message = wire::from_document(doc)?;
        msg.attach_api(&api);
        Ok(msg)
    }

    pub fn to_document(&self) -> Result<wire::Document> {
        wire::to_document(self)
    }

    pub(crate) fn attach_api(&mut self, api: &Api) {
        self.api = Some(api.clone());
        if let Some(reply) = self.reply_to_message.as_mut() {
            reply.attach_api(api);
        }
        if let Some(pinned) = self.pinned_message.as_mut() {
            pinned.attach_api(api);
        }
    }

    fn chat_ref(&self) -> Option<ChatId> {
        self.chat.as_ref().map(|c| c.id)
    }

    /// Id of the chat this message belongs to.
    pub fn chat_id(&self) -> Result<ChatId> {
        self.chat_ref()
            .ok_or_else(|| Error::InvalidArgument("message has no chat".into()))
    }

    fn api(&self) -> Result<&Api> {
        self.api
            .as_ref()
            .ok_or_else(|| Error::InvalidArgument("message has no api handle attached".into()))
    }

    fn text_ref(&self) -> Result<&str> {
        self.text
            .as_deref()
            .ok_or_else(|| Error::InvalidArgument("message has no text".into()))
    }

    /// Resolve one of this message's entities against its text.
    pub fn parse_entity(&self, entity: &MessageEntity) -> Result<String> {
        spans::parse_entity(self.text_ref()?, entity)
    }

    /// Resolve all entities, optionally only those of one kind.
    pub fn parse_entities(
        &self,
        filter: Option<EntityKind>,
    ) -> Result<HashMap<MessageEntity, String>> {
        spans::parse_entities(self.text_ref()?, &self.entities, filter)
    }

    /// The message text with entities rendered as HTML.
    pub fn text_html(&self) -> Result<String> {
        markup::render(self.text_ref()?, &self.entities, Flavor::Html)
    }

    /// The message text with entities rendered as Markdown.
    pub fn text_markdown(&self) -> Result<String> {
        markup::render(self.text_ref()?, &self.entities, Flavor::Markdown)
    }

    fn reply_target(&self, quote: bool) -> Option<MessageId> {
        quote.then_some(self.message_id)
    }

    /// Send a text message to this message's chat. With `quote` the new
    /// message replies to this one; without, no reply target is sent.
    pub async fn reply_text(&self, text: &str, quote: bool) -> Result<Message> {
        let mut req = SendMessage::new(self.chat_id()?, text);
        req.reply_to_message_id = self.reply_target(quote);
        self.api()?.send_message(req).await
    }

    pub async fn reply_audio(&self, audio: &str, quote: bool) -> Result<Message> {
        let mut req = SendAudio::new(self.chat_id()?, audio);
        req.reply_to_message_id = self.reply_target(quote);
        self.api()?.send_audio(req).await
    }

    pub async fn reply_document(&self, document: &str, quote: bool) -> Result<Message> {
        let mut req = SendDocument::new(self.chat_id()?, document);
        req.reply_to_message_id = self.reply_target(quote);
        self.api()?.send_document(req).await
    }

    pub async fn reply_photo(&self, photo: &str, quote: bool) -> Result<Message> {
        let mut req = SendPhoto::new(self.chat_id()?, photo);
        req.reply_to_message_id = self.reply_target(quote);
        self.api()?.send_photo(req).await
    }

    pub async fn reply_sticker(&self, sticker: &str, quote: bool) -> Result<Message> {
        let mut req = SendSticker::new(self.chat_id()?, sticker);
        req.reply_to_message_id = self.reply_target(quote);
        self.api()?.send_sticker(req).await
    }

    pub async fn reply_video(&self, video: &str, quote: bool) -> Result<Message> {
        let mut req = SendVideo::new(self.chat_id()?, video);
        req.reply_to_message_id = self.reply_target(quote);
        self.api()?.send_video(req).await
    }

    pub async fn reply_video_note(&self, video_note: &str, quote: bool) -> Result<Message> {
        let mut req = SendVideoNote::new(self.chat_id()?, video_note);
        req.reply_to_message_id = self.reply_target(quote);
        self.api()?.send_video_note(req).await
    }

    pub async fn reply_voice(&self, voice: &str, quote: bool) -> Result<Message> {
        let mut req = SendVoice::new(self.chat_id()?, voice);
        req.reply_to_message_id = self.reply_target(quote);
        self.api()?.send_voice(req).await
    }

    pub async fn reply_location(&self, location: &Location, quote: bool) -> Result<Message> {
        let mut req = SendLocation::new(self.chat_id()?, location.latitude, location.longitude);
        req.reply_to_message_id = self.reply_target(quote);
        self.api()?.send_location(req).await
    }

    pub async fn reply_venue(&self, venue: &Venue, quote: bool) -> Result<Message> {
        let mut req = SendVenue::new(
            self.chat_id()?,
            venue.location.latitude,
            venue.location.longitude,
            venue.title.clone(),
            venue.address.clone(),
        );
        req.foursquare_id = venue.foursquare_id.clone();
        req.reply_to_message_id = self.reply_target(quote);
        self.api()?.send_venue(req).await
    }

    pub async fn reply_contact(&self, contact: &Contact, quote: bool) -> Result<Message> {
        let mut req = SendContact::new(
            self.chat_id()?,
            contact.phone_number.clone(),
            contact.first_name.clone(),
        );
        req.last_name = contact.last_name.clone();
        req.reply_to_message_id = self.reply_target(quote);
        self.api()?.send_contact(req).await
    }

    /// Forward this message to another chat.
    pub async fn forward(&self, to: ChatId, disable_notification: bool) -> Result<Message> {
        let req = ForwardMessage {
            chat_id: to,
            from_chat_id: self.chat_id()?,
            message_id: self.message_id,
            disable_notification: disable_notification.then_some(true),
        };
        self.api()?.forward_message(req).await
    }

    /// Replace this message's text.
    pub async fn edit_text(&self, text: &str) -> Result<Message> {
        let req = EditMessageText {
            chat_id: self.chat_id()?,
            message_id: self.message_id,
            text: text.into(),
            parse_mode: None,
        };
        self.api()?.edit_message_text(req).await
    }

    /// Replace this message's media caption.
    pub async fn edit_caption(&self, caption: &str) -> Result<Message> {
        let req = EditMessageCaption {
            chat_id: self.chat_id()?,
            message_id: self.message_id,
            caption: caption.into(),
        };
        self.api()?.edit_message_caption(req).await
    }

    /// Replace this message's inline keyboard.
    pub async fn edit_reply_markup(&self, reply_markup: ReplyMarkup) -> Result<Message> {
        let req = EditMessageReplyMarkup {
            chat_id: self.chat_id()?,
            message_id: self.message_id,
            reply_markup,
        };
        self.api()?.edit_message_reply_markup(req).await
    }

    /// Delete this message.
    pub async fn delete(&self) -> Result<bool> {
        let req = DeleteMessage {
            chat_id: self.chat_id()?,
            message_id: self.message_id,
        };
        self.api()?.delete_message(req).await
    }
}

/// Wire-shaped mirror of [`Message`]: every mutually exclusive attachment
/// key is its own field, and the API handle does not exist.
#[derive(Clone, Serialize, Deserialize)]
struct RawMessage {
    message_id: MessageId,
    #[serde(rename = "from", skip_serializing_if = "Option::is_none")]
    from_user: Option<User>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chat: Option<Chat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    forward_from: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    forward_from_chat: Option<Chat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    forward_from_message_id: Option<MessageId>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    forward_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to_message: Option<Box<Message>>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    edit_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    audio: Option<Audio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    game: Option<Game>,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo: Option<Vec<PhotoSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sticker: Option<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    video: Option<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    video_note: Option<VideoNote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice: Option<Voice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    venue: Option<Venue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invoice: Option<Invoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    successful_payment: Option<SuccessfulPayment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_chat_members: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    left_chat_member: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_chat_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_chat_photo: Option<Vec<PhotoSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delete_chat_photo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group_chat_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supergroup_chat_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel_chat_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    migrate_to_chat_id: Option<ChatId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    migrate_from_chat_id: Option<ChatId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pinned_message: Option<Box<Message>>,
}

impl From<RawMessage> for Message {
    fn from(raw: RawMessage) -> Self {
        // Fixed priority order; see `Attachment`.
        let attachment = if let Some(audio) = raw.audio {
            Some(Attachment::Audio(audio))
        } else if let Some(document) = raw.document {
            Some(Attachment::Document(document))
        } else if let Some(game) = raw.game {
            Some(Attachment::Game(game))
        } else if let Some(photo) = raw.photo {
            Some(Attachment::Photo(photo))
        } else if let Some(sticker) = raw.sticker {
            Some(Attachment::Sticker(sticker))
        } else if let Some(video) = raw.video {
            Some(Attachment::Video(video))
        } else if let Some(video_note) = raw.video_note {
            Some(Attachment::VideoNote(video_note))
        } else if let Some(voice) = raw.voice {
            Some(Attachment::Voice(voice))
        } else if let Some(contact) = raw.contact {
            Some(Attachment::Contact(contact))
        } else if let Some(location) = raw.location {
            Some(Attachment::Location(location))
        } else if let Some(venue) = raw.venue {
            Some(Attachment::Venue(venue))
        } else if let Some(invoice) = raw.invoice {
            Some(Attachment::Invoice(invoice))
        } else {
            raw.successful_payment.map(Attachment::SuccessfulPayment)
        };

        Message {
            message_id: raw.message_id,
            from_user: raw.from_user,
            date: raw.date,
            chat: raw.chat,
            forward_from: raw.forward_from,
            forward_from_chat: raw.forward_from_chat,
            forward_from_message_id: raw.forward_from_message_id,
            forward_date: raw.forward_date,
            reply_to_message: raw.reply_to_message,
            edit_date: raw.edit_date,
            text: raw.text,
            entities: raw.entities.unwrap_or_default(),
            caption: raw.caption,
            attachment,
            new_chat_members: raw.new_chat_members.unwrap_or_default(),
            left_chat_member: raw.left_chat_member,
            new_chat_title: raw.new_chat_title,
            new_chat_photo: raw.new_chat_photo.unwrap_or_default(),
            delete_chat_photo: raw.delete_chat_photo,
            group_chat_created: raw.group_chat_created,
            supergroup_chat_created: raw.supergroup_chat_created,
            channel_chat_created: raw.channel_chat_created,
            migrate_to_chat_id: raw.migrate_to_chat_id,
            migrate_from_chat_id: raw.migrate_from_chat_id,
            pinned_message: raw.pinned_message,
            api: None,
        }
    }
}

impl From<Message> for RawMessage {
    fn from(msg: Message) -> Self {
        let mut raw = RawMessage {
            message_id: msg.message_id,
            from_user: msg.from_user,
            date: msg.date,
            chat: msg.chat,
            forward_from: msg.forward_from,
            forward_from_chat: msg.forward_from_chat,
            forward_from_message_id: msg.forward_from_message_id,
            forward_date: msg.forward_date,
            reply_to_message: msg.reply_to_message,
            edit_date: msg.edit_date,
            text: msg.text,
            entities: (!msg.entities.is_empty()).then_some(msg.entities),
            caption: msg.caption,
            audio: None,
            document: None,
            game: None,
            photo: None,
            sticker: None,
            video: None,
            video_note: None,
            voice: None,
            contact: None,
            location: None,
            venue: None,
            invoice: None,
            successful_payment: None,
            new_chat_members: (!msg.new_chat_members.is_empty()).then_some(msg.new_chat_members),
            left_chat_member: msg.left_chat_member,
            new_chat_title: msg.new_chat_title,
            new_chat_photo: (!msg.new_chat_photo.is_empty()).then_some(msg.new_chat_photo),
            delete_chat_photo: msg.delete_chat_photo,
            group_chat_created: msg.group_chat_created,
            supergroup_chat_created: msg.supergroup_chat_created,
            channel_chat_created: msg.channel_chat_created,
            migrate_to_chat_id: msg.migrate_to_chat_id,
            migrate_from_chat_id: msg.migrate_from_chat_id,
            pinned_message: msg.pinned_message,
        };
        match msg.attachment {
            Some(Attachment::Audio(audio)) => raw.audio = Some(audio),
            Some(Attachment::Document(document)) => raw.document = Some(document),
            Some(Attachment::Game(game)) => raw.game = Some(game),
            Some(Attachment::Photo(photo)) => raw.photo = Some(photo),
            Some(Attachment::Sticker(sticker)) => raw.sticker = Some(sticker),
            Some(Attachment::Video(video)) => raw.video = Some(video),
            Some(Attachment::VideoNote(video_note)) => raw.video_note = Some(video_note),
            Some(Attachment::Voice(voice)) => raw.voice = Some(voice),
            Some(Attachment::Contact(contact)) => raw.contact = Some(contact),
            Some(Attachment::Location(location)) => raw.location = Some(location),
            Some(Attachment::Venue(venue)) => raw.venue = Some(venue),
            Some(Attachment::Invoice(invoice)) => raw.invoice = Some(invoice),
            Some(Attachment::SuccessfulPayment(payment)) => raw.successful_payment = Some(payment),
            None => {}
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::TimeZone;
    use serde_json::{json, Value};
    use tokio::io::AsyncWrite;

    use super::*;
    use crate::port::Transport;
    use crate::types::ChatKind;
    use crate::wire::Document as WireDoc;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut h = DefaultHasher::new();
        value.hash(&mut h);
        h.finish()
    }

    /// Test double for the transport port: records every call and answers
    /// with a canned payload.
    struct RecordingTransport {
        calls: Mutex<Vec<(String, WireDoc)>>,
        response: Value,
    }

    impl RecordingTransport {
        fn new(response: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response,
            })
        }

        fn calls(&self) -> Vec<(String, WireDoc)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn post(&self, endpoint: &str, params: WireDoc) -> Result<Value> {
            self.calls.lock().unwrap().push((endpoint.into(), params));
            Ok(self.response.clone())
        }

        async fn get_file(&self, _file_id: &str) -> Result<Value> {
            Err(Error::Remote("not under test".into()))
        }

        async fn download(
            &self,
            _file_path: &str,
            _dest: &mut (dyn AsyncWrite + Send + Unpin),
        ) -> Result<u64> {
            Err(Error::Remote("not under test".into()))
        }
    }

    /// Transport that rejects everything, for error-propagation tests.
    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn post(&self, _endpoint: &str, _params: WireDoc) -> Result<Value> {
            Err(Error::Remote("chat not found".into()))
        }

        async fn get_file(&self, _file_id: &str) -> Result<Value> {
            Err(Error::Remote("chat not found".into()))
        }

        async fn download(
            &self,
            _file_path: &str,
            _dest: &mut (dyn AsyncWrite + Send + Unpin),
        ) -> Result<u64> {
            Err(Error::Remote("chat not found".into()))
        }
    }

    fn incoming() -> (Message, Arc<RecordingTransport>) {
        let transport = RecordingTransport::new(json!({
            "message_id": 2,
            "chat": {"id": 3, "type": "private"},
        }));
        let mut msg = Message::new(1);
        msg.from_user = Some(User::new(2, "testuser"));
        msg.chat = Some(Chat::new(3, ChatKind::Private));
        msg.attach_api(&Api::new(transport.clone()));
        (msg, transport)
    }

    fn entity_fixture() -> Message {
        let mut msg = Message::new(1);
        msg.text = Some("Test for <bold, ita_lic, code, links and pre.".into());
        msg.entities = vec![
            MessageEntity::new(EntityKind::Bold, 10, 4),
            MessageEntity::new(EntityKind::Italic, 16, 7),
            MessageEntity::new(EntityKind::Code, 25, 4),
            MessageEntity::text_link(31, 5, "http://github.com/"),
            MessageEntity::new(EntityKind::Pre, 41, 3),
        ];
        msg
    }

    #[test]
    fn equality_follows_message_id_and_chat() {
        let mut a = Message::new(1);
        a.from_user = Some(User::new(1, ""));
        let mut b = Message::new(1);
        b.from_user = Some(User::new(1, ""));
        let mut c = Message::new(1);
        c.from_user = Some(User::new(0, ""));
        let mut d = Message::new(0);
        d.from_user = Some(User::new(1, ""));

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        // The sender is not part of the natural key.
        assert_eq!(a, c);
        assert_eq!(hash_of(&a), hash_of(&c));

        assert_ne!(a, d);
        assert_ne!(hash_of(&a), hash_of(&d));

        let mut elsewhere = Message::new(1);
        elsewhere.chat = Some(Chat::new(99, ChatKind::Group));
        assert_ne!(a, elsewhere);
    }

    #[test]
    fn chat_id_comes_from_the_chat() {
        let (msg, _) = incoming();
        assert_eq!(msg.chat_id().unwrap(), ChatId(3));

        let bare = Message::new(1);
        assert!(matches!(
            bare.chat_id().unwrap_err(),
            Error::InvalidArgument(_)
        ));
    }

    #[test]
    fn decodes_metadata_and_round_trips() {
        let date = chrono::Utc.timestamp_opt(1_500_000_000, 0).unwrap();
        let doc = wire::to_document(&json!({
            "message_id": 1,
            "from": {"id": 2, "first_name": "testuser"},
            "date": 1_500_000_000,
            "chat": {"id": 3, "type": "private"},
            "forward_from": {"id": 99, "first_name": "forward_user"},
            "forward_date": 1_500_000_000,
            "reply_to_message": {"message_id": 50},
            "edit_date": 1_500_000_000,
            "new_chat_members": [{"id": 55, "first_name": "new_user"}],
            "migrate_to_chat_id": -12345,
        }))
        .unwrap();

        let msg: Message = wire::from_document(doc.clone()).unwrap();
        assert_eq!(msg.message_id, MessageId(1));
        assert_eq!(msg.date, Some(date));
        assert_eq!(msg.forward_from.as_ref().unwrap().id.0, 99);
        assert_eq!(msg.forward_date, Some(date));
        assert_eq!(msg.reply_to_message.as_ref().unwrap().message_id, MessageId(50));
        assert_eq!(msg.edit_date, Some(date));
        assert_eq!(msg.new_chat_members.len(), 1);
        assert_eq!(msg.migrate_to_chat_id, Some(ChatId(-12345)));

        assert_eq!(msg.to_document().unwrap(), doc);
    }

    #[test]
    fn decodes_each_attachment_under_its_wire_key() {
        let cases = vec![
            ("audio", json!({"file_id": "audio_id", "duration": 12})),
            ("document", json!({"file_id": "document_id"})),
            ("photo", json!([{"file_id": "photo_id", "width": 50, "height": 50}])),
            ("sticker", json!({"file_id": "sticker_id", "width": 50, "height": 50})),
            ("video", json!({"file_id": "video_id", "width": 12, "height": 12, "duration": 12})),
            ("voice", json!({"file_id": "voice_id", "duration": 5})),
            ("video_note", json!({"file_id": "video_note_id", "length": 20, "duration": 12})),
            ("contact", json!({"phone_number": "phone_number", "first_name": "contact_name"})),
            ("location", json!({"longitude": -23.691288, "latitude": 46.788279})),
            ("venue", json!({
                "location": {"longitude": -23.691288, "latitude": 46.788279},
                "title": "some place",
                "address": "right here",
            })),
            ("game", json!({
                "title": "my_game",
                "description": "just my game",
                "photo": [{"file_id": "game_photo_id", "width": 30, "height": 30}],
            })),
            ("invoice", json!({
                "title": "my invoice",
                "description": "invoice",
                "start_parameter": "start",
                "currency": "EUR",
                "total_amount": 243,
            })),
            ("successful_payment", json!({
                "currency": "EUR",
                "total_amount": 243,
                "invoice_payload": "payload",
                "telegram_payment_charge_id": "charge_id",
                "provider_payment_charge_id": "provider_id",
            })),
        ];

        for (key, payload) in cases {
            let mut doc = wire::to_document(&json!({
                "message_id": 1,
                "chat": {"id": 3, "type": "private"},
            }))
            .unwrap();
            doc.insert(key.to_string(), payload);

            let msg: Message = wire::from_document(doc.clone()).unwrap();
            assert!(msg.attachment.is_some(), "no attachment decoded for {key}");

            let back = msg.to_document().unwrap();
            assert_eq!(back, doc, "round trip changed the document for {key}");
        }
    }

    #[test]
    fn attachment_priority_is_deterministic() {
        let doc = wire::to_document(&json!({
            "message_id": 1,
            "voice": {"file_id": "voice_id", "duration": 5},
            "audio": {"file_id": "audio_id", "duration": 12},
        }))
        .unwrap();

        let msg: Message = wire::from_document(doc).unwrap();
        match msg.attachment {
            Some(Attachment::Audio(audio)) => assert_eq!(audio.file_id, "audio_id"),
            other => panic!("expected the audio to win, got {other:?}"),
        }
    }

    #[test]
    fn malformed_nested_entities_fail_the_whole_decode() {
        let doc = wire::to_document(&json!({
            "message_id": 1,
            "audio": {"duration": 12},
        }))
        .unwrap();
        assert!(wire::from_document::<Message>(doc).is_err());
    }

    #[test]
    fn from_document_attaches_the_handle_recursively() {
        let transport = RecordingTransport::new(json!(true));
        let doc = wire::to_document(&json!({
            "message_id": 1,
            "chat": {"id": 3, "type": "private"},
            "reply_to_message": {"message_id": 50},
        }))
        .unwrap();

        let msg = Message::from_document(doc, Api::new(transport)).unwrap();
        assert!(msg.api.is_some());
        assert!(msg.reply_to_message.unwrap().api.is_some());
    }

    #[test]
    fn the_api_handle_is_never_serialized() {
        let (msg, _) = incoming();
        let doc = msg.to_document().unwrap();
        let keys: Vec<&str> = doc.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["chat", "from", "message_id"]);
    }

    #[test]
    fn entities_keep_their_wire_order() {
        let doc = wire::to_document(&json!({
            "message_id": 1,
            "text": "Test for <bold, ita_lic",
            "entities": [
                {"type": "italic", "offset": 16, "length": 7},
                {"type": "bold", "offset": 10, "length": 4},
            ],
        }))
        .unwrap();

        let msg: Message = wire::from_document(doc.clone()).unwrap();
        assert_eq!(msg.entities[0].kind, EntityKind::Italic);
        assert_eq!(msg.entities[1].kind, EntityKind::Bold);
        assert_eq!(msg.to_document().unwrap(), doc);
    }

    #[test]
    fn parse_entities_resolves_spans_over_the_text() {
        let msg = entity_fixture();
        let bold = MessageEntity::new(EntityKind::Bold, 10, 4);
        assert_eq!(msg.parse_entity(&bold).unwrap(), "bold");

        let only_bold = msg.parse_entities(Some(EntityKind::Bold)).unwrap();
        assert_eq!(only_bold.len(), 1);
        assert_eq!(only_bold[&bold], "bold");

        let all = msg.parse_entities(None).unwrap();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn renders_html_and_markdown() {
        let msg = entity_fixture();
        assert_eq!(
            msg.text_html().unwrap(),
            "Test for &lt;<b>bold</b>, <i>ita_lic</i>, <code>code</code>, \
             <a href=\"http://github.com/\">links</a> and <pre>pre</pre>."
        );
        assert_eq!(
            msg.text_markdown().unwrap(),
            "Test for <*bold*, _ita\\_lic_, `code`, [links](http://github.com/) and ```pre```."
        );
    }

    #[tokio::test]
    async fn reply_text_targets_this_chat_and_quotes_by_request() {
        let (msg, transport) = incoming();

        let sent = msg.reply_text("test", true).await.unwrap();
        assert_eq!(sent.message_id, MessageId(2));

        msg.reply_text("test", false).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "sendMessage");
        assert_eq!(calls[0].1["chat_id"], json!(3));
        assert_eq!(calls[0].1["text"], json!("test"));
        assert_eq!(calls[0].1["reply_to_message_id"], json!(1));
        assert!(!calls[1].1.contains_key("reply_to_message_id"));
    }

    #[tokio::test]
    async fn media_replies_carry_the_file_id() {
        let (msg, transport) = incoming();
        msg.reply_audio("test_audio", true).await.unwrap();
        msg.reply_photo("test_photo", false).await.unwrap();
        msg.reply_sticker("test_sticker", false).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].0, "sendAudio");
        assert_eq!(calls[0].1["audio"], json!("test_audio"));
        assert_eq!(calls[0].1["reply_to_message_id"], json!(1));
        assert_eq!(calls[1].0, "sendPhoto");
        assert_eq!(calls[1].1["photo"], json!("test_photo"));
        assert_eq!(calls[2].0, "sendSticker");
        assert_eq!(calls[2].1["sticker"], json!("test_sticker"));
    }

    #[tokio::test]
    async fn venue_and_contact_replies_expand_their_fields() {
        let (msg, transport) = incoming();
        let venue = Venue::new(
            Location::new(-23.691288, 46.788279),
            "some place",
            "right here",
        );
        msg.reply_venue(&venue, true).await.unwrap();
        msg.reply_contact(&Contact::new("phone_number", "contact_name"), false)
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].0, "sendVenue");
        assert_eq!(calls[0].1["title"], json!("some place"));
        assert_eq!(calls[0].1["longitude"], json!(-23.691288));
        assert_eq!(calls[1].0, "sendContact");
        assert_eq!(calls[1].1["phone_number"], json!("phone_number"));
    }

    #[tokio::test]
    async fn forward_names_source_and_destination() {
        let (msg, transport) = incoming();
        msg.forward(ChatId(123456), true).await.unwrap();

        let (endpoint, params) = &transport.calls()[0];
        assert_eq!(endpoint, "forwardMessage");
        assert_eq!(params["chat_id"], json!(123456));
        assert_eq!(params["from_chat_id"], json!(3));
        assert_eq!(params["message_id"], json!(1));
        assert_eq!(params["disable_notification"], json!(true));
    }

    #[tokio::test]
    async fn edits_and_delete_address_this_message() {
        let transport = RecordingTransport::new(json!({
            "message_id": 2,
            "chat": {"id": 3, "type": "private"},
        }));
        let (mut msg, _) = incoming();
        msg.attach_api(&Api::new(transport.clone()));

        msg.edit_text("test").await.unwrap();
        msg.edit_caption("new caption").await.unwrap();
        msg.edit_reply_markup(vec![vec!["1".into(), "2".into()]])
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].0, "editMessageText");
        assert_eq!(calls[0].1["chat_id"], json!(3));
        assert_eq!(calls[0].1["message_id"], json!(1));
        assert_eq!(calls[0].1["text"], json!("test"));
        assert_eq!(calls[1].0, "editMessageCaption");
        assert_eq!(calls[1].1["caption"], json!("new caption"));
        assert_eq!(calls[2].0, "editMessageReplyMarkup");
        assert_eq!(calls[2].1["chat_id"], json!(3));
        assert_eq!(calls[2].1["message_id"], json!(1));
        assert_eq!(calls[2].1["reply_markup"], json!([["1", "2"]]));

        let deleting = RecordingTransport::new(json!(true));
        msg.attach_api(&Api::new(deleting.clone()));
        assert!(msg.delete().await.unwrap());
        assert_eq!(deleting.calls()[0].0, "deleteMessage");
    }

    #[tokio::test]
    async fn missing_required_fields_fail_before_the_transport() {
        let (msg, transport) = incoming();

        // Empty file id never reaches the wire.
        let err = msg.reply_audio("", true).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(transport.calls().is_empty());

        // No chat, no call.
        let mut bare = Message::new(1);
        bare.attach_api(&Api::new(transport.clone()));
        let err = bare.reply_text("test", true).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(transport.calls().is_empty());

        // No api handle either.
        let mut orphan = entity_fixture();
        orphan.chat = Some(Chat::new(3, ChatKind::Private));
        assert!(matches!(
            orphan.delete().await.unwrap_err(),
            Error::InvalidArgument(_)
        ));
    }

    #[tokio::test]
    async fn remote_failures_propagate_unchanged() {
        let mut msg = Message::new(1);
        msg.chat = Some(Chat::new(3, ChatKind::Private));
        msg.attach_api(&Api::new(Arc::new(FailingTransport)));

        match msg.reply_text("test", true).await.unwrap_err() {
            Error::Remote(reason) => assert_eq!(reason, "chat not found"),
            other => panic!("expected a remote error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn decoded_replies_can_act_on_their_own() {
        let (msg, transport) = incoming();
        let sent = msg.reply_text("test", true).await.unwrap();

        // The response got the api handle attached during decoding.
        sent.edit_text("follow-up").await.unwrap();
        assert_eq!(transport.calls()[1].0, "editMessageText");
    }
}
