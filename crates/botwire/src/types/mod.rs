//! Typed entities mirroring the wire-format JSON objects.
//!
//! Entities are value objects with "weak" equality: two instances are equal
//! iff their natural keys match, regardless of other fields. `natural_key!`
//! spells out the key fields per entity.

macro_rules! natural_key {
    ($ty:ty => $($field:ident),+) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $(self.$field == other.$field)&&+
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $(self.$field.hash(state);)+
            }
        }
    };
}

mod audio;
mod chat;
mod contact;
mod document;
mod file;
mod game;
mod invoice;
mod location;
mod message;
mod message_entity;
mod payment;
mod photo_size;
mod sticker;
mod update;
mod user;
mod venue;
mod video;
mod video_note;
mod voice;

pub use audio::Audio;
pub use chat::{Chat, ChatKind};
pub use contact::Contact;
pub use document::Document;
pub use file::File;
pub use game::Game;
pub use invoice::Invoice;
pub use location::Location;
pub use message::{Attachment, Message};
pub use message_entity::{EntityKind, MessageEntity};
pub use payment::SuccessfulPayment;
pub use photo_size::PhotoSize;
pub use sticker::Sticker;
pub use update::Update;
pub use user::User;
pub use venue::Venue;
pub use video::Video;
pub use video_note::VideoNote;
pub use voice::Voice;
