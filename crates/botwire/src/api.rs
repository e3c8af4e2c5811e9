//! Generic call layer: typed requests in, typed entities out.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::io::AsyncWrite;

use crate::port::Transport;
use crate::requests::{
    DeleteMessage, EditMessageCaption, EditMessageReplyMarkup, EditMessageText, ForwardMessage,
    Request, SendAudio, SendContact, SendDocument, SendLocation, SendMessage, SendPhoto,
    SendSticker, SendVenue, SendVideo, SendVideoNote, SendVoice,
};
use crate::types::{File, Message};
use crate::{wire, Error, Result};

/// Cheaply clonable handle over an injected [`Transport`].
///
/// Every method is pure delegation: validate, serialize, post, decode. No
/// retry here — that policy belongs to the transport.
#[derive(Clone)]
pub struct Api {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Api")
    }
}

impl Api {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn call<R: Request, T: DeserializeOwned>(&self, req: &R) -> Result<T> {
        req.validate()?;
        let params = wire::to_document(req)?;
        tracing::debug!(endpoint = R::ENDPOINT, "calling remote api");
        let value = self.transport.post(R::ENDPOINT, params).await?;
        wire::from_value(value)
    }

    /// Call an endpoint that answers with a message, wiring this handle into
    /// the decoded entity so its own actions work.
    async fn call_message<R: Request>(&self, req: &R) -> Result<Message> {
        let mut msg: Message = self.call(req).await?;
        msg.attach_api(self);
        Ok(msg)
    }

    pub async fn send_message(&self, req: SendMessage) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn send_audio(&self, req: SendAudio) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn send_document(&self, req: SendDocument) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn send_photo(&self, req: SendPhoto) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn send_sticker(&self, req: SendSticker) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn send_video(&self, req: SendVideo) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn send_video_note(&self, req: SendVideoNote) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn send_voice(&self, req: SendVoice) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn send_location(&self, req: SendLocation) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn send_venue(&self, req: SendVenue) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn send_contact(&self, req: SendContact) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn forward_message(&self, req: ForwardMessage) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn edit_message_text(&self, req: EditMessageText) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn edit_message_caption(&self, req: EditMessageCaption) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn edit_message_reply_markup(&self, req: EditMessageReplyMarkup) -> Result<Message> {
        self.call_message(&req).await
    }

    pub async fn delete_message(&self, req: DeleteMessage) -> Result<bool> {
        self.call(&req).await
    }

    /// Resolve a file id into a [`File`].
    pub async fn get_file(&self, file_id: &str) -> Result<File> {
        if file_id.is_empty() {
            return Err(Error::InvalidArgument("file_id must not be empty".into()));
        }
        let value = self.transport.get_file(file_id).await?;
        wire::from_value(value)
    }

    /// Stream a resolved file into `dest`, returning bytes written.
    pub async fn download_file(
        &self,
        file: &File,
        dest: &mut (dyn AsyncWrite + Send + Unpin),
    ) -> Result<u64> {
        let path = file
            .file_path
            .as_deref()
            .ok_or_else(|| Error::InvalidArgument("file has no file_path".into()))?;
        self.transport.download(path, dest).await
    }
}
