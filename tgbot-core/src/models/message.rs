//! Messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chat::{Chat, User};
use super::media::{
    Audio, Contact, Document, Location, MessageEntity, PhotoSize, Sticker, Venue, Video, Voice,
};

/// A message in a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier inside the chat.
    pub message_id: i64,
    /// Sender; empty for messages sent to channels.
    pub from: Option<User>,
    /// When the message was sent.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,
    /// Conversation the message belongs to.
    pub chat: Chat,
    /// Original sender of a forwarded message.
    pub forward_from: Option<User>,
    /// Original channel of a message forwarded from a channel.
    pub forward_from_chat: Option<Chat>,
    /// When the original of a forwarded message was sent.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub forward_date: Option<DateTime<Utc>>,
    /// The message this one replies to.
    pub reply_to_message: Option<Box<Message>>,
    /// When the message was last edited.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub edit_date: Option<DateTime<Utc>>,
    /// UTF-8 text of a text message.
    pub text: Option<String>,
    /// Special entities in the text.
    #[serde(default)]
    pub entities: Vec<MessageEntity>,
    /// Audio attachment.
    pub audio: Option<Audio>,
    /// Document attachment.
    pub document: Option<Document>,
    /// Photo attachment, in all available sizes.
    #[serde(default)]
    pub photo: Vec<PhotoSize>,
    /// Sticker attachment.
    pub sticker: Option<Sticker>,
    /// Video attachment.
    pub video: Option<Video>,
    /// Voice note attachment.
    pub voice: Option<Voice>,
    /// Caption of a media message.
    pub caption: Option<String>,
    /// Shared contact.
    pub contact: Option<Contact>,
    /// Shared location.
    pub location: Option<Location>,
    /// Shared venue.
    pub venue: Option<Venue>,
    /// Member added to the group.
    pub new_chat_member: Option<User>,
    /// Member removed from the group.
    pub left_chat_member: Option<User>,
    /// New chat title.
    pub new_chat_title: Option<String>,
    /// New chat photo.
    #[serde(default)]
    pub new_chat_photo: Vec<PhotoSize>,
    /// The chat photo was deleted.
    #[serde(default)]
    pub delete_chat_photo: bool,
    /// The group was created.
    #[serde(default)]
    pub group_chat_created: bool,
    /// The group was migrated to a supergroup with this id.
    pub migrate_to_chat_id: Option<i64>,
    /// The supergroup was migrated from a group with this id.
    pub migrate_from_chat_id: Option<i64>,
    /// Pinned message.
    pub pinned_message: Option<Box<Message>>,
}

impl Message {
    /// Short name of the content kind, for logs and CLI output.
    pub fn content_kind(&self) -> &'static str {
        if self.text.is_some() {
            "text"
        } else if !self.photo.is_empty() {
            "photo"
        } else if self.audio.is_some() {
            "audio"
        } else if self.document.is_some() {
            "document"
        } else if self.sticker.is_some() {
            "sticker"
        } else if self.video.is_some() {
            "video"
        } else if self.voice.is_some() {
            "voice"
        } else if self.contact.is_some() {
            "contact"
        } else if self.venue.is_some() {
            "venue"
        } else if self.location.is_some() {
            "location"
        } else {
            "service"
        }
    }

    /// Returns the bot command at the start of the text, without the `@botname` suffix.
    ///
    /// `"/start@my_bot hello"` yields `Some("/start")`.
    pub fn command(&self) -> Option<&str> {
        let text = self.text.as_deref()?;
        let starts_with_command = self
            .entities
            .iter()
            .any(|e| e.kind == "bot_command" && e.offset == 0);
        if !starts_with_command && !text.starts_with('/') {
            return None;
        }
        let word = text.split_whitespace().next()?;
        Some(word.split('@').next().unwrap_or(word))
    }
}

/// Result of an edit: the edited message, or `true` for inline messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditedMessage {
    /// The edited message was sent by the bot.
    Message(Box<Message>),
    /// The edited message was an inline message.
    Inline(bool),
}
