//! Typed request types, one per Bot API operation.
//!
//! Each type validates its required arguments when constructed, takes
//! optional arguments through builder setters, and knows how to lower
//! itself into a [`Params`] set. [`Bot::execute`](crate::Bot::execute)
//! dispatches any of them and decodes the `result` into [`Method::Output`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use tgbot_core::{ChatId, ReplyMarkup, ValidationError};

use crate::params::Params;

mod chats;
mod editing;
mod media;
mod messages;
mod queries;
mod updates;

pub use chats::{
    GetChat, GetChatAdministrators, GetChatMember, GetChatMembersCount, GetUserProfilePhotos,
    KickChatMember, LeaveChat, UnbanChatMember,
};
pub use editing::{EditMessageCaption, EditMessageReplyMarkup, EditMessageText};
pub use media::{SendAudio, SendDocument, SendPhoto, SendSticker, SendVideo, SendVoice};
pub use messages::{
    ForwardMessage, SendChatAction, SendContact, SendLocation, SendMessage, SendVenue,
};
pub use queries::{
    AnswerCallbackQuery, AnswerInlineQuery, MAX_INLINE_RESULTS, MAX_NEXT_OFFSET_BYTES,
};
pub use updates::{GetFile, GetMe, GetUpdates};

/// Longest message text the server accepts, in characters.
pub const MAX_TEXT_CHARS: usize = 4096;

/// Longest media caption the server accepts, in characters.
pub const MAX_CAPTION_CHARS: usize = 200;

// ============================================================================
// Method Trait
// ============================================================================

/// A Bot API operation with a typed result.
pub trait Method {
    /// Operation name, as it appears in the request URL.
    const NAME: &'static str;

    /// Parameter that carries a file, for operations that upload one.
    const FILE_PARAM: Option<&'static str> = None;

    /// Decoded type of the response's `result`.
    type Output: DeserializeOwned;

    /// Lowers the request into its parameter set.
    fn into_params(self) -> Result<Params, ValidationError>;

    /// Server-side long-poll duration, added to the request deadline.
    fn long_poll(&self) -> Option<Duration> {
        None
    }
}

// ============================================================================
// Shared Send Options
// ============================================================================

/// Optional arguments every `send*` operation accepts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendOptions {
    /// Deliver silently.
    pub disable_notification: Option<bool>,
    /// Message this one replies to.
    pub reply_to_message_id: Option<i64>,
    /// Keyboard or reply instructions.
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendOptions {
    pub(crate) fn apply(self, params: Params) -> Result<Params, ValidationError> {
        params
            .with_opt("disable_notification", self.disable_notification)
            .with_opt("reply_to_message_id", self.reply_to_message_id)
            .with_structured("reply_markup", self.reply_markup.as_ref())
    }
}

/// Generates the builder setters backed by a `SendOptions` field named `options`.
macro_rules! send_option_setters {
    () => {
        /// Sends the message without a notification sound.
        #[must_use]
        pub fn silent(mut self) -> Self {
            self.options.disable_notification = Some(true);
            self
        }

        /// Sends the message as a reply.
        #[must_use]
        pub fn reply_to(mut self, message_id: i64) -> Self {
            self.options.reply_to_message_id = Some(message_id);
            self
        }

        /// Attaches a keyboard or reply instruction.
        #[must_use]
        pub fn reply_markup(mut self, markup: impl Into<tgbot_core::ReplyMarkup>) -> Self {
            self.options.reply_markup = Some(markup.into());
            self
        }
    };
}

pub(crate) use send_option_setters;

// ============================================================================
// Message Target
// ============================================================================

/// The message an edit applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageTarget {
    /// A message in a chat.
    Chat {
        /// Chat holding the message.
        chat_id: ChatId,
        /// Message id within the chat.
        message_id: i64,
    },
    /// A message sent through inline mode.
    Inline(String),
}

impl MessageTarget {
    /// A message in a chat.
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self::Chat {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    /// An inline message. The id must not be empty.
    pub fn inline(inline_message_id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = inline_message_id.into();
        ValidationError::require_non_empty("inline_message_id", &id)?;
        Ok(Self::Inline(id))
    }

    pub(crate) fn apply(self, params: Params) -> Params {
        match self {
            Self::Chat {
                chat_id,
                message_id,
            } => params
                .with("chat_id", chat_id)
                .with("message_id", message_id),
            Self::Inline(id) => params.with("inline_message_id", id),
        }
    }
}

pub(crate) fn check_caption(caption: Option<&str>) -> Result<(), ValidationError> {
    match caption {
        Some(caption) => ValidationError::require_max_chars("caption", caption, MAX_CAPTION_CHARS),
        None => Ok(()),
    }
}

pub(crate) fn check_limit(limit: Option<u32>) -> Result<(), ValidationError> {
    match limit {
        Some(limit) => ValidationError::require_range("limit", f64::from(limit), 1.0, 100.0),
        None => Ok(()),
    }
}
