//! Incoming updates.

use serde::{Deserialize, Serialize};

use super::chat::User;
use super::media::Location;
use super::message::Message;

/// An incoming update. At most one of the optional payloads is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// Sequential identifier; confirm an update by polling with `offset = update_id + 1`.
    pub update_id: i64,
    /// New incoming message.
    pub message: Option<Message>,
    /// New version of a known message that was edited.
    pub edited_message: Option<Message>,
    /// New channel post.
    pub channel_post: Option<Message>,
    /// New version of a known channel post that was edited.
    pub edited_channel_post: Option<Message>,
    /// New incoming inline query.
    pub inline_query: Option<InlineQuery>,
    /// Inline result chosen by a user.
    pub chosen_inline_result: Option<ChosenInlineResult>,
    /// New incoming callback query.
    pub callback_query: Option<CallbackQuery>,
}

impl Update {
    /// Name of the payload this update carries.
    pub fn kind(&self) -> &'static str {
        if self.message.is_some() {
            "message"
        } else if self.edited_message.is_some() {
            "edited_message"
        } else if self.channel_post.is_some() {
            "channel_post"
        } else if self.edited_channel_post.is_some() {
            "edited_channel_post"
        } else if self.inline_query.is_some() {
            "inline_query"
        } else if self.chosen_inline_result.is_some() {
            "chosen_inline_result"
        } else if self.callback_query.is_some() {
            "callback_query"
        } else {
            "unknown"
        }
    }

    /// The message carried by this update, of whichever message kind.
    pub fn any_message(&self) -> Option<&Message> {
        self.message
            .as_ref()
            .or(self.edited_message.as_ref())
            .or(self.channel_post.as_ref())
            .or(self.edited_channel_post.as_ref())
            .or_else(|| {
                self.callback_query
                    .as_ref()
                    .and_then(|q| q.message.as_deref())
            })
    }

    /// The user that caused this update, if any.
    pub fn sender(&self) -> Option<&User> {
        if let Some(q) = &self.inline_query {
            return Some(&q.from);
        }
        if let Some(r) = &self.chosen_inline_result {
            return Some(&r.from);
        }
        if let Some(q) = &self.callback_query {
            return Some(&q.from);
        }
        self.any_message().and_then(|m| m.from.as_ref())
    }
}

/// An incoming inline query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQuery {
    /// Unique identifier of the query.
    pub id: String,
    /// Sender.
    pub from: User,
    /// Sender location, for bots that request it.
    pub location: Option<Location>,
    /// Text of the query.
    pub query: String,
    /// Offset of the results to return, controlled by the bot.
    pub offset: String,
}

/// An inline query result chosen by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    /// Identifier of the chosen result.
    pub result_id: String,
    /// User that chose the result.
    pub from: User,
    /// Sender location, for bots that request it.
    pub location: Option<Location>,
    /// Identifier of the sent inline message.
    pub inline_message_id: Option<String>,
    /// Query that was used to obtain the result.
    pub query: String,
}

/// An incoming callback query from an inline keyboard button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    /// Unique identifier of the query.
    pub id: String,
    /// Sender.
    pub from: User,
    /// Message with the button that originated the query.
    pub message: Option<Box<Message>>,
    /// Identifier of the inline message with the button.
    pub inline_message_id: Option<String>,
    /// Global identifier of the chat the message was sent to.
    pub chat_instance: Option<String>,
    /// Data associated with the button.
    pub data: Option<String>,
}
