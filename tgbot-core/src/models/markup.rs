//! Reply markups: inline keyboards, custom keyboards, keyboard removal and forced replies.
//!
//! All of these are [`Sendable`](crate::Sendable): the dispatcher encodes them
//! as JSON text in the `reply_markup` form field.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::traits::impl_sendable;

/// Maximum length of `callback_data`, in bytes.
pub const MAX_CALLBACK_DATA_BYTES: usize = 64;

// ============================================================================
// Inline Keyboard
// ============================================================================

/// A button of an inline keyboard. Exactly one action field is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    /// Label text on the button.
    pub text: String,
    /// URL opened when the button is pressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Data sent back in a callback query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    /// Switches to inline mode in a chat picked by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,
    /// Switches to inline mode in the current chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_current_chat: Option<String>,
}

impl InlineKeyboardButton {
    fn labelled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: None,
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
        }
    }

    /// A button that opens `url`.
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::labelled(text)
        }
    }

    /// A button that sends `data` back as a callback query. `data` is 1-64 bytes.
    pub fn callback(
        text: impl Into<String>,
        data: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let data = data.into();
        ValidationError::require_non_empty("callback_data", &data)?;
        if data.len() > MAX_CALLBACK_DATA_BYTES {
            return Err(ValidationError::TooLong {
                field: "callback_data",
                max: MAX_CALLBACK_DATA_BYTES,
                len: data.len(),
            });
        }
        Ok(Self {
            callback_data: Some(data),
            ..Self::labelled(text)
        })
    }

    /// A button that switches the user to inline mode with `query` prefilled.
    pub fn switch_inline(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            switch_inline_query: Some(query.into()),
            ..Self::labelled(text)
        }
    }

    /// Like [`switch_inline`](Self::switch_inline), but stays in the current chat.
    pub fn switch_inline_current_chat(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            switch_inline_query_current_chat: Some(query.into()),
            ..Self::labelled(text)
        }
    }
}

/// An inline keyboard attached to a message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    /// Rows of buttons.
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// Creates a keyboard from rows of buttons.
    pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }

    /// Appends a row.
    pub fn row(mut self, buttons: Vec<InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(buttons);
        self
    }
}

// ============================================================================
// Custom Keyboard
// ============================================================================

/// A button of a custom reply keyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardButton {
    /// Text sent as a message when pressed.
    pub text: String,
    /// Send the user's phone number as a contact when pressed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub request_contact: bool,
    /// Send the user's location when pressed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub request_location: bool,
}

impl KeyboardButton {
    /// A plain text button.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            request_contact: false,
            request_location: false,
        }
    }

    /// Request the user's phone number when pressed.
    pub fn request_contact(mut self) -> Self {
        self.request_contact = true;
        self
    }

    /// Request the user's location when pressed.
    pub fn request_location(mut self) -> Self {
        self.request_location = true;
        self
    }
}

impl From<&str> for KeyboardButton {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// A custom keyboard shown in place of the user's regular keyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    /// Rows of buttons.
    pub keyboard: Vec<Vec<KeyboardButton>>,
    /// Ask clients to resize the keyboard to fit its buttons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,
    /// Hide the keyboard after one use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,
    /// Show the keyboard to specific users only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl ReplyKeyboardMarkup {
    /// Creates a keyboard from rows of buttons.
    pub fn new(keyboard: Vec<Vec<KeyboardButton>>) -> Self {
        Self {
            keyboard,
            resize_keyboard: None,
            one_time_keyboard: None,
            selective: None,
        }
    }

    /// Resize the keyboard vertically to fit its buttons.
    pub fn resized(mut self) -> Self {
        self.resize_keyboard = Some(true);
        self
    }

    /// Hide the keyboard as soon as it has been used.
    pub fn one_time(mut self) -> Self {
        self.one_time_keyboard = Some(true);
        self
    }

    /// Only show the keyboard to mentioned users or the sender of the replied-to message.
    pub fn selective(mut self) -> Self {
        self.selective = Some(true);
        self
    }
}

/// Removes the current custom keyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardHide {
    /// Always true.
    pub hide_keyboard: bool,
    /// Hide for specific users only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl Default for ReplyKeyboardHide {
    fn default() -> Self {
        Self {
            hide_keyboard: true,
            selective: None,
        }
    }
}

/// Forces the client to show a reply interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceReply {
    /// Always true.
    pub force_reply: bool,
    /// Force reply from specific users only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl Default for ForceReply {
    fn default() -> Self {
        Self {
            force_reply: true,
            selective: None,
        }
    }
}

// ============================================================================
// Reply Markup
// ============================================================================

/// Any of the reply markups a send method accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    /// Inline keyboard.
    InlineKeyboard(InlineKeyboardMarkup),
    /// Custom reply keyboard.
    Keyboard(ReplyKeyboardMarkup),
    /// Keyboard removal.
    Hide(ReplyKeyboardHide),
    /// Forced reply.
    ForceReply(ForceReply),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        Self::InlineKeyboard(markup)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        Self::Keyboard(markup)
    }
}

impl From<ReplyKeyboardHide> for ReplyMarkup {
    fn from(markup: ReplyKeyboardHide) -> Self {
        Self::Hide(markup)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(markup: ForceReply) -> Self {
        Self::ForceReply(markup)
    }
}

impl_sendable! {
    InlineKeyboardMarkup => "reply_markup",
    ReplyKeyboardMarkup => "reply_markup",
    ReplyKeyboardHide => "reply_markup",
    ForceReply => "reply_markup",
    ReplyMarkup => "reply_markup",
}
