//! Edits to messages already sent.
//!
//! Edits target either a chat message or an inline message, so the result
//! is the edited [`Message`](tgbot_core::Message) or a plain `true`.

use tgbot_core::{EditedMessage, InlineKeyboardMarkup, ParseMode, ValidationError};

use super::{MAX_TEXT_CHARS, MessageTarget, Method, check_caption};
use crate::params::Params;

// ============================================================================
// editMessageText
// ============================================================================

/// Replaces the text of a message.
#[derive(Debug, Clone, PartialEq)]
pub struct EditMessageText {
    target: MessageTarget,
    text: String,
    parse_mode: Option<ParseMode>,
    disable_web_page_preview: Option<bool>,
    reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageText {
    /// Creates the request. Text must be 1 to 4096 characters.
    pub fn new(target: MessageTarget, text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        ValidationError::require_non_empty("text", &text)?;
        ValidationError::require_max_chars("text", &text, MAX_TEXT_CHARS)?;
        Ok(Self {
            target,
            text,
            parse_mode: None,
            disable_web_page_preview: None,
            reply_markup: None,
        })
    }

    /// Formats the text as Markdown or HTML.
    #[must_use]
    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }

    /// Suppresses link previews.
    #[must_use]
    pub fn disable_web_page_preview(mut self) -> Self {
        self.disable_web_page_preview = Some(true);
        self
    }

    /// Replaces the inline keyboard.
    #[must_use]
    pub fn reply_markup(mut self, markup: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(markup);
        self
    }
}

impl Method for EditMessageText {
    const NAME: &'static str = "editMessageText";
    type Output = EditedMessage;

    fn into_params(self) -> Result<Params, ValidationError> {
        self.target
            .apply(Params::new())
            .with("text", self.text)
            .with_opt("parse_mode", self.parse_mode)
            .with_opt("disable_web_page_preview", self.disable_web_page_preview)
            .with_structured("reply_markup", self.reply_markup.as_ref())
    }
}

// ============================================================================
// editMessageCaption
// ============================================================================

/// Replaces the caption of a media message.
#[derive(Debug, Clone, PartialEq)]
pub struct EditMessageCaption {
    target: MessageTarget,
    caption: Option<String>,
    reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageCaption {
    /// Creates the request. Without a caption, the existing one is removed.
    pub fn new(target: MessageTarget) -> Self {
        Self {
            target,
            caption: None,
            reply_markup: None,
        }
    }

    /// New caption of at most 200 characters.
    pub fn caption(mut self, caption: impl Into<String>) -> Result<Self, ValidationError> {
        let caption = caption.into();
        check_caption(Some(&caption))?;
        self.caption = Some(caption);
        Ok(self)
    }

    /// Replaces the inline keyboard.
    #[must_use]
    pub fn reply_markup(mut self, markup: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(markup);
        self
    }
}

impl Method for EditMessageCaption {
    const NAME: &'static str = "editMessageCaption";
    type Output = EditedMessage;

    fn into_params(self) -> Result<Params, ValidationError> {
        self.target
            .apply(Params::new())
            .with_opt("caption", self.caption)
            .with_structured("reply_markup", self.reply_markup.as_ref())
    }
}

// ============================================================================
// editMessageReplyMarkup
// ============================================================================

/// Replaces or removes the inline keyboard of a message.
#[derive(Debug, Clone, PartialEq)]
pub struct EditMessageReplyMarkup {
    target: MessageTarget,
    reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageReplyMarkup {
    /// Creates the request. Without a markup, the keyboard is removed.
    pub fn new(target: MessageTarget) -> Self {
        Self {
            target,
            reply_markup: None,
        }
    }

    /// New inline keyboard.
    #[must_use]
    pub fn reply_markup(mut self, markup: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(markup);
        self
    }
}

impl Method for EditMessageReplyMarkup {
    const NAME: &'static str = "editMessageReplyMarkup";
    type Output = EditedMessage;

    fn into_params(self) -> Result<Params, ValidationError> {
        self.target
            .apply(Params::new())
            .with_structured("reply_markup", self.reply_markup.as_ref())
    }
}
