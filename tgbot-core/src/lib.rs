// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # tgbot Core
//!
//! Core types, models, and traits for the tgbot Telegram Bot API client.
//!
//! This crate holds everything that does not need a network stack:
//!
//! - Domain models for API responses (users, chats, messages, updates)
//! - Structured request values (reply markups, inline query results)
//! - The [`Sendable`] capability used to JSON-encode structured parameters
//! - [`ValidationError`], raised when a request is built with bad arguments
//!
//! ## Key Types
//!
//! ### Responses
//! - [`Update`] - One incoming update from `getUpdates`
//! - [`Message`] - A chat message with its attachments
//! - [`User`], [`Chat`], [`ChatMember`] - Identities and membership
//!
//! ### Requests
//! - [`ChatId`] - Numeric chat id or `@channelusername`
//! - [`ReplyMarkup`] - Inline keyboards, custom keyboards, keyboard removal, forced replies
//! - [`InlineQueryResult`] - Results for `answerInlineQuery`
//! - [`InputFile`] - Local bytes to upload

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::ValidationError;

// Re-export all model types
pub use models::{
    // Users & chats
    Chat,
    ChatMember,
    ChatMemberStatus,
    ChatType,
    User,
    UserProfilePhotos,
    // Messages
    Audio,
    Contact,
    Document,
    EditedMessage,
    File,
    Location,
    Message,
    MessageEntity,
    PhotoSize,
    Sticker,
    Venue,
    Video,
    Voice,
    // Updates
    CallbackQuery,
    ChosenInlineResult,
    InlineQuery,
    Update,
    // Request values
    ChatAction,
    ChatId,
    ForceReply,
    InlineKeyboardButton,
    InlineKeyboardMarkup,
    InlineQueryResult,
    InlineQueryResultArticle,
    InlineQueryResultContact,
    InlineQueryResultGif,
    InlineQueryResultLocation,
    InlineQueryResultPhoto,
    InlineQueryResultVideo,
    InputFile,
    InputMessageContent,
    KeyboardButton,
    ParseMode,
    ReplyKeyboardHide,
    ReplyKeyboardMarkup,
    ReplyMarkup,
};

// Re-export traits
pub use traits::Sendable;
