//! Domain models for tgbot.
//!
//! Response-side types mirror the objects the Bot API returns; unknown fields
//! are ignored so newer server versions keep deserializing. Request-side types
//! build the structured parameters that travel as JSON text.
//!
//! ## Submodules
//!
//! - [`chat`] - Users, chats, membership
//! - [`media`] - Photos, audio, documents, files, entities
//! - [`message`] - Messages and edit results
//! - [`update`] - Updates, inline queries, callback queries
//! - [`markup`] - Reply markups (request side)
//! - [`inline`] - Inline query results (request side)
//! - [`input`] - Chat ids, parse modes, chat actions, uploads (request side)

mod chat;
mod inline;
mod input;
mod markup;
mod media;
mod message;
mod update;

pub use chat::{Chat, ChatMember, ChatMemberStatus, ChatType, User, UserProfilePhotos};
pub use inline::{
    InlineQueryResult, InlineQueryResultArticle, InlineQueryResultContact, InlineQueryResultGif,
    InlineQueryResultLocation, InlineQueryResultPhoto, InlineQueryResultVideo,
    InputMessageContent, MAX_RESULT_ID_BYTES,
};
pub use input::{ChatAction, ChatId, InputFile, ParseMode};
pub use markup::{
    ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardHide,
    ReplyKeyboardMarkup, ReplyMarkup, MAX_CALLBACK_DATA_BYTES,
};
pub use media::{
    Audio, Contact, Document, File, Location, MessageEntity, PhotoSize, Sticker, Venue, Video,
    Voice,
};
pub use message::{EditedMessage, Message};
pub use update::{CallbackQuery, ChosenInlineResult, InlineQuery, Update};

#[cfg(test)]
mod serde_tests;
