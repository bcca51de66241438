//! Inline query results and the message content they send.

use serde::{Deserialize, Serialize};

use super::input::ParseMode;
use super::markup::InlineKeyboardMarkup;
use crate::error::ValidationError;
use crate::traits::impl_sendable;

/// Maximum length of an inline result id, in bytes.
pub const MAX_RESULT_ID_BYTES: usize = 64;

fn validate_result_id(id: &str) -> Result<(), ValidationError> {
    ValidationError::require_non_empty("id", id)?;
    if id.len() > MAX_RESULT_ID_BYTES {
        return Err(ValidationError::TooLong {
            field: "id",
            max: MAX_RESULT_ID_BYTES,
            len: id.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Input Message Content
// ============================================================================

/// Content of the message sent when an inline result is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    /// A text message.
    Text {
        /// Text of the message, 1-4096 characters.
        message_text: String,
        /// Formatting of the text.
        #[serde(skip_serializing_if = "Option::is_none")]
        parse_mode: Option<ParseMode>,
        /// Disable link previews.
        #[serde(skip_serializing_if = "Option::is_none")]
        disable_web_page_preview: Option<bool>,
    },
    /// A location message.
    Location {
        /// Latitude.
        latitude: f64,
        /// Longitude.
        longitude: f64,
    },
    /// A contact message.
    Contact {
        /// Phone number.
        phone_number: String,
        /// First name.
        first_name: String,
        /// Last name.
        #[serde(skip_serializing_if = "Option::is_none")]
        last_name: Option<String>,
    },
}

impl InputMessageContent {
    /// Plain text content.
    pub fn text(text: impl Into<String>) -> Result<Self, ValidationError> {
        let message_text = text.into();
        ValidationError::require_non_empty("message_text", &message_text)?;
        ValidationError::require_max_chars("message_text", &message_text, 4096)?;
        Ok(Self::Text {
            message_text,
            parse_mode: None,
            disable_web_page_preview: None,
        })
    }
}

// ============================================================================
// Inline Query Results
// ============================================================================

/// A link to an article or web page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultArticle {
    /// Unique identifier of this result, 1-64 bytes.
    pub id: String,
    /// Title of the result.
    pub title: String,
    /// Content of the message to be sent.
    pub input_message_content: InputMessageContent,
    /// Inline keyboard attached to the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    /// URL of the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Short description of the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL of the thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

impl InlineQueryResultArticle {
    /// Creates an article result.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        input_message_content: InputMessageContent,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        validate_result_id(&id)?;
        let title = title.into();
        ValidationError::require_non_empty("title", &title)?;
        Ok(Self {
            id,
            title,
            input_message_content,
            reply_markup: None,
            url: None,
            description: None,
            thumb_url: None,
        })
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches an inline keyboard.
    pub fn reply_markup(mut self, markup: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(markup);
        self
    }
}

/// A link to a photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultPhoto {
    /// Unique identifier of this result, 1-64 bytes.
    pub id: String,
    /// URL of the JPEG photo.
    pub photo_url: String,
    /// URL of the thumbnail.
    pub thumb_url: String,
    /// Title of the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Caption of the photo, 0-200 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Inline keyboard attached to the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl InlineQueryResultPhoto {
    /// Creates a photo result.
    pub fn new(
        id: impl Into<String>,
        photo_url: impl Into<String>,
        thumb_url: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        validate_result_id(&id)?;
        Ok(Self {
            id,
            photo_url: photo_url.into(),
            thumb_url: thumb_url.into(),
            title: None,
            caption: None,
            reply_markup: None,
        })
    }

    /// Sets the caption.
    pub fn caption(mut self, caption: impl Into<String>) -> Result<Self, ValidationError> {
        let caption = caption.into();
        ValidationError::require_max_chars("caption", &caption, 200)?;
        self.caption = Some(caption);
        Ok(self)
    }
}

/// A link to an animated GIF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultGif {
    /// Unique identifier of this result, 1-64 bytes.
    pub id: String,
    /// URL of the GIF.
    pub gif_url: String,
    /// URL of the thumbnail.
    pub thumb_url: String,
    /// Title of the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Caption of the GIF, 0-200 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl InlineQueryResultGif {
    /// Creates a GIF result.
    pub fn new(
        id: impl Into<String>,
        gif_url: impl Into<String>,
        thumb_url: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        validate_result_id(&id)?;
        Ok(Self {
            id,
            gif_url: gif_url.into(),
            thumb_url: thumb_url.into(),
            title: None,
            caption: None,
        })
    }
}

/// A link to a video player or file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultVideo {
    /// Unique identifier of this result, 1-64 bytes.
    pub id: String,
    /// URL of the video player or file.
    pub video_url: String,
    /// `text/html` or `video/mp4`.
    pub mime_type: String,
    /// URL of the thumbnail.
    pub thumb_url: String,
    /// Title of the result.
    pub title: String,
    /// Caption of the video, 0-200 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A location on a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultLocation {
    /// Unique identifier of this result, 1-64 bytes.
    pub id: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Title of the location.
    pub title: String,
}

impl InlineQueryResultLocation {
    /// Creates a location result.
    pub fn new(
        id: impl Into<String>,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        validate_result_id(&id)?;
        ValidationError::require_range("latitude", latitude, -90.0, 90.0)?;
        ValidationError::require_range("longitude", longitude, -180.0, 180.0)?;
        Ok(Self {
            id,
            latitude,
            longitude,
            title: title.into(),
        })
    }
}

/// A contact with a phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultContact {
    /// Unique identifier of this result, 1-64 bytes.
    pub id: String,
    /// Phone number.
    pub phone_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// One result of an inline query answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InlineQueryResult {
    /// Article.
    Article(InlineQueryResultArticle),
    /// Photo.
    Photo(InlineQueryResultPhoto),
    /// Animated GIF.
    Gif(InlineQueryResultGif),
    /// Video.
    Video(InlineQueryResultVideo),
    /// Location.
    Location(InlineQueryResultLocation),
    /// Contact.
    Contact(InlineQueryResultContact),
}

impl InlineQueryResult {
    /// Identifier of the result, whatever its kind.
    pub fn id(&self) -> &str {
        match self {
            Self::Article(r) => &r.id,
            Self::Photo(r) => &r.id,
            Self::Gif(r) => &r.id,
            Self::Video(r) => &r.id,
            Self::Location(r) => &r.id,
            Self::Contact(r) => &r.id,
        }
    }
}

macro_rules! result_from {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for InlineQueryResult {
                fn from(result: $ty) -> Self {
                    Self::$variant(result)
                }
            }
        )+
    };
}

result_from! {
    Article(InlineQueryResultArticle),
    Photo(InlineQueryResultPhoto),
    Gif(InlineQueryResultGif),
    Video(InlineQueryResultVideo),
    Location(InlineQueryResultLocation),
    Contact(InlineQueryResultContact),
}

impl_sendable! {
    InlineQueryResult => "results",
    InputMessageContent => "input_message_content",
}
