//! Media attachments and remote files.

use serde::{Deserialize, Serialize};

use super::chat::User;

/// One size of a photo or thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSize {
    /// Identifier for downloading or resending the file.
    pub file_id: String,
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
    /// Size in bytes.
    pub file_size: Option<i64>,
}

/// An audio file treated as music.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audio {
    /// Identifier for downloading or resending the file.
    pub file_id: String,
    /// Duration in seconds.
    pub duration: i64,
    /// Performer as defined by the sender or audio tags.
    pub performer: Option<String>,
    /// Title as defined by the sender or audio tags.
    pub title: Option<String>,
    /// MIME type.
    pub mime_type: Option<String>,
    /// Size in bytes.
    pub file_size: Option<i64>,
}

/// A general file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier for downloading or resending the file.
    pub file_id: String,
    /// Thumbnail as defined by the sender.
    pub thumb: Option<PhotoSize>,
    /// Original filename.
    pub file_name: Option<String>,
    /// MIME type.
    pub mime_type: Option<String>,
    /// Size in bytes.
    pub file_size: Option<i64>,
}

/// A sticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    /// Identifier for downloading or resending the file.
    pub file_id: String,
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
    /// Thumbnail in .webp or .jpg format.
    pub thumb: Option<PhotoSize>,
    /// Emoji associated with the sticker.
    pub emoji: Option<String>,
    /// Size in bytes.
    pub file_size: Option<i64>,
}

/// A video file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Identifier for downloading or resending the file.
    pub file_id: String,
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
    /// Duration in seconds.
    pub duration: i64,
    /// Thumbnail.
    pub thumb: Option<PhotoSize>,
    /// MIME type.
    pub mime_type: Option<String>,
    /// Size in bytes.
    pub file_size: Option<i64>,
}

/// A voice note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    /// Identifier for downloading or resending the file.
    pub file_id: String,
    /// Duration in seconds.
    pub duration: i64,
    /// MIME type.
    pub mime_type: Option<String>,
    /// Size in bytes.
    pub file_size: Option<i64>,
}

/// A phone contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Phone number.
    pub phone_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: Option<String>,
    /// Telegram user id, if the contact is a Telegram user.
    pub user_id: Option<i64>,
}

/// A point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Longitude.
    pub longitude: f64,
    /// Latitude.
    pub latitude: f64,
}

/// A venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Venue location.
    pub location: Location,
    /// Name of the venue.
    pub title: String,
    /// Address of the venue.
    pub address: String,
    /// Foursquare identifier.
    pub foursquare_id: Option<String>,
}

/// A file ready to be downloaded.
///
/// Downloading is out of scope for this library; `file_path` is what the
/// download endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Identifier of the file.
    pub file_id: String,
    /// Size in bytes, if known.
    pub file_size: Option<i64>,
    /// Path to use with the file download endpoint.
    pub file_path: Option<String>,
}

/// A special entity in a text message: hashtag, username, URL, etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    /// Entity type, e.g. `mention`, `bot_command`, `url`, `text_link`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Offset in UTF-16 code units to the start of the entity.
    pub offset: i64,
    /// Length in UTF-16 code units.
    pub length: i64,
    /// URL opened on tap, for `text_link` only.
    pub url: Option<String>,
    /// Mentioned user, for `text_mention` only.
    pub user: Option<User>,
}
