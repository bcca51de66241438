//! Request-side value types: chat identifiers, parse modes, chat actions and uploads.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ============================================================================
// Chat Id
// ============================================================================

/// Target chat: a numeric id or a channel username such as `@channelusername`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    /// Numeric chat identifier.
    Id(i64),
    /// Channel or supergroup username, including the leading `@`.
    Username(String),
}

impl ChatId {
    /// Creates a username target. The name must start with `@` and have something after it.
    pub fn username(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.len() > 1 && name.starts_with('@') {
            Ok(Self::Username(name))
        } else {
            Err(ValidationError::InvalidUsername(name))
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<i32> for ChatId {
    fn from(id: i32) -> Self {
        Self::Id(i64::from(id))
    }
}

impl FromStr for ChatId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(id) => Ok(Self::Id(id)),
            Err(_) => Self::username(s),
        }
    }
}

impl TryFrom<&str> for ChatId {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

// ============================================================================
// Parse Mode
// ============================================================================

/// How message text is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseMode {
    /// Markdown-style formatting.
    Markdown,
    /// HTML formatting.
    #[serde(rename = "HTML")]
    Html,
}

impl ParseMode {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "Markdown",
            Self::Html => "HTML",
        }
    }
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            other => Err(format!("unknown parse mode: {other}")),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Chat Action
// ============================================================================

/// Activity status broadcast with `sendChatAction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    /// Typing a text message.
    Typing,
    /// Uploading a photo.
    UploadPhoto,
    /// Recording a video.
    RecordVideo,
    /// Uploading a video.
    UploadVideo,
    /// Recording audio.
    RecordAudio,
    /// Uploading audio.
    UploadAudio,
    /// Uploading a general file.
    UploadDocument,
    /// Looking up a location.
    FindLocation,
}

impl ChatAction {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::UploadPhoto => "upload_photo",
            Self::RecordVideo => "record_video",
            Self::UploadVideo => "upload_video",
            Self::RecordAudio => "record_audio",
            Self::UploadAudio => "upload_audio",
            Self::UploadDocument => "upload_document",
            Self::FindLocation => "find_location",
        }
    }
}

impl fmt::Display for ChatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Input File
// ============================================================================

/// A local file to upload: raw bytes and the filename the server should see.
#[derive(Clone, PartialEq, Eq)]
pub struct InputFile {
    filename: String,
    bytes: Vec<u8>,
    mime_type: Option<String>,
}

impl InputFile {
    /// Creates an upload from bytes. The filename must not be empty.
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Result<Self, ValidationError> {
        let filename = filename.into();
        ValidationError::require_non_empty("filename", &filename)?;
        Ok(Self {
            filename,
            bytes: bytes.into(),
            mime_type: None,
        })
    }

    /// Reads an upload from disk, using the path's file name.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name")
            })?;
        let bytes = std::fs::read(path)?;
        Ok(Self {
            filename,
            bytes,
            mime_type: None,
        })
    }

    /// Sets an explicit MIME type for the upload part.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Filename sent with the upload.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// File contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Explicit MIME type, if one was set.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Consumes the upload, returning its parts.
    pub fn into_parts(self) -> (String, Vec<u8>, Option<String>) {
        (self.filename, self.bytes, self.mime_type)
    }
}

impl fmt::Debug for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputFile")
            .field("filename", &self.filename)
            .field("len", &self.bytes.len())
            .field("mime_type", &self.mime_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_id_parsing() {
        assert_eq!("42".parse::<ChatId>().unwrap(), ChatId::Id(42));
        assert_eq!("-1001234".parse::<ChatId>().unwrap(), ChatId::Id(-1_001_234));
        assert_eq!(
            "@channel".parse::<ChatId>().unwrap(),
            ChatId::Username("@channel".to_string())
        );
        assert!("channel".parse::<ChatId>().is_err());
        assert!("@".parse::<ChatId>().is_err());
    }

    #[test]
    fn test_chat_id_display_is_wire_form() {
        assert_eq!(ChatId::from(42).to_string(), "42");
        assert_eq!(ChatId::username("@news").unwrap().to_string(), "@news");
    }

    #[test]
    fn test_parse_mode_wire_names() {
        assert_eq!(serde_json::to_string(&ParseMode::Html).unwrap(), r#""HTML""#);
        assert_eq!("html".parse::<ParseMode>().unwrap(), ParseMode::Html);
        assert_eq!("Markdown".parse::<ParseMode>().unwrap(), ParseMode::Markdown);
        assert!("rtf".parse::<ParseMode>().is_err());
    }

    #[test]
    fn test_chat_action_wire_names_match_serde() {
        for action in [
            ChatAction::Typing,
            ChatAction::UploadPhoto,
            ChatAction::RecordVideo,
            ChatAction::UploadVideo,
            ChatAction::RecordAudio,
            ChatAction::UploadAudio,
            ChatAction::UploadDocument,
            ChatAction::FindLocation,
        ] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }

    #[test]
    fn test_input_file_debug_hides_contents() {
        let file = InputFile::new("cat.jpg", vec![1, 2, 3]).unwrap();
        let debug = format!("{file:?}");
        assert!(debug.contains("cat.jpg"));
        assert!(debug.contains("len: 3"));
        assert!(InputFile::new("", vec![]).is_err());
    }
}
