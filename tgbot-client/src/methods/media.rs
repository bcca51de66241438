//! File-bearing sends.
//!
//! The file argument is a [`FileInput`]: a file id or URL the server already
//! knows, or bytes to upload. Resolution into a form field or multipart part
//! happens at dispatch.

use tgbot_core::{ChatId, Message, ValidationError};

use super::{Method, SendOptions, check_caption, send_option_setters};
use crate::file::FileInput;
use crate::params::Params;

/// Declares a send whose only extras are an optional caption and the shared options.
macro_rules! captioned_send {
    ($(#[$doc:meta])* $name:ident, $op:literal, $param:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            chat_id: ChatId,
            file: FileInput,
            caption: Option<String>,
            options: SendOptions,
        }

        impl $name {
            /// Creates the request.
            pub fn new(chat_id: impl Into<ChatId>, file: impl Into<FileInput>) -> Self {
                Self {
                    chat_id: chat_id.into(),
                    file: file.into(),
                    caption: None,
                    options: SendOptions::default(),
                }
            }

            /// Adds a caption of at most 200 characters.
            pub fn caption(mut self, caption: impl Into<String>) -> Result<Self, ValidationError> {
                let caption = caption.into();
                check_caption(Some(&caption))?;
                self.caption = Some(caption);
                Ok(self)
            }

            send_option_setters!();
        }

        impl Method for $name {
            const NAME: &'static str = $op;
            const FILE_PARAM: Option<&'static str> = Some($param);
            type Output = Message;

            fn into_params(self) -> Result<Params, ValidationError> {
                let params = Params::new()
                    .with("chat_id", self.chat_id)
                    .with($param, self.file)
                    .with_opt("caption", self.caption);
                self.options.apply(params)
            }
        }
    };
}

captioned_send!(
    /// Sends a photo.
    SendPhoto,
    "sendPhoto",
    "photo"
);

captioned_send!(
    /// Sends a general file.
    SendDocument,
    "sendDocument",
    "document"
);

// ============================================================================
// sendVideo
// ============================================================================

/// Sends a video.
#[derive(Debug, Clone, PartialEq)]
pub struct SendVideo {
    chat_id: ChatId,
    video: FileInput,
    duration: Option<u32>,
    width: Option<u32>,
    height: Option<u32>,
    caption: Option<String>,
    options: SendOptions,
}

impl SendVideo {
    /// Creates the request.
    pub fn new(chat_id: impl Into<ChatId>, video: impl Into<FileInput>) -> Self {
        Self {
            chat_id: chat_id.into(),
            video: video.into(),
            duration: None,
            width: None,
            height: None,
            caption: None,
            options: SendOptions::default(),
        }
    }

    /// Duration in seconds.
    #[must_use]
    pub fn duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Frame size in pixels.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Adds a caption of at most 200 characters.
    pub fn caption(mut self, caption: impl Into<String>) -> Result<Self, ValidationError> {
        let caption = caption.into();
        check_caption(Some(&caption))?;
        self.caption = Some(caption);
        Ok(self)
    }

    send_option_setters!();
}

impl Method for SendVideo {
    const NAME: &'static str = "sendVideo";
    const FILE_PARAM: Option<&'static str> = Some("video");
    type Output = Message;

    fn into_params(self) -> Result<Params, ValidationError> {
        let params = Params::new()
            .with("chat_id", self.chat_id)
            .with("video", self.video)
            .with_opt("duration", self.duration)
            .with_opt("width", self.width)
            .with_opt("height", self.height)
            .with_opt("caption", self.caption);
        self.options.apply(params)
    }
}

// ============================================================================
// sendAudio
// ============================================================================

/// Sends a music file shown in the player.
#[derive(Debug, Clone, PartialEq)]
pub struct SendAudio {
    chat_id: ChatId,
    audio: FileInput,
    duration: Option<u32>,
    performer: Option<String>,
    title: Option<String>,
    options: SendOptions,
}

impl SendAudio {
    /// Creates the request.
    pub fn new(chat_id: impl Into<ChatId>, audio: impl Into<FileInput>) -> Self {
        Self {
            chat_id: chat_id.into(),
            audio: audio.into(),
            duration: None,
            performer: None,
            title: None,
            options: SendOptions::default(),
        }
    }

    /// Duration in seconds.
    #[must_use]
    pub fn duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Performer shown in the player.
    #[must_use]
    pub fn performer(mut self, performer: impl Into<String>) -> Self {
        self.performer = Some(performer.into());
        self
    }

    /// Track title shown in the player.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    send_option_setters!();
}

impl Method for SendAudio {
    const NAME: &'static str = "sendAudio";
    const FILE_PARAM: Option<&'static str> = Some("audio");
    type Output = Message;

    fn into_params(self) -> Result<Params, ValidationError> {
        let params = Params::new()
            .with("chat_id", self.chat_id)
            .with("audio", self.audio)
            .with_opt("duration", self.duration)
            .with_opt("performer", self.performer)
            .with_opt("title", self.title);
        self.options.apply(params)
    }
}

// ============================================================================
// sendSticker / sendVoice
// ============================================================================

/// Sends a `.webp` sticker.
#[derive(Debug, Clone, PartialEq)]
pub struct SendSticker {
    chat_id: ChatId,
    sticker: FileInput,
    options: SendOptions,
}

impl SendSticker {
    /// Creates the request.
    pub fn new(chat_id: impl Into<ChatId>, sticker: impl Into<FileInput>) -> Self {
        Self {
            chat_id: chat_id.into(),
            sticker: sticker.into(),
            options: SendOptions::default(),
        }
    }

    send_option_setters!();
}

impl Method for SendSticker {
    const NAME: &'static str = "sendSticker";
    const FILE_PARAM: Option<&'static str> = Some("sticker");
    type Output = Message;

    fn into_params(self) -> Result<Params, ValidationError> {
        let params = Params::new()
            .with("chat_id", self.chat_id)
            .with("sticker", self.sticker);
        self.options.apply(params)
    }
}

/// Sends a voice note.
#[derive(Debug, Clone, PartialEq)]
pub struct SendVoice {
    chat_id: ChatId,
    voice: FileInput,
    duration: Option<u32>,
    options: SendOptions,
}

impl SendVoice {
    /// Creates the request.
    pub fn new(chat_id: impl Into<ChatId>, voice: impl Into<FileInput>) -> Self {
        Self {
            chat_id: chat_id.into(),
            voice: voice.into(),
            duration: None,
            options: SendOptions::default(),
        }
    }

    /// Duration in seconds.
    #[must_use]
    pub fn duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    send_option_setters!();
}

impl Method for SendVoice {
    const NAME: &'static str = "sendVoice";
    const FILE_PARAM: Option<&'static str> = Some("voice");
    type Output = Message;

    fn into_params(self) -> Result<Params, ValidationError> {
        let params = Params::new()
            .with("chat_id", self.chat_id)
            .with("voice", self.voice)
            .with_opt("duration", self.duration);
        self.options.apply(params)
    }
}
