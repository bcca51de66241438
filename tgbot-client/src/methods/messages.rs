//! Text, location, contact and chat-action sends.

use tgbot_core::{ChatAction, ChatId, Message, ParseMode, ValidationError};

use super::{MAX_TEXT_CHARS, Method, SendOptions, send_option_setters};
use crate::params::Params;

// ============================================================================
// sendMessage
// ============================================================================

/// Sends a text message.
#[derive(Debug, Clone, PartialEq)]
pub struct SendMessage {
    chat_id: ChatId,
    text: String,
    parse_mode: Option<ParseMode>,
    disable_web_page_preview: Option<bool>,
    options: SendOptions,
}

impl SendMessage {
    /// Creates the request. Text must be 1 to 4096 characters.
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        ValidationError::require_non_empty("text", &text)?;
        ValidationError::require_max_chars("text", &text, MAX_TEXT_CHARS)?;
        Ok(Self {
            chat_id: chat_id.into(),
            text,
            parse_mode: None,
            disable_web_page_preview: None,
            options: SendOptions::default(),
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

    send_option_setters!();
}

impl Method for SendMessage {
    const NAME: &'static str = "sendMessage";
    type Output = Message;

    fn into_params(self) -> Result<Params, ValidationError> {
        let params = Params::new()
            .with("chat_id", self.chat_id)
            .with("text", self.text)
            .with_opt("parse_mode", self.parse_mode)
            .with_opt("disable_web_page_preview", self.disable_web_page_preview);
        self.options.apply(params)
    }
}

// ============================================================================
// forwardMessage
// ============================================================================

/// Forwards a message from one chat to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardMessage {
    chat_id: ChatId,
    from_chat_id: ChatId,
    message_id: i64,
    disable_notification: Option<bool>,
}

impl ForwardMessage {
    /// Creates the request.
    pub fn new(chat_id: impl Into<ChatId>, from_chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            from_chat_id: from_chat_id.into(),
            message_id,
            disable_notification: None,
        }
    }

    /// Forwards without a notification sound.
    #[must_use]
    pub fn silent(mut self) -> Self {
        self.disable_notification = Some(true);
        self
    }
}

impl Method for ForwardMessage {
    const NAME: &'static str = "forwardMessage";
    type Output = Message;

    fn into_params(self) -> Result<Params, ValidationError> {
        Ok(Params::new()
            .with("chat_id", self.chat_id)
            .with("from_chat_id", self.from_chat_id)
            .with("message_id", self.message_id)
            .with_opt("disable_notification", self.disable_notification))
    }
}

// ============================================================================
// sendLocation / sendVenue
// ============================================================================

fn check_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    ValidationError::require_range("latitude", latitude, -90.0, 90.0)?;
    ValidationError::require_range("longitude", longitude, -180.0, 180.0)
}

/// Sends a point on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct SendLocation {
    chat_id: ChatId,
    latitude: f64,
    longitude: f64,
    options: SendOptions,
}

impl SendLocation {
    /// Creates the request. Coordinates must be valid degrees.
    pub fn new(chat_id: impl Into<ChatId>, latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            options: SendOptions::default(),
        })
    }

    send_option_setters!();
}

impl Method for SendLocation {
    const NAME: &'static str = "sendLocation";
    type Output = Message;

    fn into_params(self) -> Result<Params, ValidationError> {
        let params = Params::new()
            .with("chat_id", self.chat_id)
            .with("latitude", self.latitude)
            .with("longitude", self.longitude);
        self.options.apply(params)
    }
}

/// Sends a named venue.
#[derive(Debug, Clone, PartialEq)]
pub struct SendVenue {
    chat_id: ChatId,
    latitude: f64,
    longitude: f64,
    title: String,
    address: String,
    foursquare_id: Option<String>,
    options: SendOptions,
}

impl SendVenue {
    /// Creates the request. Title and address must not be empty.
    pub fn new(
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        check_coordinates(latitude, longitude)?;
        let title = title.into();
        let address = address.into();
        ValidationError::require_non_empty("title", &title)?;
        ValidationError::require_non_empty("address", &address)?;
        Ok(Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            title,
            address,
            foursquare_id: None,
            options: SendOptions::default(),
        })
    }

    /// Foursquare identifier of the venue.
    #[must_use]
    pub fn foursquare_id(mut self, id: impl Into<String>) -> Self {
        self.foursquare_id = Some(id.into());
        self
    }

    send_option_setters!();
}

impl Method for SendVenue {
    const NAME: &'static str = "sendVenue";
    type Output = Message;

    fn into_params(self) -> Result<Params, ValidationError> {
        let params = Params::new()
            .with("chat_id", self.chat_id)
            .with("latitude", self.latitude)
            .with("longitude", self.longitude)
            .with("title", self.title)
            .with("address", self.address)
            .with_opt("foursquare_id", self.foursquare_id);
        self.options.apply(params)
    }
}

// ============================================================================
// sendContact
// ============================================================================

/// Sends a phone contact.
#[derive(Debug, Clone, PartialEq)]
pub struct SendContact {
    chat_id: ChatId,
    phone_number: String,
    first_name: String,
    last_name: Option<String>,
    options: SendOptions,
}

impl SendContact {
    /// Creates the request. Phone number and first name must not be empty.
    pub fn new(
        chat_id: impl Into<ChatId>,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let phone_number = phone_number.into();
        let first_name = first_name.into();
        ValidationError::require_non_empty("phone_number", &phone_number)?;
        ValidationError::require_non_empty("first_name", &first_name)?;
        Ok(Self {
            chat_id: chat_id.into(),
            phone_number,
            first_name,
            last_name: None,
            options: SendOptions::default(),
        })
    }

    /// Contact's last name.
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    send_option_setters!();
}

impl Method for SendContact {
    const NAME: &'static str = "sendContact";
    type Output = Message;

    fn into_params(self) -> Result<Params, ValidationError> {
        let params = Params::new()
            .with("chat_id", self.chat_id)
            .with("phone_number", self.phone_number)
            .with("first_name", self.first_name)
            .with_opt("last_name", self.last_name);
        self.options.apply(params)
    }
}

// ============================================================================
// sendChatAction
// ============================================================================

/// Shows a short-lived activity status in the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendChatAction {
    chat_id: ChatId,
    action: ChatAction,
}

impl SendChatAction {
    /// Creates the request.
    pub fn new(chat_id: impl Into<ChatId>, action: ChatAction) -> Self {
        Self {
            chat_id: chat_id.into(),
            action,
        }
    }
}

impl Method for SendChatAction {
    const NAME: &'static str = "sendChatAction";
    type Output = bool;

    fn into_params(self) -> Result<Params, ValidationError> {
        Ok(Params::new()
            .with("chat_id", self.chat_id)
            .with("action", self.action))
    }
}
