//! Chat management and lookups.

use tgbot_core::{Chat, ChatId, ChatMember, UserProfilePhotos, ValidationError};

use super::{Method, check_limit};
use crate::params::Params;

/// Declares a request whose only argument is the target chat.
macro_rules! chat_only {
    ($(#[$doc:meta])* $name:ident, $op:literal, $output:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            chat_id: ChatId,
        }

        impl $name {
            /// Creates the request.
            pub fn new(chat_id: impl Into<ChatId>) -> Self {
                Self {
                    chat_id: chat_id.into(),
                }
            }
        }

        impl Method for $name {
            const NAME: &'static str = $op;
            type Output = $output;

            fn into_params(self) -> Result<Params, ValidationError> {
                Ok(Params::new().with("chat_id", self.chat_id))
            }
        }
    };
}

/// Declares a request on one member of a chat.
macro_rules! chat_member {
    ($(#[$doc:meta])* $name:ident, $op:literal, $output:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            chat_id: ChatId,
            user_id: i64,
        }

        impl $name {
            /// Creates the request.
            pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
                Self {
                    chat_id: chat_id.into(),
                    user_id,
                }
            }
        }

        impl Method for $name {
            const NAME: &'static str = $op;
            type Output = $output;

            fn into_params(self) -> Result<Params, ValidationError> {
                Ok(Params::new()
                    .with("chat_id", self.chat_id)
                    .with("user_id", self.user_id))
            }
        }
    };
}

chat_only!(
    /// Makes the bot leave a group, supergroup or channel.
    LeaveChat,
    "leaveChat",
    bool
);

chat_only!(
    /// Fetches up-to-date information about a chat.
    GetChat,
    "getChat",
    Chat
);

chat_only!(
    /// Lists the administrators of a chat, excluding other bots.
    GetChatAdministrators,
    "getChatAdministrators",
    Vec<ChatMember>
);

chat_only!(
    /// Counts the members of a chat.
    GetChatMembersCount,
    "getChatMembersCount",
    i64
);

chat_member!(
    /// Removes a user from a group or channel.
    KickChatMember,
    "kickChatMember",
    bool
);

chat_member!(
    /// Lifts a ban so the user can join again through a link.
    UnbanChatMember,
    "unbanChatMember",
    bool
);

chat_member!(
    /// Fetches one member of a chat.
    GetChatMember,
    "getChatMember",
    ChatMember
);

// ============================================================================
// getUserProfilePhotos
// ============================================================================

/// Lists a user's profile pictures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserProfilePhotos {
    user_id: i64,
    offset: Option<u32>,
    limit: Option<u32>,
}

impl GetUserProfilePhotos {
    /// Creates the request.
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            offset: None,
            limit: None,
        }
    }

    /// Index of the first photo returned.
    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Number of photos returned, 1 to 100.
    pub fn limit(mut self, limit: u32) -> Result<Self, ValidationError> {
        check_limit(Some(limit))?;
        self.limit = Some(limit);
        Ok(self)
    }
}

impl Method for GetUserProfilePhotos {
    const NAME: &'static str = "getUserProfilePhotos";
    type Output = UserProfilePhotos;

    fn into_params(self) -> Result<Params, ValidationError> {
        Ok(Params::new()
            .with("user_id", self.user_id)
            .with_opt("offset", self.offset)
            .with_opt("limit", self.limit))
    }
}
