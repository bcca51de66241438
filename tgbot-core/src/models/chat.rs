//! Users, chats and chat membership.

use serde::{Deserialize, Serialize};

use super::media::PhotoSize;

// ============================================================================
// User
// ============================================================================

/// A Telegram user or bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: i64,
    /// True if this user is a bot.
    #[serde(default)]
    pub is_bot: bool,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: Option<String>,
    /// Username, without the leading `@`.
    pub username: Option<String>,
    /// IETF language tag of the user's client.
    pub language_code: Option<String>,
}

impl User {
    /// Returns "first last", or just the first name.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }

    /// Returns `@username` when the user has one.
    pub fn mention(&self) -> Option<String> {
        self.username.as_ref().map(|u| format!("@{u}"))
    }
}

// ============================================================================
// Chat
// ============================================================================

/// Kind of chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    /// One-on-one conversation with a user.
    Private,
    /// Basic group.
    Group,
    /// Supergroup.
    Supergroup,
    /// Broadcast channel.
    Channel,
    /// A chat type this library does not know yet.
    #[serde(other)]
    Unknown,
}

/// A chat: private conversation, group, supergroup or channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    /// Unique identifier.
    pub id: i64,
    /// Kind of chat.
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    /// Title, for groups, supergroups and channels.
    pub title: Option<String>,
    /// Username, for private chats, supergroups and channels.
    pub username: Option<String>,
    /// First name of the other party in a private chat.
    pub first_name: Option<String>,
    /// Last name of the other party in a private chat.
    pub last_name: Option<String>,
    /// True if a group has "All Members Are Admins" enabled.
    pub all_members_are_administrators: Option<bool>,
}

impl Chat {
    /// Human-readable name: the title, else the username, else the first name.
    pub fn display_name(&self) -> String {
        self.title
            .clone()
            .or_else(|| self.username.as_ref().map(|u| format!("@{u}")))
            .or_else(|| self.first_name.clone())
            .unwrap_or_else(|| self.id.to_string())
    }
}

// ============================================================================
// Chat Member
// ============================================================================

/// Membership status of a user in a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMemberStatus {
    /// Chat owner.
    Creator,
    /// Administrator.
    Administrator,
    /// Regular member.
    Member,
    /// Member with restrictions.
    Restricted,
    /// No longer a member.
    Left,
    /// Banned from the chat.
    Kicked,
    /// A status this library does not know yet.
    #[serde(other)]
    Unknown,
}

/// Information about one member of a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMember {
    /// The member.
    pub user: User,
    /// Membership status.
    pub status: ChatMemberStatus,
}

impl ChatMember {
    /// Returns true for creators and administrators.
    pub fn is_admin(&self) -> bool {
        matches!(
            self.status,
            ChatMemberStatus::Creator | ChatMemberStatus::Administrator
        )
    }
}

/// A user's profile pictures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfilePhotos {
    /// Total number of profile pictures the user has.
    pub total_count: i64,
    /// Requested pictures, each in up to four sizes.
    #[serde(default)]
    pub photos: Vec<Vec<PhotoSize>>,
}
