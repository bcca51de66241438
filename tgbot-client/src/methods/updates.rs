//! Bot identity, incoming updates and file lookups.

use std::time::Duration;

use tgbot_core::{File, Update, User, ValidationError};

use super::{Method, check_limit};
use crate::params::Params;

/// Returns basic information about the bot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetMe;

impl Method for GetMe {
    const NAME: &'static str = "getMe";
    type Output = User;

    fn into_params(self) -> Result<Params, ValidationError> {
        Ok(Params::new())
    }
}

// ============================================================================
// getUpdates
// ============================================================================

/// Fetches pending updates.
///
/// Updates with an id below `offset` are confirmed and dropped by the
/// server. With a non-zero `timeout` the server holds the request open
/// until an update arrives or the timeout expires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetUpdates {
    offset: Option<i64>,
    limit: Option<u32>,
    timeout: Option<u32>,
}

impl GetUpdates {
    /// Creates the request with server defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of the first update to return.
    #[must_use]
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Most updates to return, 1 to 100.
    pub fn limit(mut self, limit: u32) -> Result<Self, ValidationError> {
        check_limit(Some(limit))?;
        self.limit = Some(limit);
        Ok(self)
    }

    /// Long-poll timeout in seconds. Zero means short polling.
    #[must_use]
    pub fn timeout(mut self, seconds: u32) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Configured offset.
    pub fn get_offset(&self) -> Option<i64> {
        self.offset
    }
}

impl Method for GetUpdates {
    const NAME: &'static str = "getUpdates";
    type Output = Vec<Update>;

    fn into_params(self) -> Result<Params, ValidationError> {
        check_limit(self.limit)?;
        Ok(Params::new()
            .with_opt("offset", self.offset)
            .with_opt("limit", self.limit)
            .with_opt("timeout", self.timeout))
    }

    fn long_poll(&self) -> Option<Duration> {
        self.timeout
            .filter(|&t| t > 0)
            .map(|t| Duration::from_secs(u64::from(t)))
    }
}

// ============================================================================
// getFile
// ============================================================================

/// Looks up a file so it can be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetFile {
    file_id: String,
}

impl GetFile {
    /// Creates the request. The id must not be empty.
    pub fn new(file_id: impl Into<String>) -> Result<Self, ValidationError> {
        let file_id = file_id.into();
        ValidationError::require_non_empty("file_id", &file_id)?;
        Ok(Self { file_id })
    }
}

impl Method for GetFile {
    const NAME: &'static str = "getFile";
    type Output = File;

    fn into_params(self) -> Result<Params, ValidationError> {
        Ok(Params::new().with("file_id", self.file_id))
    }
}
