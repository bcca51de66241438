//! Client configuration.
//!
//! Settings live in a JSON file at `<config dir>/tgbot/config.json`. Every
//! field has a default, and the environment can override the token and the
//! API server. The file may hold the bot token, so it is written with
//! owner-only permissions.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bot::Bot;
use crate::credential::{DEFAULT_API_BASE, mask_token};
use crate::error::ConfigError;
use crate::poller::{DEFAULT_POLL_LIMIT, PollSettings};
use crate::transport::DEFAULT_TIMEOUT_SECS;

/// Environment variable holding the bot token.
pub const TOKEN_ENV: &str = "TGBOT_TOKEN";

/// Fallback environment variable for the bot token.
pub const TOKEN_ENV_FALLBACK: &str = "BOT_TOKEN";

/// Environment variable overriding the API server.
pub const API_BASE_ENV: &str = "TGBOT_API_URL";

// ============================================================================
// Bot Config
// ============================================================================

/// Persisted client settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Bot token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// API server base URL.
    pub api_base: String,
    /// Request deadline in seconds.
    pub request_timeout_secs: u64,
    /// Minimum milliseconds between two polls.
    pub poll_min_interval_ms: u64,
    /// Most updates per poll.
    pub poll_limit: u32,
    /// Server-side long-poll timeout in seconds.
    pub poll_timeout_secs: u32,
    /// Turn network failures during polling into empty batches.
    pub swallow_network_errors: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            poll_min_interval_ms: 100,
            poll_limit: DEFAULT_POLL_LIMIT,
            poll_timeout_secs: 0,
            swallow_network_errors: true,
        }
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &self.token.as_deref().map(mask_token))
            .field("api_base", &self.api_base)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("poll_min_interval_ms", &self.poll_min_interval_ms)
            .field("poll_limit", &self.poll_limit)
            .field("poll_timeout_secs", &self.poll_timeout_secs)
            .field("swallow_network_errors", &self.swallow_network_errors)
            .finish()
    }
}

impl BotConfig {
    /// Default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map_or_else(|| PathBuf::from("."), |c| c.join("tgbot"))
            .join("config.json")
    }

    /// Loads a configuration file. A missing file yields defaults.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        if !tokio::fs::try_exists(path).await? {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Saves the configuration as pretty JSON, readable by the owner only.
    pub async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &json).await?;
        set_owner_only(&temp_path).await?;
        tokio::fs::rename(&temp_path, path).await?;

        debug!(path = %path.display(), "Config saved");
        Ok(())
    }

    /// Applies overrides from the process environment.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from a variable lookup.
    ///
    /// `TGBOT_TOKEN` wins over `BOT_TOKEN`; both win over the file.
    /// `TGBOT_API_URL` replaces the API server. Empty values are ignored.
    #[must_use]
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty(TOKEN_ENV).or_else(|| non_empty(TOKEN_ENV_FALLBACK)) {
            self.token = Some(token);
        }
        if let Some(base) = non_empty(API_BASE_ENV) {
            self.api_base = base;
        }
        self
    }

    /// Polling settings derived from this configuration.
    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            limit: self.poll_limit,
            timeout_secs: self.poll_timeout_secs,
            min_interval: Duration::from_millis(self.poll_min_interval_ms),
            swallow_network_errors: self.swallow_network_errors,
        }
    }

    /// Builds a client from this configuration.
    pub fn build_bot(&self) -> Result<Bot, ConfigError> {
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        Bot::builder(token)
            .api_base(self.api_base.as_str())
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .build()
    }
}

#[cfg(unix)]
async fn set_owner_only(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = tokio::fs::metadata(path).await?.permissions();
    perms.set_mode(0o600);
    tokio::fs::set_permissions(path, perms).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn set_owner_only(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}
