// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # tgbot Client
//!
//! Request dispatcher, update poller and typed operations for the Telegram
//! Bot API.
//!
//! ## Dispatch
//!
//! [`Bot`] sends one operation per call to `<base>/bot<token>/<operation>`:
//!
//! - [`Bot::dispatch`] - any operation with a hand-built [`Params`] set
//! - [`Bot::call`] - the same, resolving a file parameter at runtime
//! - [`Bot::execute`] - a typed request from [`methods`], decoded into its output
//!
//! Successful responses come back as a [`ResultEnvelope`], which keeps the
//! raw status, headers and body next to the parsed document.
//!
//! ## Polling
//!
//! [`UpdatePoller`] spaces `getUpdates` calls by a minimum interval and can
//! swallow network failures. [`UpdatePoller::into_stream`] turns it into a
//! stream of updates that confirms each batch.
//!
//! ## Example
//!
//! ```ignore
//! use tgbot_client::{Bot, methods::SendMessage};
//!
//! let bot = Bot::new(std::env::var("TGBOT_TOKEN")?)?;
//! let me = bot.get_me().await?;
//! bot.execute(SendMessage::new(42, format!("Hello from {}", me.first_name))?.silent())
//!     .await?;
//! ```

pub mod bot;
pub mod config;
pub mod credential;
pub mod envelope;
pub mod error;
pub mod file;
pub mod methods;
pub mod params;
pub mod poller;
pub mod transport;

#[cfg(test)]
mod poller_tests;

// Re-export key types at crate root

// Errors
pub use error::{
    BotError, ConfigError, RemoteError, TransportError, TransportErrorKind, TypeConstraintError,
};

// Dispatch
pub use bot::{Bot, BotBuilder};
pub use credential::{ApiEndpoint, Credential, DEFAULT_API_BASE, mask_token};
pub use envelope::{RawResponse, ResultEnvelope};
pub use file::{FileAttachment, FileInput, ResolvedFile, resolve_file, resolve_file_param};
pub use methods::{MessageTarget, Method};
pub use params::{ParamValue, Params};
pub use transport::HttpClient;

// Polling
pub use poller::{PollBatch, PollSettings, UpdatePoller, UpdateSource};

// Configuration
pub use config::BotConfig;

// Core types
pub use tgbot_core;
