//! Client error types.
//!
//! None of these types ever render the bot token: transport errors are
//! stored with the request URL stripped, and the credential itself only
//! formats in masked form.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

use tgbot_core::ValidationError;

use crate::envelope::RawResponse;

// ============================================================================
// Bot Error
// ============================================================================

/// Error type for every bot operation.
#[derive(Debug, Error)]
pub enum BotError {
    /// A request argument failed a precondition. Nothing was sent.
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// A file parameter held a value of the wrong kind. Nothing was sent.
    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),

    /// The network call could not complete.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a well-formed failure document.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The server answered with a body this library could not decode.
    #[error("Failed to decode {operation} response: {message}")]
    Decode {
        /// Operation whose response failed to decode.
        operation: String,
        /// Decoder message.
        message: String,
    },
}

impl BotError {
    /// Returns true if this is a network-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns true if the request was rejected before anything was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::TypeConstraint(_))
    }

    /// Seconds the server asked us to wait before retrying, if any.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::Remote(e) => e.retry_after,
            _ => None,
        }
    }

    pub(crate) fn decode(operation: &str, err: impl fmt::Display) -> Self {
        Self::Decode {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Type Constraint Error
// ============================================================================

/// A parameter held a value of a kind it cannot carry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parameter {parameter} expects {expected}, got {actual}")]
pub struct TypeConstraintError {
    /// Name of the offending parameter.
    pub parameter: String,
    /// Kinds the parameter accepts.
    pub expected: &'static str,
    /// Kind of the value that was supplied.
    pub actual: &'static str,
}

impl TypeConstraintError {
    /// What a file-bearing parameter accepts.
    pub const FILE_KINDS: &'static str = "a file id, a URL or an InputFile upload";

    /// What an ordinary form field accepts.
    pub const FORM_KINDS: &'static str = "a plain form value";

    /// A file parameter that held something other than a reference or an upload.
    pub fn file(parameter: impl Into<String>, actual: &'static str) -> Self {
        Self {
            parameter: parameter.into(),
            expected: Self::FILE_KINDS,
            actual,
        }
    }
}

// ============================================================================
// Transport Error
// ============================================================================

/// Broad category of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// DNS resolution or TCP/TLS connection failed.
    Connect,
    /// The request did not finish within its deadline.
    Timeout,
    /// The request could not be built.
    Builder,
    /// Sending the request or reading the response body failed.
    Request,
    /// The server answered with an error status and a body that is not JSON.
    Status,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Connect => "connect",
            Self::Timeout => "timeout",
            Self::Builder => "builder",
            Self::Request => "request",
            Self::Status => "status",
        })
    }
}

/// The network call could not complete or returned a transport-level failure.
#[derive(Debug, Error)]
#[error("Transport {kind} error: {message}")]
pub struct TransportError {
    kind: TransportErrorKind,
    message: String,
    status: Option<StatusCode>,
    #[source]
    source: Option<reqwest::Error>,
}

impl TransportError {
    /// Creates a transport error without an underlying reqwest error.
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// An error status whose body could not be parsed as JSON.
    pub fn status(status: StatusCode) -> Self {
        Self {
            kind: TransportErrorKind::Status,
            message: format!("HTTP {status} with a non-JSON body"),
            status: Some(status),
            source: None,
        }
    }

    /// Category of the failure.
    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    /// HTTP status, when the server answered at all.
    pub fn http_status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Returns true for connection failures and timeouts.
    pub fn is_transient(&self) -> bool {
        matches!(
            self.kind,
            TransportErrorKind::Connect | TransportErrorKind::Timeout
        ) || self.status.is_some_and(|s| s.is_server_error())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        // The URL embeds the bot token.
        let err = err.without_url();
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else if err.is_builder() {
            TransportErrorKind::Builder
        } else {
            TransportErrorKind::Request
        };
        Self {
            kind,
            message: err.to_string(),
            status: err.status(),
            source: Some(err),
        }
    }
}

// ============================================================================
// Remote Error
// ============================================================================

/// The server answered with `"ok": false`.
#[derive(Debug, Error)]
#[error("{operation} failed with error {error_code}: {description}")]
pub struct RemoteError {
    /// Operation that failed.
    pub operation: String,
    /// Error code reported by the server, or the HTTP status if absent.
    pub error_code: i64,
    /// Human-readable description reported by the server.
    pub description: String,
    /// Seconds to wait before repeating the request, when flood control kicked in.
    pub retry_after: Option<u64>,
    /// The group was migrated to a supergroup with this id.
    pub migrate_to_chat_id: Option<i64>,
    /// Raw transport response.
    pub raw: RawResponse,
}

// ============================================================================
// Config Error
// ============================================================================

/// Error type for configuration loading and saving.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No token in the configuration file or environment.
    #[error("No bot token configured; set TGBOT_TOKEN or add \"token\" to the config file")]
    MissingToken,

    /// The API base URL is unusable.
    #[error("Invalid API base URL {url}: {reason}")]
    InvalidBaseUrl {
        /// URL that was supplied.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A configured value failed validation.
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_constraint_message_names_parameter_and_kind() {
        let err = TypeConstraintError::file("photo", "integer");
        let msg = err.to_string();
        assert!(msg.contains("photo"));
        assert!(msg.contains("integer"));
    }

    #[test]
    fn test_transport_transient() {
        assert!(TransportError::new(TransportErrorKind::Connect, "refused").is_transient());
        assert!(TransportError::new(TransportErrorKind::Timeout, "slow").is_transient());
        assert!(!TransportError::new(TransportErrorKind::Builder, "bad").is_transient());
        assert!(TransportError::status(StatusCode::BAD_GATEWAY).is_transient());
        assert!(!TransportError::status(StatusCode::NOT_FOUND).is_transient());
    }

    #[test]
    fn test_bot_error_classification() {
        let err: BotError = TransportError::new(TransportErrorKind::Connect, "refused").into();
        assert!(err.is_transport());
        assert!(!err.is_local());

        let err: BotError = ValidationError::Empty { field: "text" }.into();
        assert!(err.is_local());
        assert!(!err.is_transport());
        assert_eq!(err.retry_after(), None);
    }
}
