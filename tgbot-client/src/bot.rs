//! The request dispatcher.
//!
//! [`Bot`] sends one operation per call: it encodes the parameters, POSTs
//! them to `<base>/bot<token>/<operation>`, and turns the response into a
//! [`ResultEnvelope`] or a [`BotError`]. There are no retries here; callers
//! that want them wrap the call.

use std::time::{Duration, Instant};

use serde_json::Value;
use tgbot_core::{ChatId, Message, Update, User, ValidationError};
use tracing::{debug, instrument};

use crate::credential::{ApiEndpoint, Credential};
use crate::envelope::{RawResponse, ResultEnvelope};
use crate::error::{BotError, ConfigError, RemoteError, TransportError};
use crate::file::{FileAttachment, resolve_file_param};
use crate::methods::{GetMe, GetUpdates, Method, SendMessage};
use crate::params::Params;
use crate::poller::{PollSettings, UpdatePoller};
use crate::transport::{DEFAULT_TIMEOUT_SECS, HttpClient};

// ============================================================================
// Bot Builder
// ============================================================================

/// Builder for [`Bot`].
pub struct BotBuilder {
    token: String,
    api_base: Option<String>,
    timeout: Duration,
}

impl BotBuilder {
    /// Points the bot at another API server.
    #[must_use]
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Sets the request deadline.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the settings and builds the bot.
    pub fn build(self) -> Result<Bot, ConfigError> {
        let credential = Credential::new(self.token)?;
        let endpoint = match self.api_base {
            Some(base) => ApiEndpoint::new(&base)?,
            None => ApiEndpoint::default(),
        };
        let http = HttpClient::with_timeout(self.timeout)?;

        debug!(api_base = endpoint.as_str(), "Bot client built");
        Ok(Bot {
            credential,
            endpoint,
            http,
        })
    }
}

// ============================================================================
// Bot
// ============================================================================

/// A Bot API client bound to one token.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Bot {
    credential: Credential,
    endpoint: ApiEndpoint,
    http: HttpClient,
}

impl Bot {
    /// Creates a client for the default API server.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(token).build()
    }

    /// Starts building a client.
    pub fn builder(token: impl Into<String>) -> BotBuilder {
        BotBuilder {
            token: token.into(),
            api_base: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// The bot's credential.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// The API server.
    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Sends one operation and returns the parsed response.
    ///
    /// With an attachment the body is `multipart/form-data`, otherwise it is
    /// URL-encoded. Fails with [`BotError::Remote`] when the server answers
    /// `"ok": false`.
    #[instrument(
        skip_all,
        fields(operation = %operation, params = params.len(), upload = attachment.is_some())
    )]
    pub async fn dispatch(
        &self,
        operation: &str,
        params: Params,
        attachment: Option<FileAttachment>,
    ) -> Result<ResultEnvelope, BotError> {
        self.send(operation, params, attachment, None).await
    }

    /// Dispatches an operation whose file parameter is only known at runtime.
    ///
    /// `file_param` names the parameter to resolve: a string stays a form
    /// field, an upload becomes the attachment, anything else is rejected
    /// before the request is sent.
    pub async fn call(
        &self,
        operation: &str,
        mut params: Params,
        file_param: Option<&str>,
    ) -> Result<ResultEnvelope, BotError> {
        let attachment = match file_param {
            Some(name) => resolve_file_param(&mut params, name)?,
            None => None,
        };
        self.dispatch(operation, params, attachment).await
    }

    /// Sends a typed request and decodes its result.
    #[instrument(skip(self, method), fields(operation = M::NAME))]
    pub async fn execute<M: Method>(&self, method: M) -> Result<M::Output, BotError> {
        let long_poll = method.long_poll();
        let mut params = method.into_params()?;
        let attachment = match M::FILE_PARAM {
            Some(name) => resolve_file_param(&mut params, name)?,
            None => None,
        };

        let envelope = self.send(M::NAME, params, attachment, long_poll).await?;
        envelope
            .result_as()
            .map_err(|e| BotError::decode(M::NAME, e))
    }

    /// Returns the bot's own user.
    pub async fn get_me(&self) -> Result<User, BotError> {
        self.execute(GetMe).await
    }

    /// Sends a plain text message.
    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: impl Into<String>,
    ) -> Result<Message, BotError> {
        self.execute(SendMessage::new(chat_id, text)?).await
    }

    /// Fetches pending updates.
    pub async fn get_updates(&self, request: GetUpdates) -> Result<Vec<Update>, BotError> {
        self.execute(request).await
    }

    /// Creates an update poller over this bot.
    pub fn poller(&self, settings: PollSettings) -> Result<UpdatePoller<Bot>, ValidationError> {
        UpdatePoller::with_settings(self.clone(), settings)
    }

    async fn send(
        &self,
        operation: &str,
        params: Params,
        attachment: Option<FileAttachment>,
        long_poll: Option<Duration>,
    ) -> Result<ResultEnvelope, BotError> {
        ValidationError::require_non_empty("operation", operation)?;
        let form = params.encode_form()?;
        let url = self.endpoint.method_url(&self.credential, operation);
        let deadline = long_poll.map(|extra| self.http.timeout() + extra);

        let start = Instant::now();
        let raw = match attachment {
            Some(attachment) => {
                self.http
                    .post_multipart(&url, form, attachment, deadline)
                    .await?
            }
            None => self.http.post_form(&url, &form, deadline).await?,
        };
        debug!(
            operation,
            status = raw.status().as_u16(),
            elapsed = ?start.elapsed(),
            "Dispatched"
        );

        into_envelope(operation, raw)
    }
}

// ============================================================================
// Response Handling
// ============================================================================

/// Classifies a raw response.
///
/// - JSON with `"ok": false`, or JSON on an error status: [`RemoteError`]
/// - not JSON on an error status: [`TransportError`]
/// - not JSON on a success status: [`BotError::Decode`]
fn into_envelope(operation: &str, raw: RawResponse) -> Result<ResultEnvelope, BotError> {
    let status = raw.status();
    let document: Value = match serde_json::from_slice(raw.body()) {
        Ok(document) => document,
        Err(_) if !status.is_success() => return Err(TransportError::status(status).into()),
        Err(e) => return Err(BotError::decode(operation, e)),
    };

    let envelope = ResultEnvelope::new(document, raw);
    let failed = envelope.get("ok").and_then(Value::as_bool) == Some(false);
    if failed || !status.is_success() {
        return Err(remote_error(operation, envelope).into());
    }
    Ok(envelope)
}

fn remote_error(operation: &str, envelope: ResultEnvelope) -> RemoteError {
    let status = envelope.raw().status();
    let error_code = envelope
        .error_code()
        .unwrap_or_else(|| i64::from(status.as_u16()));
    let description = envelope.description().map_or_else(
        || status.canonical_reason().unwrap_or("unknown error").to_string(),
        str::to_string,
    );
    let retry_after = envelope
        .lookup("parameters.retry_after")
        .and_then(Value::as_u64);
    let migrate_to_chat_id = envelope
        .lookup("parameters.migrate_to_chat_id")
        .and_then(Value::as_i64);

    debug!(operation, error_code, "Remote error");
    RemoteError {
        operation: operation.to_string(),
        error_code,
        description,
        retry_after,
        migrate_to_chat_id,
        raw: envelope.into_parts().1,
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use reqwest::header::HeaderMap;

    use super::*;
    use crate::error::TransportErrorKind;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse::new(
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            body.as_bytes().to_vec(),
        )
    }

    #[test]
    fn test_ok_document() {
        let envelope = into_envelope("getMe", raw(200, r#"{"ok":true,"result":{"id":1}}"#)).unwrap();
        assert_eq!(envelope["result"]["id"], 1);
    }

    #[test]
    fn test_failure_document_is_remote_error() {
        let err = into_envelope(
            "sendMessage",
            raw(
                429,
                r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 5","parameters":{"retry_after":5}}"#,
            ),
        )
        .unwrap_err();

        let BotError::Remote(remote) = err else {
            panic!("expected remote error, got {err:?}");
        };
        assert_eq!(remote.operation, "sendMessage");
        assert_eq!(remote.error_code, 429);
        assert_eq!(remote.retry_after, Some(5));
        assert_eq!(remote.raw.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_ok_false_on_success_status() {
        let err = into_envelope("getChat", raw(200, r#"{"ok":false,"description":"nope"}"#)).unwrap_err();
        let BotError::Remote(remote) = err else {
            panic!("expected remote error");
        };
        assert_eq!(remote.error_code, 200);
        assert_eq!(remote.description, "nope");
    }

    #[test]
    fn test_migrated_group() {
        let err = into_envelope(
            "sendMessage",
            raw(
                400,
                r#"{"ok":false,"error_code":400,"description":"group migrated","parameters":{"migrate_to_chat_id":-1001}}"#,
            ),
        )
        .unwrap_err();
        let BotError::Remote(remote) = err else {
            panic!("expected remote error");
        };
        assert_eq!(remote.migrate_to_chat_id, Some(-1001));
    }

    #[test]
    fn test_non_json_error_status_is_transport() {
        let err = into_envelope("getMe", raw(502, "<html>Bad Gateway</html>")).unwrap_err();
        let BotError::Transport(transport) = err else {
            panic!("expected transport error");
        };
        assert_eq!(transport.kind(), TransportErrorKind::Status);
        assert_eq!(transport.http_status(), Some(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn test_non_json_success_is_decode_error() {
        let err = into_envelope("getMe", raw(200, "not json")).unwrap_err();
        assert!(matches!(err, BotError::Decode { .. }));
    }

    #[test]
    fn test_top_level_array_is_wrapped() {
        let envelope = into_envelope("getUpdates", raw(200, r#"[{"update_id":3}]"#)).unwrap();
        assert_eq!(envelope["result"][0]["update_id"], 3);
    }

    #[tokio::test]
    async fn test_empty_operation_fails_before_sending() {
        let bot = Bot::builder("123:ABC")
            .api_base("http://127.0.0.1:1")
            .build()
            .unwrap();
        let err = bot.dispatch("", Params::new(), None).await.unwrap_err();
        assert!(matches!(err, BotError::Validation(ValidationError::Empty { field: "operation" })));
    }

    #[tokio::test]
    async fn test_wrong_file_kind_fails_before_sending() {
        let bot = Bot::builder("123:ABC")
            .api_base("http://127.0.0.1:1")
            .build()
            .unwrap();
        let params = Params::new().with("chat_id", 1_i64).with("photo", 3.5);
        let err = bot.call("sendPhoto", params, Some("photo")).await.unwrap_err();
        let BotError::TypeConstraint(err) = err else {
            panic!("expected type constraint error");
        };
        assert_eq!(err.parameter, "photo");
        assert_eq!(err.actual, "float");
    }

    #[test]
    fn test_builder_rejects_bad_input() {
        assert!(matches!(Bot::new(""), Err(ConfigError::Validation(_))));
        assert!(matches!(
            Bot::builder("t").api_base("nope").build(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_debug_masks_token() {
        let bot = Bot::new("123456789:SECRETSECRETSECRET").unwrap();
        let debug = format!("{bot:?}");
        assert!(!debug.contains("SECRETSECRETSECRET"));
    }
}
