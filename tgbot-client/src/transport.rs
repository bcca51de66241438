//! HTTP transport.
//!
//! A thin wrapper over `reqwest` that issues the two request shapes the Bot
//! API uses: URL-encoded forms and multipart uploads. TLS certificates are
//! always verified. Request URLs contain the bot token, so they are never
//! recorded in spans or events.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use tracing::{debug, instrument};

use crate::envelope::RawResponse;
use crate::error::TransportError;
use crate::file::FileAttachment;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent string for tgbot.
const USER_AGENT: &str = concat!("tgbot/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client wrapper with a request deadline and tracing.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let inner = Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { inner, timeout })
    }

    /// The default deadline for one request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POSTs an `application/x-www-form-urlencoded` body.
    ///
    /// `deadline` overrides the client timeout for this request.
    #[instrument(level = "debug", skip_all, fields(fields = form.len()))]
    pub async fn post_form(
        &self,
        url: &str,
        form: &[(String, String)],
        deadline: Option<Duration>,
    ) -> Result<RawResponse, TransportError> {
        let request = self.inner.post(url).form(form);
        self.send(request, deadline).await
    }

    /// POSTs a `multipart/form-data` body: every field as a text part and
    /// the attachment as a file part named after its parameter.
    #[instrument(
        level = "debug",
        skip_all,
        fields(fields = form.len(), file_field = %attachment.field, file_len = attachment.file.bytes().len())
    )]
    pub async fn post_multipart(
        &self,
        url: &str,
        form: Vec<(String, String)>,
        attachment: FileAttachment,
        deadline: Option<Duration>,
    ) -> Result<RawResponse, TransportError> {
        let mut multipart = form
            .into_iter()
            .fold(Form::new(), |multipart, (name, value)| multipart.text(name, value));

        let FileAttachment { field, file } = attachment;
        let (filename, bytes, mime_type) = file.into_parts();
        let mut part = Part::bytes(bytes).file_name(filename);
        if let Some(mime_type) = mime_type {
            part = part.mime_str(&mime_type)?;
        }
        multipart = multipart.part(field, part);

        let request = self.inner.post(url).multipart(multipart);
        self.send(request, deadline).await
    }

    async fn send(
        &self,
        request: RequestBuilder,
        deadline: Option<Duration>,
    ) -> Result<RawResponse, TransportError> {
        let request = match deadline {
            Some(deadline) => request.timeout(deadline),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        debug!(status = %status, bytes = body.len(), "Response received");

        Ok(RawResponse::new(status, headers, body))
    }
}
