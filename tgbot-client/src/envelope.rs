//! Response materialization.
//!
//! Every successful dispatch produces a [`ResultEnvelope`]: the parsed JSON
//! document plus the raw transport response it came from. The raw response
//! lives in its own field, so no body key can shadow it.

use std::ops::Index;

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

/// Key a top-level non-object body is stored under.
pub const RESULT_KEY: &str = "result";

static NULL: Value = Value::Null;

// ============================================================================
// Raw Response
// ============================================================================

/// The transport response exactly as received.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl RawResponse {
    /// Creates a raw response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A header value, if present and valid text.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body bytes.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

// ============================================================================
// Result Envelope
// ============================================================================

/// Parsed response document with its raw transport response.
///
/// Body keys are reachable with [`get`](Self::get), dotted
/// [`lookup`](Self::lookup) paths, or indexing:
///
/// ```ignore
/// let envelope = bot.dispatch("getMe", Params::new(), None).await?;
/// assert_eq!(envelope["result"]["username"], "testbot");
/// assert_eq!(envelope.lookup("result.username"), Some(&json!("testbot")));
/// ```
#[derive(Debug, Clone)]
pub struct ResultEnvelope {
    body: Map<String, Value>,
    raw: RawResponse,
}

impl ResultEnvelope {
    /// Wraps a parsed document.
    ///
    /// A top-level object becomes the body. Any other value is stored
    /// under [`RESULT_KEY`].
    pub fn new(document: Value, raw: RawResponse) -> Self {
        let body = match document {
            Value::Object(map) => map,
            other => {
                debug!(
                    kind = json_kind(&other),
                    "Wrapping non-object response body under \"result\""
                );
                let mut map = Map::new();
                map.insert(RESULT_KEY.to_string(), other);
                map
            }
        };
        Self { body, raw }
    }

    /// Parses the raw body as JSON.
    pub fn parse(raw: RawResponse) -> Result<Self, serde_json::Error> {
        let document: Value = serde_json::from_slice(raw.body())?;
        Ok(Self::new(document, raw))
    }

    /// Returns true if the body carries `"ok": true`.
    pub fn is_ok(&self) -> bool {
        self.body.get("ok").and_then(Value::as_bool) == Some(true)
    }

    /// The `result` value, if present.
    pub fn result(&self) -> Option<&Value> {
        self.body.get(RESULT_KEY)
    }

    /// The server's `description`, if present.
    pub fn description(&self) -> Option<&str> {
        self.body.get("description").and_then(Value::as_str)
    }

    /// The server's `error_code`, if present.
    pub fn error_code(&self) -> Option<i64> {
        self.body.get("error_code").and_then(Value::as_i64)
    }

    /// A top-level body key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// Follows a dotted path such as `result.from.id` or `result.0.update_id`.
    ///
    /// Numeric segments index into arrays.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.body.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// The parsed body.
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// The raw transport response.
    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    /// Decodes `result` into a typed value. A missing `result` decodes as null.
    pub fn result_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(self.result().unwrap_or(&NULL))
    }

    /// Consumes the envelope, returning the body and the raw response.
    pub fn into_parts(self) -> (Map<String, Value>, RawResponse) {
        (self.body, self.raw)
    }
}

impl Index<&str> for ResultEnvelope {
    type Output = Value;

    /// Missing keys index as `null`, as with [`serde_json::Value`].
    fn index(&self, key: &str) -> &Value {
        self.body.get(key).unwrap_or(&NULL)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
