//! Bot token handling and endpoint construction.

use std::fmt;

use tgbot_core::ValidationError;
use url::Url;

use crate::error::ConfigError;

/// Default Bot API server.
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

// ============================================================================
// Credential
// ============================================================================

/// The secret bot token.
///
/// `Debug` and `Display` only ever show a masked form. The plaintext is
/// available through [`Credential::expose`], which is used to build request
/// URLs and nowhere else.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token. The token must not be empty and is kept verbatim, so
    /// surrounding whitespace is rejected rather than stripped.
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        ValidationError::require_non_empty("token", &token)?;
        ValidationError::require_trimmed("token", &token)?;
        Ok(Self(token))
    }

    /// Returns the plaintext token.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns the masked rendering used in logs and output.
    pub fn masked(&self) -> String {
        mask_token(&self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Masks a token for display: the first 7 and last 4 characters survive.
///
/// Tokens of 11 characters or fewer are fully masked.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}***{tail}")
}

// ============================================================================
// API Endpoint
// ============================================================================

/// Base URL of a Bot API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    base: String,
}

impl ApiEndpoint {
    /// Parses a base URL. Only `http` and `https` with a host are accepted.
    pub fn new(base: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: base.to_string(),
            reason: reason.to_string(),
        };

        let parsed = Url::parse(base).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if parsed.host_str().is_none() {
            return Err(invalid("no host"));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed"));
        }

        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL without a trailing slash.
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Builds `<base>/bot<token>/<operation>`.
    ///
    /// Token and operation are substituted verbatim. The result contains
    /// the plaintext token and must not be logged.
    pub fn method_url(&self, credential: &Credential, operation: &str) -> String {
        format!("{}/bot{}/{}", self.base, credential.expose(), operation)
    }
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self {
            base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "123456789:ABCdefGHIjklMNOpqrSTUvwxYZ";

    #[test]
    fn test_credential_rejects_empty() {
        assert!(Credential::new("").is_err());
        assert!(Credential::new("   ").is_err());
    }

    #[test]
    fn test_credential_is_not_normalized() {
        assert_eq!(
            Credential::new(" 123:ABC\n").unwrap_err(),
            ValidationError::SurroundingWhitespace { field: "token" }
        );
        assert_eq!(Credential::new("123:ABC").unwrap().expose(), "123:ABC");
    }

    #[test]
    fn test_credential_never_formats_plaintext() {
        let credential = Credential::new(TOKEN).unwrap();
        let debug = format!("{credential:?}");
        let display = credential.to_string();

        assert!(!debug.contains(TOKEN));
        assert!(!display.contains(TOKEN));
        assert_eq!(display, "1234567***wxYZ");
        assert_eq!(credential.expose(), TOKEN);
    }

    #[test]
    fn test_mask_short_token() {
        assert_eq!(mask_token("short"), "***");
        assert_eq!(mask_token("12345678901"), "***");
        assert_eq!(mask_token("123456789012"), "1234567***9012");
    }

    #[test]
    fn test_method_url_is_verbatim() {
        let endpoint = ApiEndpoint::new("https://api.telegram.org/").unwrap();
        let credential = Credential::new("123:ABC").unwrap();
        assert_eq!(
            endpoint.method_url(&credential, "getMe"),
            "https://api.telegram.org/bot123:ABC/getMe"
        );

        // Nothing is percent-encoded.
        assert_eq!(
            endpoint.method_url(&credential, "weird op"),
            "https://api.telegram.org/bot123:ABC/weird op"
        );
    }

    #[test]
    fn test_endpoint_with_path_prefix() {
        let endpoint = ApiEndpoint::new("http://localhost:8081/proxy").unwrap();
        let credential = Credential::new("t").unwrap();
        assert_eq!(
            endpoint.method_url(&credential, "getUpdates"),
            "http://localhost:8081/proxy/bott/getUpdates"
        );
    }

    #[test]
    fn test_endpoint_rejects_bad_urls() {
        assert!(ApiEndpoint::new("not a url").is_err());
        assert!(ApiEndpoint::new("ftp://example.com").is_err());
        assert!(ApiEndpoint::new("https://example.com/?x=1").is_err());
        assert_eq!(ApiEndpoint::default().as_str(), DEFAULT_API_BASE);
    }
}
