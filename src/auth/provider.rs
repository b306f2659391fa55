//! Auth header provider trait and custom-header implementation.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Trait for attaching an authentication credential to an outgoing request.
///
/// The approve flow controller holds one of these and applies it to the
/// authorization call. Implementations cover the common header patterns:
/// - `Authorization: Bearer xxx` ([`super::BearerTokenAuth`])
/// - custom header name with an optional prefix ([`HeaderTokenAuth`])
pub trait AuthHeaderProvider: Send + Sync {
    /// Apply authentication to a request builder.
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Custom header authentication.
///
/// Supports arbitrary header names and prefixes for services that do not use
/// the standard Bearer scheme.
///
/// # Examples
///
/// ```rust,ignore
/// // Authorization: Token xxx
/// let auth = HeaderTokenAuth::new(
///     "Authorization",
///     Some("Token"),
///     SecretString::from("token_here".to_string()),
/// );
/// ```
pub struct HeaderTokenAuth {
    header_name: String,
    prefix: Option<String>,
    token: SecretString,
}

impl HeaderTokenAuth {
    /// Create a new custom-header authenticator.
    ///
    /// # Arguments
    ///
    /// * `header_name` - Name of the header to set
    /// * `prefix` - Optional prefix for the header value (e.g., "Token")
    /// * `token` - The credential (stored securely)
    pub fn new(header_name: &str, prefix: Option<&str>, token: SecretString) -> Self {
        Self {
            header_name: header_name.to_string(),
            prefix: prefix
                .map(str::to_string)
                .filter(|p| !p.is_empty()),
            token,
        }
    }
}

impl AuthHeaderProvider for HeaderTokenAuth {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        let value = if let Some(prefix) = &self.prefix {
            format!("{} {}", prefix, self.token.expose_secret())
        } else {
            self.token.expose_secret().to_string()
        };

        request.header(&self.header_name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_token_auth_creation() {
        let token = SecretString::from("test_token".to_string());
        let auth = HeaderTokenAuth::new("Authorization", Some("Token"), token);

        assert_eq!(auth.header_name, "Authorization");
        assert_eq!(auth.prefix, Some("Token".to_string()));
    }

    #[test]
    fn test_empty_prefix_is_dropped() {
        let token = SecretString::from("test_token".to_string());
        let auth = HeaderTokenAuth::new("authorization", Some(""), token);

        assert_eq!(auth.prefix, None);
    }
}
