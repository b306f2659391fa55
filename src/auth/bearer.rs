//! Standard Bearer token authentication.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

use super::AuthHeaderProvider;

/// Standard Bearer token authentication.
///
/// Uses the standard `Authorization: Bearer <token>` header pattern.
pub struct BearerTokenAuth {
    token: SecretString,
}

impl BearerTokenAuth {
    /// Create a new Bearer token authenticator.
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }

    /// Get a reference to the token.
    pub fn token(&self) -> &SecretString {
        &self.token
    }
}

impl AuthHeaderProvider for BearerTokenAuth {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(self.token.expose_secret())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_auth_creation() {
        let token = SecretString::from("test_token".to_string());
        let auth = BearerTokenAuth::new(token);

        assert_eq!(auth.token().expose_secret(), "test_token");
    }
}
