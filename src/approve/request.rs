//! Authorization request construction.

use url::Url;

use crate::application::Application;
use crate::error::Error;
use crate::http::AUTHORIZE_PATH;

/// A user's pending consent decision for a third-party application.
///
/// Carries the application being approved plus the optional per-request
/// overrides: a redirect target that takes precedence over the application
/// default, and an opaque CSRF `state` token passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveRequest {
    pub application: Application,
    pub redirect_uri: Option<String>,
    pub state: Option<String>,
}

impl ApproveRequest {
    /// Create a request for the given application with no overrides.
    pub fn new(application: Application) -> Self {
        Self {
            application,
            redirect_uri: None,
            state: None,
        }
    }

    /// Override the redirect target for this request.
    pub fn with_redirect_uri(mut self, redirect_uri: &str) -> Self {
        self.redirect_uri = Some(redirect_uri.to_string());
        self
    }

    /// Attach a CSRF state token to this request.
    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    /// The redirect target sent to the endpoint: the request override when
    /// present, the application default otherwise.
    pub fn effective_redirect_uri(&self) -> &str {
        self.redirect_uri
            .as_deref()
            .unwrap_or(&self.application.redirect_uri)
    }

    /// Build the full authorization endpoint URL for this request.
    pub(crate) fn authorize_url(&self, base_url: &str) -> Result<Url, Error> {
        let mut url = Url::parse(base_url)?.join(AUTHORIZE_PATH)?;

        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.application.client_id)
            .append_pair("redirect_uri", self.effective_redirect_uri());

        if let Some(state) = &self.state {
            url.query_pairs_mut().append_pair("state", state);
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Account;

    fn test_application() -> Application {
        Application {
            name: "Test App".to_string(),
            client_id: "client_123".to_string(),
            redirect_uri: "https://example.com/callback".to_string(),
            account: Account {
                id: "acc_1".to_string(),
                name: "Owner".to_string(),
                slug: "owner".to_string(),
                is_incognito: false,
            },
        }
    }

    #[test]
    fn test_effective_redirect_uri_default() {
        let request = ApproveRequest::new(test_application());
        assert_eq!(
            request.effective_redirect_uri(),
            "https://example.com/callback"
        );
    }

    #[test]
    fn test_effective_redirect_uri_override() {
        let request =
            ApproveRequest::new(test_application()).with_redirect_uri("https://other.example/cb");
        assert_eq!(request.effective_redirect_uri(), "https://other.example/cb");
    }

    #[test]
    fn test_authorize_url_parameters() {
        let request = ApproveRequest::new(test_application()).with_state("csrf_token");
        let url = request.authorize_url("https://platform.example").unwrap();

        assert_eq!(url.path(), "/api/oauth/authorize");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert!(pairs.contains(&("response_type".to_string(), "code".to_string())));
        assert!(pairs.contains(&("client_id".to_string(), "client_123".to_string())));
        assert!(pairs.contains(&(
            "redirect_uri".to_string(),
            "https://example.com/callback".to_string()
        )));
        assert!(pairs.contains(&("state".to_string(), "csrf_token".to_string())));
    }

    #[test]
    fn test_authorize_url_omits_absent_state() {
        let request = ApproveRequest::new(test_application());
        let url = request.authorize_url("https://platform.example").unwrap();

        assert!(url.query_pairs().all(|(k, _)| k != "state"));
    }

    #[test]
    fn test_authorize_url_invalid_base() {
        let request = ApproveRequest::new(test_application());
        let result = request.authorize_url("not a url");
        assert!(result.is_err());
    }
}
