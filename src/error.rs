//! Error types for the `consent-flow` crate.
//!
//! A root Error struct holds an error kind enum and an optional source for
//! error chaining. The kinds are what callers use to decide which message is
//! shown to the user.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for consent-flow crate.
/// Holds error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors in consent-flow.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Authorization(AuthorizationErrorKind),
    Http(HttpErrorKind),
    Config,
}

/// Errors reported by the authorization endpoint.
#[derive(Debug, PartialEq)]
pub enum AuthorizationErrorKind {
    /// The endpoint rejected the request; the message comes from the
    /// response body (`error_description` or `error`).
    Denied,
    /// The endpoint answered with a body we could not interpret.
    InvalidResponse,
}

/// Errors from the HTTP transport.
#[derive(Debug, PartialEq)]
pub enum HttpErrorKind {
    BuilderFailed,
    RequestFailed,
    Network,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Authorization(kind) => write!(f, "Authorization error: {:?}", kind),
            ErrorKind::Http(kind) => write!(f, "HTTP error: {:?}", kind),
            ErrorKind::Config => write!(f, "Configuration error"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let error_kind = if err.is_builder() {
            ErrorKind::Http(HttpErrorKind::BuilderFailed)
        } else if err.is_request() {
            ErrorKind::Http(HttpErrorKind::RequestFailed)
        } else {
            ErrorKind::Http(HttpErrorKind::Network)
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Config,
        }
    }
}

/// Helper function to create authorization errors.
pub fn authorization_error(kind: AuthorizationErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Authorization(kind),
    }
}

/// Helper function to create HTTP errors.
pub fn http_error(kind: HttpErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Http(kind),
    }
}

/// Helper function to create configuration errors.
pub fn config_error(message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_error_keeps_message() {
        let err = authorization_error(AuthorizationErrorKind::Denied, "denied");
        assert_eq!(
            err.error_kind,
            ErrorKind::Authorization(AuthorizationErrorKind::Denied)
        );
        assert_eq!(err.source.unwrap().to_string(), "denied");
    }

    #[test]
    fn test_url_parse_error_maps_to_config() {
        let err: Error = url::ParseError::EmptyHost.into();
        assert_eq!(err.error_kind, ErrorKind::Config);
    }
}
