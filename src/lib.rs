//! # consent-flow
//!
//! Client-side OAuth 2.0 consent ("approve") flow:
//! - Approve flow controller that issues the authorization call and owns the
//!   flow state machine (idle -> loading -> redirecting | failed)
//! - Auth header injection for the authorization request (bearer tokens,
//!   custom header schemes)
//! - HTTP client building tuned for the flow (redirects inspected, never
//!   followed by the transport)
//! - Application/account types supplied to the consent screen
//!
//! ## Architecture
//!
//! The controller performs exactly one authorization call at a time and
//! surfaces one of two outcomes: `Redirecting(target_url)` or
//! `Failed(message)`. Navigation is always the caller's responsibility; the
//! actual authorization-code exchange lives server-side behind the
//! authorization endpoint.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use consent_flow::{
//!     approve::{ApproveFlowController, ApproveRequest},
//!     auth::BearerTokenAuth,
//!     http::HttpClientConfig,
//! };
//! ```

pub mod application;
pub mod approve;
pub mod auth;
pub mod error;
pub mod http;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
