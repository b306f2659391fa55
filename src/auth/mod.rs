//! Auth header injection for the authorization request.
//!
//! The credential is passed in explicitly; nothing here reads ambient state.

mod bearer;
mod provider;

pub use bearer::BearerTokenAuth;
pub use provider::{AuthHeaderProvider, HeaderTokenAuth};
