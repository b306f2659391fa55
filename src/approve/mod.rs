//! The approve flow: request construction, flow state, and the controller
//! that issues the authorization call.

mod controller;
mod request;
mod state;

pub use controller::{ApproveFlowController, ApproveOutcome, FlowState};
pub use request::ApproveRequest;
pub use state::generate_state_token;
