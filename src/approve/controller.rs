//! Approve flow controller: owns the consent state machine and issues the
//! authorization call.

use std::sync::{Arc, Mutex};

use log::*;

use crate::approve::ApproveRequest;
use crate::auth::AuthHeaderProvider;
use crate::error::{authorization_error, AuthorizationErrorKind, Error, ErrorKind};
use crate::http::{HttpClientBuilder, HttpClientConfig};

/// Outcome of an authorization attempt. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApproveOutcome {
    /// The endpoint granted the request; the caller navigates to the target.
    Redirecting(String),
    /// The request failed; the message is shown to the user inline.
    Failed(String),
}

/// Observable state of the consent flow.
///
/// Transitions: `Idle -> Loading -> Redirecting` (terminal) or
/// `Idle -> Loading -> Failed -> Idle` (manual retry or cancel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Loading,
    Redirecting(String),
    Failed(String),
}

impl FlowState {
    /// A redirecting flow is terminal; everything else can be re-triggered
    /// or cancelled.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Redirecting(_))
    }
}

/// Controller for a user's consent decision on a third-party application.
///
/// Issues a POST to the authorization endpoint and inspects the response
/// body; the transport never follows the endpoint's redirect. At most one
/// authorization call is in flight at a time.
pub struct ApproveFlowController {
    client: reqwest::Client,
    base_url: String,
    auth: Option<Box<dyn AuthHeaderProvider>>,
    auto_approve: bool,
    state: Arc<Mutex<FlowState>>,
}

impl ApproveFlowController {
    /// Create a new controller from the given HTTP configuration.
    pub fn new(config: HttpClientConfig) -> Result<Self, Error> {
        let base_url = config.base_url.clone();
        let client = HttpClientBuilder::with_config(config).build()?;

        Ok(Self {
            client,
            base_url,
            auth: None,
            auto_approve: false,
            state: Arc::new(Mutex::new(FlowState::Idle)),
        })
    }

    /// Attach an auth header provider applied to every authorization call.
    pub fn with_auth(mut self, auth: Box<dyn AuthHeaderProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Approve automatically on [`Self::start`], without user interaction.
    pub fn with_auto_approve(mut self) -> Self {
        self.auto_approve = true;
        self
    }

    /// Current state of the flow.
    pub fn flow_state(&self) -> FlowState {
        self.state.lock().unwrap().clone()
    }

    /// Kick off the flow.
    ///
    /// When auto-approve is set, sends the authorization request immediately;
    /// otherwise leaves the flow idle until the user triggers
    /// [`Self::authorize`]. Returns the resulting flow state.
    pub async fn start(&self, request: &ApproveRequest) -> FlowState {
        if self.auto_approve {
            self.authorize(request).await;
        }
        self.flow_state()
    }

    /// Issue the authorization call for the given request.
    ///
    /// A call while another is in flight sends nothing and leaves the flow
    /// state untouched. A flow that already resolved to a redirect is
    /// terminal and returns the same target again.
    pub async fn authorize(&self, request: &ApproveRequest) -> ApproveOutcome {
        {
            let mut state = self.state.lock().unwrap();
            match &*state {
                FlowState::Loading => {
                    debug!("Authorization already in flight; ignoring duplicate trigger");
                    return ApproveOutcome::Failed(
                        "authorization already in progress".to_string(),
                    );
                }
                FlowState::Redirecting(target) => {
                    return ApproveOutcome::Redirecting(target.clone());
                }
                _ => *state = FlowState::Loading,
            }
        }

        let outcome = match self.send_authorize(request).await {
            Ok(target) => ApproveOutcome::Redirecting(target),
            Err(e) => ApproveOutcome::Failed(user_message(&e)),
        };

        let mut state = self.state.lock().unwrap();
        *state = match &outcome {
            ApproveOutcome::Redirecting(target) => FlowState::Redirecting(target.clone()),
            ApproveOutcome::Failed(message) => FlowState::Failed(message.clone()),
        };

        outcome
    }

    /// Cancel a non-terminal flow, returning it to idle.
    ///
    /// Never produces a redirect. A flow already redirecting stays as is.
    /// An in-flight transport call is not interrupted; its outcome is
    /// recorded when it completes.
    pub fn cancel(&self) -> FlowState {
        let mut state = self.state.lock().unwrap();
        if !state.is_terminal() {
            debug!("Consent flow cancelled by caller");
            *state = FlowState::Idle;
        }
        state.clone()
    }

    /// Perform the POST to the authorization endpoint and interpret the
    /// response per the consent flow contract.
    async fn send_authorize(&self, request: &ApproveRequest) -> Result<String, Error> {
        let url = request.authorize_url(&self.base_url)?;

        debug!(
            "Requesting authorization for client {}",
            request.application.client_id
        );

        let mut builder = self.client.post(url).header(
            reqwest::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        );
        if let Some(auth) = &self.auth {
            builder = auth.authenticate(builder);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("Authorization request failed: {:?}", e);
            Error::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            let body: serde_json::Value = response.json().await.map_err(|e| {
                warn!("Failed to parse authorization response: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::Authorization(AuthorizationErrorKind::InvalidResponse),
                }
            })?;

            match body.get("redirect_uri").and_then(serde_json::Value::as_str) {
                Some(target) => {
                    info!(
                        "Authorization granted for client {}",
                        request.application.client_id
                    );
                    Ok(target.to_string())
                }
                None => Err(authorization_error(
                    AuthorizationErrorKind::InvalidResponse,
                    "authorization response missing redirect_uri",
                )),
            }
        } else {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&error_text)
                .ok()
                .and_then(|body| {
                    body.get("error_description")
                        .or_else(|| body.get("error"))
                        .and_then(serde_json::Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| "authorization request was rejected".to_string());

            warn!("Authorization endpoint returned {}: {}", status, message);
            Err(authorization_error(AuthorizationErrorKind::Denied, &message))
        }
    }
}

/// Map an error onto the message shown to the user.
///
/// Transport detail stays in the log; the endpoint's own denial message is
/// surfaced verbatim.
fn user_message(error: &Error) -> String {
    match &error.error_kind {
        ErrorKind::Http(_) => "network error".to_string(),
        ErrorKind::Config => "invalid authorization endpoint".to_string(),
        ErrorKind::Authorization(AuthorizationErrorKind::InvalidResponse) => {
            "invalid response from authorization endpoint".to_string()
        }
        ErrorKind::Authorization(AuthorizationErrorKind::Denied) => error
            .source
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "authorization request was rejected".to_string()),
    }
}
