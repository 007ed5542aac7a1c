// crates/lifecycle-probe-core/src/interfaces/mod.rs
// ============================================================================
// Module: Lifecycle Probe Interfaces
// Description: Trait seams for HTTP transport, scenarios, and run observers.
// Purpose: Keep the engine independent of any concrete client or frontend.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define the seams between the sequencing engine and the world:
//! the HTTP client adapter that performs blocking calls, the scenario trait
//! implemented by each ordered test case, and the observer hooks frontends
//! use to surface progress. Implementations live in sibling crates; the
//! engine only ever sees these traits.
//! Invariants:
//! - The engine never constructs HTTP machinery itself; every call goes
//!   through [`ApiClient`].
//! - Scenario errors are values the runner records; they never abort a run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::contract::Verdict;
use crate::core::identifiers::AuthToken;
use crate::core::report::ErrorKind;
use crate::core::report::RunReport;
use crate::core::report::ScenarioResult;
use crate::core::scenario::ScenarioDescriptor;
use crate::core::state::RunContext;
use crate::core::state::StateError;

// ============================================================================
// SECTION: Request Model
// ============================================================================

/// HTTP method used by a probe request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP DELETE.
    Delete,
}

impl Method {
    /// Returns the canonical method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request issued through the client adapter.
///
/// # Invariants
/// - `path` is relative to the configured base URL and starts with `/`.
/// - When `token` is present the adapter renders it as the target's token
///   cookie; scenarios never format headers themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the base URL.
    pub path: String,
    /// JSON request body, when the method carries one.
    pub body: Option<Value>,
    /// Authorization token to attach, when the call is authenticated.
    pub token: Option<AuthToken>,
}

impl ApiRequest {
    /// Creates an unauthenticated GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            token: None,
        }
    }

    /// Creates an unauthenticated POST request with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
            token: None,
        }
    }

    /// Creates an unauthenticated PUT request with a JSON body.
    #[must_use]
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: Some(body),
            token: None,
        }
    }

    /// Creates an unauthenticated DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
            token: None,
        }
    }

    /// Attaches an authorization token to the request.
    #[must_use]
    pub fn with_token(mut self, token: AuthToken) -> Self {
        self.token = Some(token);
        self
    }
}

// ============================================================================
// SECTION: Response Model
// ============================================================================

/// One response observed through the client adapter.
///
/// # Invariants
/// - `body` is `Some` only when the payload parsed as JSON; a non-JSON or
///   empty payload is `None`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON body, when present.
    pub body: Option<Value>,
}

impl ApiResponse {
    /// Creates a response value.
    #[must_use]
    pub const fn new(status: u16, body: Option<Value>) -> Self {
        Self {
            status,
            body,
        }
    }
}

// ============================================================================
// SECTION: Transport Errors
// ============================================================================

/// Errors returned by the HTTP client adapter.
///
/// # Invariants
/// - Transport errors describe the probe's inability to complete a call;
///   they never encode an opinion about the system under test's contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The underlying client could not be constructed.
    #[error("client construction failed: {0}")]
    Build(String),
    /// The request could not be completed.
    #[error("request failed: {0}")]
    Request(String),
    /// The request exceeded the configured per-call timeout.
    #[error("request timed out: {0}")]
    Timeout(String),
    /// The response body could not be read.
    #[error("response body unreadable: {0}")]
    Body(String),
}

// ============================================================================
// SECTION: Client Adapter
// ============================================================================

/// Blocking HTTP client adapter consumed by scenarios.
pub trait ApiClient: Send + Sync {
    /// Sends one request and returns the observed response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the call cannot be completed; any
    /// completed HTTP exchange, whatever its status code, is an `Ok`
    /// response.
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

// ============================================================================
// SECTION: Scenario Seam
// ============================================================================

/// Errors that prevent a scenario from being evaluated.
///
/// # Invariants
/// - Distinct from a contract violation: an error says the verdict could not
///   be reached, not that the system under test is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    /// Run state the scenario depends on was never recorded.
    #[error(transparent)]
    State(#[from] StateError),
    /// The client adapter failed to complete a call.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A preparatory call did not produce the state the scenario needs.
    #[error("scenario setup failed: {0}")]
    Setup(String),
    /// A passing response omitted a value the scenario must capture.
    #[error("response shape unusable: {0}")]
    ResponseShape(String),
}

impl ScenarioError {
    /// Classifies the error for report rendering.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::State(_) => ErrorKind::SuiteState,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Setup(_) => ErrorKind::Setup,
            Self::ResponseShape(_) => ErrorKind::ResponseShape,
        }
    }
}

/// One ordered test case executed by the suite runner.
///
/// Implementations read and write shared run state through the context,
/// issue calls through the client adapter, and return a verdict for their
/// declared contract.
pub trait Scenario: Send + Sync {
    /// Returns identity and ordering metadata for the scenario.
    fn descriptor(&self) -> ScenarioDescriptor;

    /// Executes the scenario against the system under test.
    ///
    /// # Errors
    ///
    /// Returns a [`ScenarioError`] when the verdict could not be reached;
    /// the runner records it as an error outcome and continues the run.
    fn execute(&self, ctx: &mut RunContext, client: &dyn ApiClient) -> Result<Verdict, ScenarioError>;
}

// ============================================================================
// SECTION: Run Observer
// ============================================================================

/// Observer hooks surfaced to frontends while a run executes.
pub trait RunObserver: Send + Sync {
    /// Called immediately before a scenario executes.
    fn scenario_started(&self, descriptor: &ScenarioDescriptor);
    /// Called after a scenario's result is recorded.
    fn scenario_finished(&self, result: &ScenarioResult);
    /// Called once after the final scenario completes.
    fn run_completed(&self, report: &RunReport);
}

/// No-op observer.
///
/// # Invariants
/// - Events are intentionally discarded.
pub struct NoopObserver;

impl RunObserver for NoopObserver {
    fn scenario_started(&self, _descriptor: &ScenarioDescriptor) {}

    fn scenario_finished(&self, _result: &ScenarioResult) {}

    fn run_completed(&self, _report: &RunReport) {}
}
