// crates/lifecycle-probe-booking/tests/common/mod.rs
// ============================================================================
// Module: Common Test Fixtures
// Description: Scripted client fake and context builders for scenario tests.
// Purpose: Drive scenarios offline with queued replies and a request log.
// Dependencies: lifecycle-probe-core, serde_json
// ============================================================================

//! ## Overview
//! This module provides the scripted client fake shared by the scenario test
//! binaries, plus builders for contexts preloaded with run state. The fake
//! answers each request from a fixed reply queue and records every request it
//! sees, so tests can assert both the verdict and the exact wire traffic.

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::VecDeque;
use std::sync::Mutex;

use lifecycle_probe_core::ApiClient;
use lifecycle_probe_core::ApiRequest;
use lifecycle_probe_core::ApiResponse;
use lifecycle_probe_core::AuthToken;
use lifecycle_probe_core::HandleRole;
use lifecycle_probe_core::Ordinal;
use lifecycle_probe_core::ResourceId;
use lifecycle_probe_core::RunContext;
use lifecycle_probe_core::TransportError;
use serde_json::Value;

// ============================================================================
// SECTION: Scripted Client
// ============================================================================

/// Client fake that answers from a queue and records every request.
pub struct ScriptedClient {
    /// Replies handed out in order; exhaustion yields a request error.
    replies: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    /// Requests observed, in send order.
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedClient {
    /// Creates a client that will answer with the given replies in order.
    #[must_use]
    pub fn new(replies: Vec<Result<ApiResponse, TransportError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns the requests observed so far, in send order.
    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

impl ApiClient for ScriptedClient {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().expect("request log poisoned").push(request.clone());
        self.replies
            .lock()
            .expect("reply queue poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("script exhausted".to_string())))
    }
}

// ============================================================================
// SECTION: Builders
// ============================================================================

/// Builds a successful JSON reply.
#[must_use]
pub fn json_reply(status: u16, body: Value) -> Result<ApiResponse, TransportError> {
    Ok(ApiResponse::new(status, Some(body)))
}

/// Builds a successful bodyless reply.
#[must_use]
pub fn empty_reply(status: u16) -> Result<ApiResponse, TransportError> {
    Ok(ApiResponse::new(status, None))
}

/// Builds an ordinal from a raw test value.
#[must_use]
pub fn ordinal(raw: u32) -> Ordinal {
    Ordinal::from_raw(raw).expect("test ordinals are non-zero")
}

/// Builds a context holding a granted credential.
#[must_use]
pub fn granted_context(token: &str) -> RunContext {
    let mut ctx = RunContext::new();
    ctx.credentials.record_grant(AuthToken::new(token), ordinal(1));
    ctx
}

/// Records a primary booking handle on the given context.
pub fn record_primary(ctx: &mut RunContext, id: i64) {
    ctx.handles.record(HandleRole::Primary, ResourceId::Numeric(id), ordinal(2));
}
