// crates/lifecycle-probe-client/src/lib.rs
// ============================================================================
// Module: Lifecycle Probe Client
// Description: Blocking HTTP transport for lifecycle scenario execution.
// Purpose: Deliver scenario requests to the target service and normalize replies.
// Dependencies: lifecycle-probe-core, reqwest, serde_json
// ============================================================================

//! ## Overview
//! This crate ships the production [`ApiClient`] implementation backed by a
//! blocking `reqwest` client. The adapter joins relative scenario paths onto a
//! validated base URL, renders credentials as a `token` cookie, and reads
//! response bodies under a hard size cap before handing them to the checker.
//! Invariants:
//! - Any completed HTTP exchange is `Ok`, whatever the response status.
//! - Response bodies are read up to a configured cap and never unbounded.
//! - Cleartext `http` targets are rejected unless explicitly allowed.
//!
//! [`ApiClient`]: lifecycle_probe_core::ApiClient

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod http;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use http::HttpApiClient;
pub use http::HttpClientConfig;
