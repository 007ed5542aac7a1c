// crates/lifecycle-probe-core/src/lib.rs
// ============================================================================
// Module: Lifecycle Probe Core Library
// Description: Public API surface for the Lifecycle Probe engine.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Lifecycle Probe core provides sequential, stateful verification of CRUD
//! resource lifecycles behind token authentication. Scenarios thread shared
//! run state through an explicit context, responses are checked against
//! declarative expectation contracts, and every scenario runs exactly once
//! regardless of earlier failures. Transport and frontends integrate through
//! explicit interfaces rather than embedding into the engine.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::ApiClient;
pub use interfaces::ApiRequest;
pub use interfaces::ApiResponse;
pub use interfaces::Method;
pub use interfaces::NoopObserver;
pub use interfaces::RunObserver;
pub use interfaces::Scenario;
pub use interfaces::ScenarioError;
pub use interfaces::TransportError;
pub use runtime::RunPhase;
pub use runtime::SuiteError;
pub use runtime::SuiteRunner;
pub use runtime::check_response;
pub use runtime::resolve_field;
