// crates/lifecycle-probe-core/src/core/mod.rs
// ============================================================================
// Module: Lifecycle Probe Core Types
// Description: Canonical contract, state, and report structures.
// Purpose: Provide stable, serializable types for suites and run records.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define expectation contracts, run-scoped state, scenario
//! descriptors, and run reports. These types are the canonical source of
//! truth for any derived surfaces (CLI rendering, JSON reports).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod contract;
pub mod identifiers;
pub mod report;
pub mod scenario;
pub mod state;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use contract::ContractDiagnostic;
pub use contract::ExpectationContract;
pub use contract::FieldExpectation;
pub use contract::FieldPath;
pub use contract::FieldRule;
pub use contract::Verdict;
pub use identifiers::AuthToken;
pub use identifiers::HandleRole;
pub use identifiers::Ordinal;
pub use identifiers::ResourceId;
pub use identifiers::ScenarioId;
pub use report::ErrorDetail;
pub use report::ErrorKind;
pub use report::Outcome;
pub use report::RunReport;
pub use report::RunSummary;
pub use report::ScenarioResult;
pub use scenario::ScenarioDescriptor;
pub use state::CredentialState;
pub use state::CredentialStore;
pub use state::HandleRecord;
pub use state::HandleRegistry;
pub use state::RunContext;
pub use state::StateError;
