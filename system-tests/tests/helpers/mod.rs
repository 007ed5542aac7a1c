// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for lifecycle probe system-tests.
// Purpose: Provide the stub booking target and probe client builders.
// Dependencies: lifecycle-probe-client, serde_json, tiny_http, url
// ============================================================================

//! ## Overview
//! Shared helpers for lifecycle probe system-tests.
//! Purpose: Provide the stub booking target and probe client builders.
//! Invariants:
//! - The stub binds loopback only and shuts down when its handle drops.
//! - Helpers never contact anything beyond the in-process stub.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod probe;
pub mod stub;
