// crates/lifecycle-probe-config/src/lib.rs
// ============================================================================
// Module: Lifecycle Probe Config
// Description: Environment-backed run configuration for the probe.
// Purpose: Centralize target, credential, and limit settings with strict parsing.
// Dependencies: thiserror, url
// ============================================================================

//! ## Overview
//! Run settings are read from environment variables with strict UTF-8
//! enforcement and fail-closed validation; every setting has a default aimed
//! at the canonical practice target, so a bare environment yields a working
//! configuration. Frontends may overlay individual settings after loading.
//! Invariants:
//! - Invalid or empty environment values fail the load rather than degrade.
//! - The base URL is always an absolute `http(s)` URL after loading.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::ConfigError;
pub use env::DEFAULT_BASE_URL;
pub use env::DEFAULT_PASSWORD;
pub use env::DEFAULT_TIMEOUT_MS;
pub use env::DEFAULT_USERNAME;
pub use env::ProbeEnv;
pub use env::RunSettings;
pub use env::read_env_strict;
