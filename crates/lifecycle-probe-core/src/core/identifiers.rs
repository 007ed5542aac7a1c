// crates/lifecycle-probe-core/src/core/identifiers.rs
// ============================================================================
// Module: Lifecycle Probe Identifiers
// Description: Canonical opaque identifiers for scenarios, tokens, and handles.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical identifiers used throughout
//! Lifecycle Probe. Identifiers are opaque and serialize as numbers or
//! strings on the wire. Ordinals enforce a non-zero, 1-based invariant at
//! construction boundaries because execution order is keyed on them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::num::NonZeroU32;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Scenario identifier naming one ordered test case.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(String);

impl ScenarioId {
    /// Creates a new scenario identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ScenarioId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ScenarioId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Execution ordinal assigning a scenario its place in the run order.
///
/// # Invariants
/// - Always >= 1 (non-zero, 1-based).
/// - Unique within one suite; uniqueness is enforced by the suite runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ordinal(NonZeroU32);

impl Ordinal {
    /// Creates a new ordinal from a non-zero value.
    #[must_use]
    pub const fn new(ordinal: NonZeroU32) -> Self {
        Self(ordinal)
    }

    /// Creates an ordinal from a raw value (returns `None` if zero).
    #[must_use]
    pub fn from_raw(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Returns the raw ordinal value (always >= 1).
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.get().fmt(f)
    }
}

/// Opaque authorization token issued by the system under test.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
/// - Absence of authorization is modeled by credential state, never by a
///   sentinel token value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new authorization token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for AuthToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AuthToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Logical role under which a created resource identifier is registered.
///
/// # Invariants
/// - Closed set; wire form is the lowercase role name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleRole {
    /// The resource whose full lifecycle the run exercises.
    Primary,
    /// A throwaway resource created as setup for adversarial cases.
    Secondary,
}

impl HandleRole {
    /// Returns the stable role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for HandleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a resource created on the system under test.
///
/// # Invariants
/// - Either a non-negative integer or an opaque string, as issued by the
///   target API; the probe never fabricates identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// Numeric identifier, the common case for the booking API.
    Numeric(i64),
    /// String identifier for targets that issue opaque keys.
    Text(String),
}

impl ResourceId {
    /// Returns the numeric value when this identifier is numeric.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Numeric(id) => Some(*id),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => id.fmt(f),
            Self::Text(id) => id.fmt(f),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
