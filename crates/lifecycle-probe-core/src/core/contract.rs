// crates/lifecycle-probe-core/src/core/contract.rs
// ============================================================================
// Module: Expectation Contracts
// Description: Declarative expected outcomes for probed HTTP responses.
// Purpose: Provide stable, serializable contract and diagnostic types.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! An expectation contract declares the outcome a scenario demands from the
//! system under test: one expected status code plus an ordered list of field
//! rules. Contracts are pure values; evaluation lives in
//! `runtime::checker`. Diagnostics are structured so reports can render
//! expected-versus-actual without string parsing.
//! Invariants:
//! - Field rules are checked in declaration order, only after the status
//!   matches.
//! - A missing field on a body that should contain it is a failure naming
//!   the path, never a silent pass.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Field Paths
// ============================================================================

/// Dotted path selecting one field inside a JSON response body.
///
/// # Invariants
/// - Segments are separated by `.` and matched against object keys only;
///   array indexing is not part of the contract model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// Creates a new field path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the dot-separated segments of the path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for FieldPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FieldPath {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Field Expectations
// ============================================================================

/// Expectation applied to one resolved field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldExpectation {
    /// Exact JSON value equality; no fuzzy matching.
    Equals {
        /// Expected value.
        expected: Value,
    },
    /// Field must be an integer strictly greater than zero.
    PositiveInteger,
    /// Field must be a non-empty string.
    NonEmptyString,
    /// Path must not resolve to any value.
    Absent,
}

/// One field rule inside an expectation contract.
///
/// # Invariants
/// - Rules are evaluated in the order they are declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Path of the field under expectation.
    pub path: FieldPath,
    /// Expectation applied to the resolved value.
    pub expectation: FieldExpectation,
}

impl FieldRule {
    /// Creates a rule expecting exact equality with `expected`.
    #[must_use]
    pub fn equals(path: impl Into<FieldPath>, expected: Value) -> Self {
        Self {
            path: path.into(),
            expectation: FieldExpectation::Equals {
                expected,
            },
        }
    }

    /// Creates a rule expecting a positive integer.
    #[must_use]
    pub fn positive_integer(path: impl Into<FieldPath>) -> Self {
        Self {
            path: path.into(),
            expectation: FieldExpectation::PositiveInteger,
        }
    }

    /// Creates a rule expecting a non-empty string.
    #[must_use]
    pub fn non_empty_string(path: impl Into<FieldPath>) -> Self {
        Self {
            path: path.into(),
            expectation: FieldExpectation::NonEmptyString,
        }
    }

    /// Creates a rule expecting the path to be absent.
    #[must_use]
    pub fn absent(path: impl Into<FieldPath>) -> Self {
        Self {
            path: path.into(),
            expectation: FieldExpectation::Absent,
        }
    }
}

// ============================================================================
// SECTION: Contracts
// ============================================================================

/// Declarative expected outcome for one probed response.
///
/// # Invariants
/// - The status code is checked before any field rule; a status mismatch
///   short-circuits field evaluation entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectationContract {
    /// Expected HTTP status code.
    pub status: u16,
    /// Ordered field rules applied once the status matches.
    pub fields: Vec<FieldRule>,
}

impl ExpectationContract {
    /// Creates a contract expecting only a status code.
    #[must_use]
    pub const fn status_only(status: u16) -> Self {
        Self {
            status,
            fields: Vec::new(),
        }
    }

    /// Creates a contract expecting a status code and field rules.
    #[must_use]
    pub const fn new(status: u16, fields: Vec<FieldRule>) -> Self {
        Self {
            status,
            fields,
        }
    }
}

// ============================================================================
// SECTION: Diagnostics
// ============================================================================

/// Structured description of the first contract violation observed.
///
/// # Invariants
/// - Variants are stable for serialization and report rendering.
/// - Exactly one violation is captured per check; later rules are not
///   evaluated once a violation is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContractDiagnostic {
    /// Observed status code differs from the expected one.
    StatusMismatch {
        /// Expected HTTP status code.
        expected: u16,
        /// Observed HTTP status code.
        actual: u16,
    },
    /// Resolved field value differs from the expected value.
    FieldMismatch {
        /// Path of the mismatched field.
        path: FieldPath,
        /// Expected value.
        expected: Value,
        /// Observed value.
        actual: Value,
    },
    /// Declared field path did not resolve in the body.
    FieldMissing {
        /// Path that failed to resolve.
        path: FieldPath,
    },
    /// Field expected to be absent resolved to a value.
    FieldUnexpected {
        /// Path that unexpectedly resolved.
        path: FieldPath,
        /// Observed value.
        actual: Value,
    },
    /// Field resolved but is not a positive integer.
    FieldNotPositive {
        /// Path of the offending field.
        path: FieldPath,
        /// Observed value.
        actual: Value,
    },
    /// Field resolved but is not a non-empty string.
    FieldNotText {
        /// Path of the offending field.
        path: FieldPath,
        /// Observed value.
        actual: Value,
    },
    /// Contract declares field rules but the body is not a JSON document.
    BodyNotJson,
}

impl fmt::Display for ContractDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StatusMismatch {
                expected,
                actual,
            } => {
                write!(f, "status mismatch: expected {expected}, observed {actual}")
            }
            Self::FieldMismatch {
                path,
                expected,
                actual,
            } => {
                write!(f, "field mismatch at {path}: expected {expected}, observed {actual}")
            }
            Self::FieldMissing {
                path,
            } => {
                write!(f, "field missing: {path}")
            }
            Self::FieldUnexpected {
                path,
                actual,
            } => {
                write!(f, "field expected absent at {path}, observed {actual}")
            }
            Self::FieldNotPositive {
                path,
                actual,
            } => {
                write!(f, "field at {path} is not a positive integer: observed {actual}")
            }
            Self::FieldNotText {
                path,
                actual,
            } => {
                write!(f, "field at {path} is not a non-empty string: observed {actual}")
            }
            Self::BodyNotJson => {
                write!(f, "response body is not a JSON document")
            }
        }
    }
}

// ============================================================================
// SECTION: Verdicts
// ============================================================================

/// Result of checking one response against its contract.
///
/// # Invariants
/// - `Fail` always carries the first violation found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// The response satisfies the contract.
    Pass,
    /// The response violates the contract.
    Fail {
        /// First violation observed.
        diagnostic: ContractDiagnostic,
    },
}

impl Verdict {
    /// Returns `true` when the verdict is a pass.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}
