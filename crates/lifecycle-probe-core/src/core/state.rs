// crates/lifecycle-probe-core/src/core/state.rs
// ============================================================================
// Module: Run State
// Description: Run-scoped credential and resource handle state.
// Purpose: Thread state produced by earlier scenarios into later ones.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Run state is the connective tissue of a suite: the authentication
//! scenario records a credential, the create scenario records a resource
//! handle, and downstream scenarios consume both. State lives in an explicit
//! [`RunContext`] owned by the suite runner and passed to each scenario by
//! mutable reference. Nothing here is global and nothing is retried.
//! Invariants:
//! - At most one active credential per run; re-authentication replaces it.
//! - A failed acquisition is recorded as an explicit denial, never as a
//!   placeholder token value.
//! - Reading state never recorded is a [`StateError`], reported as a
//!   suite-ordering defect rather than an API failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::AuthToken;
use crate::core::identifiers::HandleRole;
use crate::core::identifiers::Ordinal;
use crate::core::identifiers::ResourceId;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error raised when a scenario consumes run state never produced.
///
/// # Invariants
/// - Always indicates a defect in suite ordering or an upstream scenario
///   that failed to record its outputs, never a defect in the system under
///   test.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// A resource handle was requested for a role never recorded.
    #[error("resource handle never recorded for role: {role}")]
    UnresolvedHandle {
        /// Role the scenario asked for.
        role: HandleRole,
    },
    /// A token was requested before any authentication attempt.
    #[error("credential requested before any authentication attempt")]
    UnresolvedCredential,
    /// A token was requested but the recorded attempt was denied.
    #[error("credential requested but the authentication attempt was denied")]
    CredentialDenied,
}

// ============================================================================
// SECTION: Credential Store
// ============================================================================

/// Current credential state of the run.
///
/// # Invariants
/// - `Granted` and `Denied` both record the ordinal of the scenario that
///   performed the acquisition attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CredentialState {
    /// No authentication attempt has been recorded yet.
    Unset,
    /// Authentication succeeded and issued a usable token.
    Granted {
        /// Issued authorization token.
        token: AuthToken,
        /// Ordinal of the scenario that acquired the token.
        acquired_at: Ordinal,
    },
    /// Authentication was attempted and explicitly denied.
    Denied {
        /// Ordinal of the scenario that observed the denial.
        acquired_at: Ordinal,
    },
}

impl CredentialState {
    /// Returns the issued token when one is present.
    #[must_use]
    pub const fn token(&self) -> Option<&AuthToken> {
        match self {
            Self::Granted {
                token, ..
            } => Some(token),
            Self::Unset
            | Self::Denied {
                ..
            } => None,
        }
    }
}

/// Run-scoped holder of the current authorization credential.
///
/// # Invariants
/// - Holds exactly one [`CredentialState`]; recording replaces the previous
///   state wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialStore {
    /// Current credential state.
    state: CredentialState,
}

impl CredentialStore {
    /// Creates an empty store with no recorded attempt.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: CredentialState::Unset,
        }
    }

    /// Records a successful token acquisition.
    pub fn record_grant(&mut self, token: AuthToken, acquired_at: Ordinal) {
        self.state = CredentialState::Granted {
            token,
            acquired_at,
        };
    }

    /// Records an explicit authentication denial.
    pub fn record_denial(&mut self, acquired_at: Ordinal) {
        self.state = CredentialState::Denied {
            acquired_at,
        };
    }

    /// Returns the current credential state without failing.
    ///
    /// Absence is a valid, expected value; scenarios that must distinguish
    /// "granted" from "denied" read this accessor.
    #[must_use]
    pub const fn state(&self) -> &CredentialState {
        &self.state
    }

    /// Returns the issued token or fails when no usable token exists.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::UnresolvedCredential`] when no authentication
    /// attempt was recorded, and [`StateError::CredentialDenied`] when the
    /// recorded attempt was denied.
    pub fn require_token(&self) -> Result<&AuthToken, StateError> {
        match &self.state {
            CredentialState::Granted {
                token, ..
            } => Ok(token),
            CredentialState::Unset => Err(StateError::UnresolvedCredential),
            CredentialState::Denied {
                ..
            } => Err(StateError::CredentialDenied),
        }
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SECTION: Resource Handle Registry
// ============================================================================

/// Recorded identifier of a resource created during the run.
///
/// # Invariants
/// - Recorded only after the creating scenario verified its contract.
/// - `deleted` marks semantic destruction; the identifier stays readable so
///   read-after-delete scenarios can target exactly the created resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleRecord {
    /// Identifier issued by the system under test.
    pub id: ResourceId,
    /// Ordinal of the scenario that recorded the handle.
    pub recorded_at: Ordinal,
    /// Whether a delete scenario has since destroyed the resource.
    pub deleted: bool,
}

/// Run-scoped registry of created resource identifiers, keyed by role.
///
/// # Invariants
/// - One record per role; re-recording a role replaces the previous record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HandleRegistry {
    /// Recorded handles keyed by logical role.
    handles: BTreeMap<HandleRole, HandleRecord>,
}

impl HandleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handles: BTreeMap::new(),
        }
    }

    /// Records a freshly created resource identifier under `role`.
    pub fn record(&mut self, role: HandleRole, id: ResourceId, recorded_at: Ordinal) {
        self.handles.insert(role, HandleRecord {
            id,
            recorded_at,
            deleted: false,
        });
    }

    /// Returns the record for `role` when one was recorded.
    #[must_use]
    pub fn get(&self, role: HandleRole) -> Option<&HandleRecord> {
        self.handles.get(&role)
    }

    /// Returns the record for `role` or fails when never recorded.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::UnresolvedHandle`] when no scenario recorded a
    /// handle under `role`.
    pub fn require(&self, role: HandleRole) -> Result<&HandleRecord, StateError> {
        self.handles.get(&role).ok_or(StateError::UnresolvedHandle {
            role,
        })
    }

    /// Marks the handle under `role` as semantically destroyed.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::UnresolvedHandle`] when no scenario recorded a
    /// handle under `role`.
    pub fn mark_deleted(&mut self, role: HandleRole) -> Result<(), StateError> {
        match self.handles.get_mut(&role) {
            Some(record) => {
                record.deleted = true;
                Ok(())
            }
            None => Err(StateError::UnresolvedHandle {
                role,
            }),
        }
    }
}

// ============================================================================
// SECTION: Run Context
// ============================================================================

/// Explicit run state handed to every scenario by the suite runner.
///
/// # Invariants
/// - Owned by the suite runner; scenarios receive a mutable borrow for the
///   duration of one execution and never retain it.
/// - Mutated by at most one scenario at a time because execution is strictly
///   sequential.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunContext {
    /// Credential state shared across the run.
    pub credentials: CredentialStore,
    /// Resource handles shared across the run.
    pub handles: HandleRegistry,
}

impl RunContext {
    /// Creates a fresh context with no recorded state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            credentials: CredentialStore::new(),
            handles: HandleRegistry::new(),
        }
    }
}
