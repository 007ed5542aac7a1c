// crates/lifecycle-probe-core/src/core/scenario.rs
// ============================================================================
// Module: Scenario Descriptors
// Description: Identity and ordering metadata for one test scenario.
// Purpose: Give the suite runner a stable, explicit execution order.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A scenario descriptor names one test case and pins its place in the run
//! order. Ordering is an explicit total order over unique ordinals declared
//! at construction; nothing is derived from registration order, annotations,
//! or source position.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::Ordinal;
use crate::core::identifiers::ScenarioId;

// ============================================================================
// SECTION: Descriptor
// ============================================================================

/// Identity and ordering metadata for one scenario.
///
/// # Invariants
/// - Ordinals are unique within a suite; duplicates are rejected when the
///   suite runner is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioDescriptor {
    /// Stable scenario identifier.
    pub scenario_id: ScenarioId,
    /// Position in the run order (1-based, unique).
    pub ordinal: Ordinal,
    /// Human-readable one-line description.
    pub title: String,
}

impl ScenarioDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub fn new(scenario_id: impl Into<ScenarioId>, ordinal: Ordinal, title: impl Into<String>) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            ordinal,
            title: title.into(),
        }
    }
}
