// crates/lifecycle-probe-core/src/core/report.rs
// ============================================================================
// Module: Run Report
// Description: Recorded outcomes and the aggregate report for one run.
// Purpose: Provide immutable, serializable result records for reporting.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Outcomes are data, not control flow. A scenario's result is one of three
//! values: the contract held, the contract was violated, or the scenario
//! could not be evaluated at all. The suite runner records one result per
//! scenario in execution order and never mutates a recorded result. The
//! aggregate report is the single user-facing artifact of a run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::contract::ContractDiagnostic;
use crate::core::identifiers::Ordinal;
use crate::core::identifiers::ScenarioId;

// ============================================================================
// SECTION: Error Classification
// ============================================================================

/// Classification of a scenario-level error.
///
/// # Invariants
/// - Variants are stable for serialization and report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Run state consumed before any scenario produced it.
    SuiteState,
    /// The HTTP client adapter failed to complete a call.
    Transport,
    /// A preparatory call did not yield the state the scenario needs.
    Setup,
    /// A passing response omitted a value the scenario must capture.
    ResponseShape,
}

impl ErrorKind {
    /// Returns the stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuiteState => "suite_state",
            Self::Transport => "transport",
            Self::Setup => "setup",
            Self::ResponseShape => "response_shape",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured description of a scenario-level error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Error classification.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

// ============================================================================
// SECTION: Outcomes
// ============================================================================

/// Final outcome of one executed scenario.
///
/// # Invariants
/// - `Fail` means the system under test violated the scenario's contract.
/// - `Error` means the scenario could not be evaluated (transport failure,
///   ordering defect, broken setup); it says nothing about the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The observed response satisfied the contract.
    Pass,
    /// The observed response violated the contract.
    Fail {
        /// First contract violation observed.
        diagnostic: ContractDiagnostic,
    },
    /// The scenario could not be evaluated.
    Error {
        /// Structured error description.
        error: ErrorDetail,
    },
}

impl Outcome {
    /// Returns `true` when the outcome is a pass.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns the stable label for the outcome.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail {
                ..
            } => "fail",
            Self::Error {
                ..
            } => "error",
        }
    }
}

// ============================================================================
// SECTION: Results
// ============================================================================

/// Recorded result of one executed scenario.
///
/// # Invariants
/// - Immutable once recorded; the suite runner appends and never rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Identifier of the executed scenario.
    pub scenario_id: ScenarioId,
    /// Position of the scenario in the run order.
    pub ordinal: Ordinal,
    /// Recorded outcome.
    pub outcome: Outcome,
}

// ============================================================================
// SECTION: Aggregate Report
// ============================================================================

/// Pass/fail/error tallies for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of scenarios that passed.
    pub passed: usize,
    /// Number of scenarios whose contract was violated.
    pub failed: usize,
    /// Number of scenarios that could not be evaluated.
    pub errored: usize,
    /// Total number of executed scenarios.
    pub total: usize,
}

/// Aggregate report for one completed run.
///
/// # Invariants
/// - Results appear in execution order (ascending ordinal).
/// - Produced exactly once, after the final scenario completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Recorded results in execution order.
    pub results: Vec<ScenarioResult>,
}

impl RunReport {
    /// Creates a report over recorded results.
    #[must_use]
    pub const fn new(results: Vec<ScenarioResult>) -> Self {
        Self {
            results,
        }
    }

    /// Computes pass/fail/error tallies.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary {
            passed: 0,
            failed: 0,
            errored: 0,
            total: self.results.len(),
        };
        for result in &self.results {
            match result.outcome {
                Outcome::Pass => summary.passed += 1,
                Outcome::Fail {
                    ..
                } => summary.failed += 1,
                Outcome::Error {
                    ..
                } => summary.errored += 1,
            }
        }
        summary
    }

    /// Returns `true` when every recorded outcome is a pass.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|result| result.outcome.is_pass())
    }
}
