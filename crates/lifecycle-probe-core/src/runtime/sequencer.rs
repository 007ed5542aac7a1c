// crates/lifecycle-probe-core/src/runtime/sequencer.rs
// ============================================================================
// Module: Suite Runner
// Description: Sequential scenario execution with record-and-continue policy.
// Purpose: Run every scenario exactly once, in order, and aggregate results.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The suite runner owns the ordered scenario list and the run lifecycle:
//! `NotStarted` to `Running` to `Completed`. Scenarios execute strictly
//! sequentially because they share run state; order is a total order over
//! unique ordinals validated at construction. A scenario that fails its
//! contract or errors out is recorded and the run continues, so one broken
//! case never masks unrelated bugs only reachable by later cases. The run
//! produces exactly one aggregate report.
//! Invariants:
//! - Every scenario executes exactly once, in ascending ordinal order.
//! - Results are appended in execution order and never rewritten.
//! - A runner executes at most one run over its lifetime.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::contract::Verdict;
use crate::core::identifiers::Ordinal;
use crate::core::identifiers::ScenarioId;
use crate::core::report::ErrorDetail;
use crate::core::report::Outcome;
use crate::core::report::RunReport;
use crate::core::report::ScenarioResult;
use crate::core::scenario::ScenarioDescriptor;
use crate::core::state::RunContext;
use crate::interfaces::ApiClient;
use crate::interfaces::RunObserver;
use crate::interfaces::Scenario;

// ============================================================================
// SECTION: Run Phase
// ============================================================================

/// Lifecycle phase of one suite run.
///
/// # Invariants
/// - Phases only advance; there is no transition back to `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    /// The runner was constructed and has not executed.
    NotStarted,
    /// Scenarios are executing.
    Running,
    /// The final scenario completed and the report was produced.
    Completed,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by suite construction or lifecycle misuse.
///
/// # Invariants
/// - Suite errors concern the probe itself; outcomes of the system under
///   test are never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuiteError {
    /// The suite contains no scenarios.
    #[error("suite contains no scenarios")]
    Empty,
    /// Two scenarios declared the same ordinal.
    #[error("duplicate ordinal {ordinal}: {first} and {second}")]
    DuplicateOrdinal {
        /// Ordinal declared twice.
        ordinal: Ordinal,
        /// Scenario that declared the ordinal first.
        first: ScenarioId,
        /// Scenario that declared the ordinal again.
        second: ScenarioId,
    },
    /// The runner already executed its run.
    #[error("suite already ran; a runner executes exactly once")]
    AlreadyRan,
}

// ============================================================================
// SECTION: Suite Runner
// ============================================================================

/// Sequential scenario runner generic over the client adapter.
///
/// # Invariants
/// - Scenarios are held in ascending ordinal order after construction.
/// - Run state lives in a fresh [`RunContext`] per run; nothing persists
///   across runner instances.
pub struct SuiteRunner<C: ApiClient> {
    /// Client adapter shared by every scenario.
    client: C,
    /// Scenarios in ascending ordinal order.
    scenarios: Vec<Box<dyn Scenario>>,
    /// Current lifecycle phase.
    phase: RunPhase,
}

impl<C: ApiClient> SuiteRunner<C> {
    /// Creates a runner over an ordered scenario suite.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Empty`] for an empty suite and
    /// [`SuiteError::DuplicateOrdinal`] when two scenarios declare the same
    /// ordinal.
    pub fn new(client: C, mut scenarios: Vec<Box<dyn Scenario>>) -> Result<Self, SuiteError> {
        if scenarios.is_empty() {
            return Err(SuiteError::Empty);
        }
        validate_ordinals(&scenarios)?;
        scenarios.sort_by_key(|scenario| scenario.descriptor().ordinal);
        Ok(Self {
            client,
            scenarios,
            phase: RunPhase::NotStarted,
        })
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Returns descriptors for the suite in execution order.
    #[must_use]
    pub fn descriptors(&self) -> Vec<ScenarioDescriptor> {
        self.scenarios.iter().map(|scenario| scenario.descriptor()).collect()
    }

    /// Executes every scenario exactly once and produces the run report.
    ///
    /// Contract violations and scenario errors are recorded as outcomes and
    /// never abort the run.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::AlreadyRan`] when the runner has executed
    /// before; a runner performs exactly one run.
    pub fn run(&mut self, observer: &dyn RunObserver) -> Result<RunReport, SuiteError> {
        if self.phase != RunPhase::NotStarted {
            return Err(SuiteError::AlreadyRan);
        }
        self.phase = RunPhase::Running;
        let mut ctx = RunContext::new();
        let mut results = Vec::with_capacity(self.scenarios.len());
        for scenario in &self.scenarios {
            let descriptor = scenario.descriptor();
            observer.scenario_started(&descriptor);
            let outcome = match scenario.execute(&mut ctx, &self.client) {
                Ok(Verdict::Pass) => Outcome::Pass,
                Ok(Verdict::Fail {
                    diagnostic,
                }) => Outcome::Fail {
                    diagnostic,
                },
                Err(error) => Outcome::Error {
                    error: ErrorDetail {
                        kind: error.kind(),
                        message: error.to_string(),
                    },
                },
            };
            let result = ScenarioResult {
                scenario_id: descriptor.scenario_id,
                ordinal: descriptor.ordinal,
                outcome,
            };
            observer.scenario_finished(&result);
            results.push(result);
        }
        self.phase = RunPhase::Completed;
        let report = RunReport::new(results);
        observer.run_completed(&report);
        Ok(report)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rejects suites in which two scenarios declare the same ordinal.
fn validate_ordinals(scenarios: &[Box<dyn Scenario>]) -> Result<(), SuiteError> {
    let mut seen: BTreeMap<Ordinal, ScenarioId> = BTreeMap::new();
    for scenario in scenarios {
        let descriptor = scenario.descriptor();
        if let Some(first) = seen.get(&descriptor.ordinal) {
            return Err(SuiteError::DuplicateOrdinal {
                ordinal: descriptor.ordinal,
                first: first.clone(),
                second: descriptor.scenario_id,
            });
        }
        seen.insert(descriptor.ordinal, descriptor.scenario_id);
    }
    Ok(())
}
