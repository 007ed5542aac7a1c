// system-tests/tests/suites/smoke.rs
// ============================================================================
// Module: Smoke Tests
// Description: Full lifecycle run against a faithful stub target.
// Purpose: Prove the assembled suite passes end to end over real HTTP.
// Dependencies: lifecycle-probe-booking, lifecycle-probe-core, helpers
// ============================================================================

//! ## Overview
//! Runs the complete booking suite against an in-process stub that honors
//! the published API contract.
//! Invariants:
//! - Suites run deterministically against the in-process stub.
//! - The stub is the only network endpoint a suite contacts.

use helpers::probe::probe_client;
use helpers::stub::StubBehavior;
use helpers::stub::StubServer;
use lifecycle_probe_booking::suite;
use lifecycle_probe_core::NoopObserver;
use lifecycle_probe_core::RunPhase;
use lifecycle_probe_core::RunReport;
use lifecycle_probe_core::SuiteError;
use lifecycle_probe_core::SuiteRunner;

use crate::helpers;

fn outcome_digest(report: &RunReport) -> String {
    report
        .results
        .iter()
        .map(|result| format!("{} {}: {}", result.ordinal, result.scenario_id, result.outcome.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn digits(values: &[u32]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

fn run_faithful() -> Result<RunReport, String> {
    let stub = StubServer::spawn(StubBehavior::faithful())?;
    let client = probe_client(stub.base_url())?;
    let mut runner = SuiteRunner::new(client, suite("admin", "password123"))
        .map_err(|err| format!("assemble suite: {err}"))?;
    runner.run(&NoopObserver).map_err(|err| format!("run suite: {err}"))
}

#[test]
fn full_suite_passes_against_a_faithful_target() -> Result<(), String> {
    let stub = StubServer::spawn(StubBehavior::faithful())?;
    let client = probe_client(stub.base_url())?;
    let mut runner = SuiteRunner::new(client, suite("admin", "password123"))
        .map_err(|err| format!("assemble suite: {err}"))?;
    let report = runner.run(&NoopObserver).map_err(|err| format!("run suite: {err}"))?;
    if runner.phase() != RunPhase::Completed {
        return Err("runner did not report a completed phase".to_owned());
    }
    if !report.all_passed() {
        return Err(format!("expected a clean pass, observed: {}", outcome_digest(&report)));
    }
    let summary = report.summary();
    if summary.total != 11 || summary.passed != 11 {
        return Err(format!(
            "expected 11 of 11 passing, observed {} of {}",
            summary.passed, summary.total
        ));
    }
    let ordinals: Vec<u32> = report.results.iter().map(|result| result.ordinal.get()).collect();
    let expected: Vec<u32> = (1..=11).collect();
    if ordinals != expected {
        return Err(format!("scenario order drifted: {}", digits(&ordinals)));
    }
    Ok(())
}

#[test]
fn reruns_against_fresh_targets_repeat_the_outcomes() -> Result<(), String> {
    let first = run_faithful()?;
    let second = run_faithful()?;
    let first_labels: Vec<&str> = first.results.iter().map(|result| result.outcome.label()).collect();
    let second_labels: Vec<&str> =
        second.results.iter().map(|result| result.outcome.label()).collect();
    if first_labels != second_labels {
        return Err(format!(
            "outcome sequences diverged: {} then {}",
            first_labels.join(", "),
            second_labels.join(", ")
        ));
    }
    Ok(())
}

#[test]
fn a_runner_refuses_a_second_run() -> Result<(), String> {
    let stub = StubServer::spawn(StubBehavior::faithful())?;
    let client = probe_client(stub.base_url())?;
    let mut runner = SuiteRunner::new(client, suite("admin", "password123"))
        .map_err(|err| format!("assemble suite: {err}"))?;
    runner.run(&NoopObserver).map_err(|err| format!("first run: {err}"))?;
    match runner.run(&NoopObserver) {
        Err(SuiteError::AlreadyRan) => Ok(()),
        Err(other) => Err(format!("unexpected error: {other}")),
        Ok(_) => Err("second run unexpectedly started".to_owned()),
    }
}
