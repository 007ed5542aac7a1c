// system-tests/tests/suites/faults.rs
// ============================================================================
// Module: Fault Injection Tests
// Description: Suite runs against stubs that drift from the API contract.
// Purpose: Prove violations surface as recorded outcomes, never as aborts.
// Dependencies: lifecycle-probe-booking, lifecycle-probe-core, helpers
// ============================================================================

//! ## Overview
//! Points the booking suite at stubs with injected contract drift and checks
//! that every violation lands in the report as a failure or a stranded error
//! while the run itself completes.
//! Invariants:
//! - Suites run deterministically against the in-process stub.
//! - The stub is the only network endpoint a suite contacts.

use helpers::probe::probe_client;
use helpers::stub::StubBehavior;
use helpers::stub::StubServer;
use lifecycle_probe_booking::suite;
use lifecycle_probe_core::ErrorKind;
use lifecycle_probe_core::NoopObserver;
use lifecycle_probe_core::Outcome;
use lifecycle_probe_core::RunReport;
use lifecycle_probe_core::SuiteRunner;

use crate::helpers;

fn run_against(behavior: StubBehavior) -> Result<RunReport, String> {
    let stub = StubServer::spawn(behavior)?;
    let client = probe_client(stub.base_url())?;
    let mut runner = SuiteRunner::new(client, suite("admin", "password123"))
        .map_err(|err| format!("assemble suite: {err}"))?;
    runner.run(&NoopObserver).map_err(|err| format!("run suite: {err}"))
}

fn labels(report: &RunReport) -> Vec<&'static str> {
    report.results.iter().map(|result| result.outcome.label()).collect()
}

#[test]
fn drifted_read_data_is_a_recorded_failure() -> Result<(), String> {
    let mut behavior = StubBehavior::faithful();
    behavior.read_firstname_override = Some("Bob".to_owned());
    let report = run_against(behavior)?;
    let summary = report.summary();
    if summary.passed != 10 || summary.failed != 1 || summary.errored != 0 {
        return Err(format!(
            "expected 10 passed, 1 failed, 0 errored, observed {} passed, {} failed, {} errored",
            summary.passed, summary.failed, summary.errored
        ));
    }
    let failing = report
        .results
        .iter()
        .find(|result| !result.outcome.is_pass())
        .ok_or_else(|| "no failing scenario recorded".to_owned())?;
    if failing.scenario_id.as_str() != "read_booking" {
        return Err(format!("expected read_booking to fail, observed {}", failing.scenario_id));
    }
    match &failing.outcome {
        Outcome::Fail { diagnostic } => {
            let rendered = diagnostic.to_string();
            if rendered.contains("firstname") {
                Ok(())
            } else {
                Err(format!("diagnostic does not name the drifted field: {rendered}"))
            }
        }
        _ => Err("read_booking did not record a contract failure".to_owned()),
    }
}

#[test]
fn a_denied_credential_strands_every_authorized_scenario() -> Result<(), String> {
    let mut behavior = StubBehavior::faithful();
    behavior.password = "rotated".to_owned();
    let report = run_against(behavior)?;
    let observed = labels(&report);
    let expected = vec![
        "fail", "pass", "pass", "error", "error", "fail", "pass", "pass", "pass", "error", "error",
    ];
    if observed != expected {
        return Err(format!("unexpected outcome labels: {}", observed.join(", ")));
    }
    for result in &report.results {
        if let Outcome::Error { error } = &result.outcome
            && error.kind != ErrorKind::SuiteState
        {
            return Err(format!(
                "{} errored as {} instead of {}",
                result.scenario_id,
                error.kind,
                ErrorKind::SuiteState
            ));
        }
    }
    Ok(())
}

#[test]
fn a_nonstandard_delete_status_is_a_recorded_failure() -> Result<(), String> {
    let mut behavior = StubBehavior::faithful();
    behavior.delete_status = 200;
    let report = run_against(behavior)?;
    let summary = report.summary();
    if summary.failed != 1 || summary.errored != 0 {
        return Err(format!(
            "expected exactly one recorded failure, observed {} failed, {} errored",
            summary.failed, summary.errored
        ));
    }
    let failing = report
        .results
        .iter()
        .find(|result| !result.outcome.is_pass())
        .ok_or_else(|| "no failing scenario recorded".to_owned())?;
    if failing.scenario_id.as_str() == "delete_booking" {
        Ok(())
    } else {
        Err(format!("expected delete_booking to fail, observed {}", failing.scenario_id))
    }
}
