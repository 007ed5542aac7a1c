// crates/lifecycle-probe-core/src/runtime/checker.rs
// ============================================================================
// Module: Contract Checker
// Description: Evaluation of expectation contracts against observed responses.
// Purpose: Produce structured verdicts with status-first short-circuiting.
// Dependencies: crate::core, serde_json
// ============================================================================

//! ## Overview
//! The checker turns an observed response and a declared contract into a
//! verdict. The status code is compared first because it is cheap and the
//! most informative signal on mismatch; field diagnostics on a wrong-status
//! response are noise, so a status mismatch short-circuits field evaluation
//! entirely. Field rules run in declaration order and the first violation
//! wins. All comparisons are exact.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::core::contract::ContractDiagnostic;
use crate::core::contract::ExpectationContract;
use crate::core::contract::FieldExpectation;
use crate::core::contract::FieldPath;
use crate::core::contract::FieldRule;
use crate::core::contract::Verdict;
use crate::interfaces::ApiResponse;

// ============================================================================
// SECTION: Checking
// ============================================================================

/// Checks one response against its expectation contract.
#[must_use]
pub fn check_response(response: &ApiResponse, contract: &ExpectationContract) -> Verdict {
    if response.status != contract.status {
        return Verdict::Fail {
            diagnostic: ContractDiagnostic::StatusMismatch {
                expected: contract.status,
                actual: response.status,
            },
        };
    }
    if contract.fields.is_empty() {
        return Verdict::Pass;
    }
    let Some(body) = response.body.as_ref() else {
        return Verdict::Fail {
            diagnostic: ContractDiagnostic::BodyNotJson,
        };
    };
    for rule in &contract.fields {
        if let Some(diagnostic) = check_rule(body, rule) {
            return Verdict::Fail {
                diagnostic,
            };
        }
    }
    Verdict::Pass
}

/// Resolves a dotted field path against a JSON body.
///
/// Segments are matched against object keys only; a path that walks through
/// an array or scalar does not resolve.
#[must_use]
pub fn resolve_field<'body>(body: &'body Value, path: &FieldPath) -> Option<&'body Value> {
    let mut current = body;
    for segment in path.segments() {
        current = current.get(segment)?;
    }
    Some(current)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Evaluates one field rule, returning the violation when one exists.
fn check_rule(body: &Value, rule: &FieldRule) -> Option<ContractDiagnostic> {
    let resolved = resolve_field(body, &rule.path);
    match &rule.expectation {
        FieldExpectation::Equals {
            expected,
        } => match resolved {
            None => Some(ContractDiagnostic::FieldMissing {
                path: rule.path.clone(),
            }),
            Some(actual) if actual == expected => None,
            Some(actual) => Some(ContractDiagnostic::FieldMismatch {
                path: rule.path.clone(),
                expected: expected.clone(),
                actual: actual.clone(),
            }),
        },
        FieldExpectation::PositiveInteger => match resolved {
            None => Some(ContractDiagnostic::FieldMissing {
                path: rule.path.clone(),
            }),
            Some(actual) => {
                if actual.as_i64().is_some_and(|id| id > 0) {
                    None
                } else {
                    Some(ContractDiagnostic::FieldNotPositive {
                        path: rule.path.clone(),
                        actual: actual.clone(),
                    })
                }
            }
        },
        FieldExpectation::NonEmptyString => match resolved {
            None => Some(ContractDiagnostic::FieldMissing {
                path: rule.path.clone(),
            }),
            Some(actual) => {
                if actual.as_str().is_some_and(|text| !text.is_empty()) {
                    None
                } else {
                    Some(ContractDiagnostic::FieldNotText {
                        path: rule.path.clone(),
                        actual: actual.clone(),
                    })
                }
            }
        },
        FieldExpectation::Absent => resolved.map(|actual| ContractDiagnostic::FieldUnexpected {
            path: rule.path.clone(),
            actual: actual.clone(),
        }),
    }
}
