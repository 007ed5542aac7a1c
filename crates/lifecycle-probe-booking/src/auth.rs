// crates/lifecycle-probe-booking/src/auth.rs
// ============================================================================
// Module: Authentication Scenarios
// Description: Token acquisition cases for valid and invalid credentials.
// Purpose: Establish the run credential and pin the denied-authentication shape.
// Dependencies: lifecycle-probe-core, serde_json
// ============================================================================

//! ## Overview
//! The target grants tokens through `POST /auth`. A grant is HTTP 200 with a
//! non-empty `token` field; a denial is also HTTP 200, distinguished only by
//! the missing `token` field. The valid-credential case records the grant in
//! the credential store for the rest of the run, and records an explicit
//! denial when the target refuses, so later consumers see a decided state
//! rather than an unset one. The invalid-credential case asserts the denial
//! shape and deliberately writes nothing: it must not clobber the credential
//! the run already holds.

// ============================================================================
// SECTION: Imports
// ============================================================================

use lifecycle_probe_core::ApiClient;
use lifecycle_probe_core::ApiRequest;
use lifecycle_probe_core::ExpectationContract;
use lifecycle_probe_core::FieldRule;
use lifecycle_probe_core::RunContext;
use lifecycle_probe_core::Scenario;
use lifecycle_probe_core::ScenarioDescriptor;
use lifecycle_probe_core::ScenarioError;
use lifecycle_probe_core::Verdict;
use lifecycle_probe_core::check_response;

use crate::api::AUTH_PATH;
use crate::api::auth_payload;
use crate::api::extract_token;
use crate::suite::ORDINAL_AUTHENTICATE_INVALID;
use crate::suite::ORDINAL_AUTHENTICATE_VALID;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Username presented by the invalid-credential case.
const INVALID_USERNAME: &str = "wronguser";
/// Password presented by the invalid-credential case.
const INVALID_PASSWORD: &str = "wrongpass";

// ============================================================================
// SECTION: Valid Credentials
// ============================================================================

/// Acquires the run credential with operator-supplied credentials.
///
/// # Invariants
/// - A passing verdict always leaves the credential store granted.
/// - Any non-passing verdict leaves the store explicitly denied.
pub struct AuthenticateValid {
    /// Username presented to the target.
    username: String,
    /// Password presented to the target.
    password: String,
}

impl AuthenticateValid {
    /// Creates the scenario with the credentials to present.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Scenario for AuthenticateValid {
    fn descriptor(&self) -> ScenarioDescriptor {
        ScenarioDescriptor::new(
            "authenticate_valid",
            ORDINAL_AUTHENTICATE_VALID,
            "Authenticate with valid credentials",
        )
    }

    fn execute(
        &self,
        ctx: &mut RunContext,
        client: &dyn ApiClient,
    ) -> Result<Verdict, ScenarioError> {
        let request =
            ApiRequest::post(AUTH_PATH, auth_payload(&self.username, &self.password));
        let response = client.send(&request)?;
        let contract =
            ExpectationContract::new(200, vec![FieldRule::non_empty_string("token")]);
        let verdict = check_response(&response, &contract);
        if verdict.is_pass() {
            let token = extract_token(response.body.as_ref()).ok_or_else(|| {
                ScenarioError::ResponseShape(
                    "authentication passed without a readable token".to_string(),
                )
            })?;
            ctx.credentials.record_grant(token, ORDINAL_AUTHENTICATE_VALID);
        } else {
            ctx.credentials.record_denial(ORDINAL_AUTHENTICATE_VALID);
        }
        Ok(verdict)
    }
}

// ============================================================================
// SECTION: Invalid Credentials
// ============================================================================

/// Asserts that bad credentials are denied without a token.
///
/// # Invariants
/// - Never writes credential state; the run credential survives this case.
pub struct AuthenticateInvalid;

impl Scenario for AuthenticateInvalid {
    fn descriptor(&self) -> ScenarioDescriptor {
        ScenarioDescriptor::new(
            "authenticate_invalid",
            ORDINAL_AUTHENTICATE_INVALID,
            "Authenticate with invalid credentials",
        )
    }

    fn execute(
        &self,
        _ctx: &mut RunContext,
        client: &dyn ApiClient,
    ) -> Result<Verdict, ScenarioError> {
        let request =
            ApiRequest::post(AUTH_PATH, auth_payload(INVALID_USERNAME, INVALID_PASSWORD));
        let response = client.send(&request)?;
        let contract = ExpectationContract::new(200, vec![FieldRule::absent("token")]);
        Ok(check_response(&response, &contract))
    }
}
