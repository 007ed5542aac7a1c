// crates/lifecycle-probe-booking/src/adversarial.rs
// ============================================================================
// Module: Adversarial Scenarios
// Description: Invalid-token and missing-resource rejection cases.
// Purpose: Pin the target's authorization-before-existence check ordering.
// Dependencies: lifecycle-probe-core, serde_json
// ============================================================================

//! ## Overview
//! The target checks authorization before existence. An invalid token is
//! rejected with 403 whether the addressed booking exists (fresh throwaway)
//! or not (fixed never-created identifier). A valid token against a missing
//! booking gets past the authorization gate and is rejected with 405
//! instead. These four cases assert both arms of that ordering; the 403/405
//! split is the target's fixed contract and is asserted as-is.

// ============================================================================
// SECTION: Imports
// ============================================================================

use lifecycle_probe_core::ApiClient;
use lifecycle_probe_core::ApiRequest;
use lifecycle_probe_core::AuthToken;
use lifecycle_probe_core::ExpectationContract;
use lifecycle_probe_core::HandleRole;
use lifecycle_probe_core::RunContext;
use lifecycle_probe_core::Scenario;
use lifecycle_probe_core::ScenarioDescriptor;
use lifecycle_probe_core::ScenarioError;
use lifecycle_probe_core::Verdict;
use lifecycle_probe_core::check_response;

use crate::api::BOOKING_PATH;
use crate::api::booking_path;
use crate::api::booking_payload;
use crate::api::extract_booking_id;
use crate::suite::ORDINAL_DELETE_MISSING_BOOKING;
use crate::suite::ORDINAL_DELETE_WITH_INVALID_TOKEN;
use crate::suite::ORDINAL_UPDATE_MISSING_BOOKING;
use crate::suite::ORDINAL_UPDATE_WITH_INVALID_TOKEN;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Guest first name of the throwaway booking created as setup.
const THROWAWAY_FIRSTNAME: &str = "Greg";
/// Guest last name of the throwaway booking created as setup.
const THROWAWAY_LASTNAME: &str = "Menwill";
/// First name the tampering update attempts to write.
const TAMPERED_FIRSTNAME: &str = "InvalidName";
/// Token presented by the invalid-token update.
const STALE_TOKEN: &str = "invalidtoken123";
/// Token presented by the invalid-token delete.
const FORGED_TOKEN: &str = "badToken123456";
/// Identifier targeted by the invalid-token delete; never created.
const FORGED_TARGET_ID: i64 = 12_098_908;
/// Identifier targeted by the valid-token update; never created.
const MISSING_UPDATE_ID: i64 = 334_466_778;
/// Identifier targeted by the valid-token delete; never created.
const MISSING_DELETE_ID: i64 = 897_656;
/// Guest first name sent with the valid-token update of a missing booking.
const ORPHAN_FIRSTNAME: &str = "Unknown";
/// Guest last name sent with the valid-token update of a missing booking.
const ORPHAN_LASTNAME: &str = "User";

// ============================================================================
// SECTION: Invalid Token, Existing Resource
// ============================================================================

/// Updates a fresh booking with an invalid token, expecting 403.
///
/// Creates its own throwaway booking first so the rejection is provably an
/// authorization failure rather than a missing-resource one. The throwaway
/// identifier is recorded under the secondary handle role.
pub struct UpdateWithInvalidToken;

impl Scenario for UpdateWithInvalidToken {
    fn descriptor(&self) -> ScenarioDescriptor {
        ScenarioDescriptor::new(
            "update_with_invalid_token",
            ORDINAL_UPDATE_WITH_INVALID_TOKEN,
            "Update a fresh booking with an invalid token",
        )
    }

    fn execute(
        &self,
        ctx: &mut RunContext,
        client: &dyn ApiClient,
    ) -> Result<Verdict, ScenarioError> {
        let create = ApiRequest::post(
            BOOKING_PATH,
            booking_payload(THROWAWAY_FIRSTNAME, THROWAWAY_LASTNAME),
        );
        let created = client.send(&create)?;
        let id = extract_booking_id(created.body.as_ref()).ok_or_else(|| {
            ScenarioError::Setup("throwaway create did not yield a booking id".to_string())
        })?;
        ctx.handles.record(HandleRole::Secondary, id.clone(), ORDINAL_UPDATE_WITH_INVALID_TOKEN);
        let request = ApiRequest::put(
            booking_path(&id),
            booking_payload(TAMPERED_FIRSTNAME, THROWAWAY_LASTNAME),
        )
        .with_token(AuthToken::new(STALE_TOKEN));
        let response = client.send(&request)?;
        Ok(check_response(&response, &ExpectationContract::status_only(403)))
    }
}

// ============================================================================
// SECTION: Invalid Token, Missing Resource
// ============================================================================

/// Deletes a nonexistent booking with an invalid token, expecting 403.
///
/// The forbidden status proves the authorization check fires before the
/// existence check: the addressed booking was never created.
pub struct DeleteWithInvalidToken;

impl Scenario for DeleteWithInvalidToken {
    fn descriptor(&self) -> ScenarioDescriptor {
        ScenarioDescriptor::new(
            "delete_with_invalid_token",
            ORDINAL_DELETE_WITH_INVALID_TOKEN,
            "Delete a nonexistent booking with an invalid token",
        )
    }

    fn execute(
        &self,
        _ctx: &mut RunContext,
        client: &dyn ApiClient,
    ) -> Result<Verdict, ScenarioError> {
        let request = ApiRequest::delete(format!("{BOOKING_PATH}/{FORGED_TARGET_ID}"))
            .with_token(AuthToken::new(FORGED_TOKEN));
        let response = client.send(&request)?;
        Ok(check_response(&response, &ExpectationContract::status_only(403)))
    }
}

// ============================================================================
// SECTION: Valid Token, Missing Resource
// ============================================================================

/// Updates a nonexistent booking with the run credential, expecting 405.
pub struct UpdateMissingBooking;

impl Scenario for UpdateMissingBooking {
    fn descriptor(&self) -> ScenarioDescriptor {
        ScenarioDescriptor::new(
            "update_missing_booking",
            ORDINAL_UPDATE_MISSING_BOOKING,
            "Update a nonexistent booking with a valid token",
        )
    }

    fn execute(
        &self,
        ctx: &mut RunContext,
        client: &dyn ApiClient,
    ) -> Result<Verdict, ScenarioError> {
        let token = ctx.credentials.require_token()?.clone();
        let request = ApiRequest::put(
            format!("{BOOKING_PATH}/{MISSING_UPDATE_ID}"),
            booking_payload(ORPHAN_FIRSTNAME, ORPHAN_LASTNAME),
        )
        .with_token(token);
        let response = client.send(&request)?;
        Ok(check_response(&response, &ExpectationContract::status_only(405)))
    }
}

/// Deletes a nonexistent booking with the run credential, expecting 405.
pub struct DeleteMissingBooking;

impl Scenario for DeleteMissingBooking {
    fn descriptor(&self) -> ScenarioDescriptor {
        ScenarioDescriptor::new(
            "delete_missing_booking",
            ORDINAL_DELETE_MISSING_BOOKING,
            "Delete a nonexistent booking with a valid token",
        )
    }

    fn execute(
        &self,
        ctx: &mut RunContext,
        client: &dyn ApiClient,
    ) -> Result<Verdict, ScenarioError> {
        let token = ctx.credentials.require_token()?.clone();
        let request = ApiRequest::delete(format!("{BOOKING_PATH}/{MISSING_DELETE_ID}"))
            .with_token(token);
        let response = client.send(&request)?;
        Ok(check_response(&response, &ExpectationContract::status_only(405)))
    }
}
