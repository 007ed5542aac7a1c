// crates/lifecycle-probe-booking/src/lifecycle.rs
// ============================================================================
// Module: Booking Lifecycle Scenarios
// Description: Create, read, update, delete, and read-after-delete cases.
// Purpose: Walk one booking through its full lifecycle with shared state.
// Dependencies: lifecycle-probe-core, serde_json
// ============================================================================

//! ## Overview
//! These five cases exercise one booking end to end. The create case records
//! the issued identifier under the primary handle role; every later case
//! resolves that handle instead of trusting a copied value, so a read after
//! delete observes not-found for exactly the identifier the create captured.
//! Mutating cases consume the run credential recorded by the authentication
//! case. State writes happen only on a passing verdict: a failed create
//! records no handle, and a failed delete leaves the handle live.

// ============================================================================
// SECTION: Imports
// ============================================================================

use lifecycle_probe_core::ApiClient;
use lifecycle_probe_core::ApiRequest;
use lifecycle_probe_core::ExpectationContract;
use lifecycle_probe_core::FieldRule;
use lifecycle_probe_core::HandleRole;
use lifecycle_probe_core::RunContext;
use lifecycle_probe_core::Scenario;
use lifecycle_probe_core::ScenarioDescriptor;
use lifecycle_probe_core::ScenarioError;
use lifecycle_probe_core::Verdict;
use lifecycle_probe_core::check_response;
use serde_json::json;

use crate::api::BOOKING_PATH;
use crate::api::CREATED_FIRSTNAME;
use crate::api::CREATED_LASTNAME;
use crate::api::UPDATED_FIRSTNAME;
use crate::api::UPDATED_LASTNAME;
use crate::api::booking_path;
use crate::api::booking_payload;
use crate::api::extract_booking_id;
use crate::suite::ORDINAL_CREATE_BOOKING;
use crate::suite::ORDINAL_DELETE_BOOKING;
use crate::suite::ORDINAL_READ_BOOKING;
use crate::suite::ORDINAL_READ_DELETED_BOOKING;
use crate::suite::ORDINAL_UPDATE_BOOKING;

// ============================================================================
// SECTION: Create
// ============================================================================

/// Creates the booking whose lifecycle the run exercises.
///
/// # Invariants
/// - A passing verdict always records the primary handle.
pub struct CreateBooking;

impl Scenario for CreateBooking {
    fn descriptor(&self) -> ScenarioDescriptor {
        ScenarioDescriptor::new("create_booking", ORDINAL_CREATE_BOOKING, "Create a booking")
    }

    fn execute(
        &self,
        ctx: &mut RunContext,
        client: &dyn ApiClient,
    ) -> Result<Verdict, ScenarioError> {
        let request = ApiRequest::post(
            BOOKING_PATH,
            booking_payload(CREATED_FIRSTNAME, CREATED_LASTNAME),
        );
        let response = client.send(&request)?;
        let contract =
            ExpectationContract::new(200, vec![FieldRule::positive_integer("bookingid")]);
        let verdict = check_response(&response, &contract);
        if verdict.is_pass() {
            let id = extract_booking_id(response.body.as_ref()).ok_or_else(|| {
                ScenarioError::ResponseShape(
                    "create passed without a readable booking id".to_string(),
                )
            })?;
            ctx.handles.record(HandleRole::Primary, id, ORDINAL_CREATE_BOOKING);
        }
        Ok(verdict)
    }
}

// ============================================================================
// SECTION: Read
// ============================================================================

/// Reads the created booking back and verifies the guest name.
pub struct ReadBooking;

impl Scenario for ReadBooking {
    fn descriptor(&self) -> ScenarioDescriptor {
        ScenarioDescriptor::new("read_booking", ORDINAL_READ_BOOKING, "Read the created booking")
    }

    fn execute(
        &self,
        ctx: &mut RunContext,
        client: &dyn ApiClient,
    ) -> Result<Verdict, ScenarioError> {
        let id = ctx.handles.require(HandleRole::Primary)?.id.clone();
        let request = ApiRequest::get(booking_path(&id));
        let response = client.send(&request)?;
        let contract = ExpectationContract::new(
            200,
            vec![FieldRule::equals("firstname", json!(CREATED_FIRSTNAME))],
        );
        Ok(check_response(&response, &contract))
    }
}

// ============================================================================
// SECTION: Update
// ============================================================================

/// Updates the booking with the run credential and verifies the new name.
pub struct UpdateBooking;

impl Scenario for UpdateBooking {
    fn descriptor(&self) -> ScenarioDescriptor {
        ScenarioDescriptor::new(
            "update_booking",
            ORDINAL_UPDATE_BOOKING,
            "Update the booking with a valid token",
        )
    }

    fn execute(
        &self,
        ctx: &mut RunContext,
        client: &dyn ApiClient,
    ) -> Result<Verdict, ScenarioError> {
        let token = ctx.credentials.require_token()?.clone();
        let id = ctx.handles.require(HandleRole::Primary)?.id.clone();
        let request = ApiRequest::put(
            booking_path(&id),
            booking_payload(UPDATED_FIRSTNAME, UPDATED_LASTNAME),
        )
        .with_token(token);
        let response = client.send(&request)?;
        let contract = ExpectationContract::new(
            200,
            vec![FieldRule::equals("firstname", json!(UPDATED_FIRSTNAME))],
        );
        Ok(check_response(&response, &contract))
    }
}

// ============================================================================
// SECTION: Delete
// ============================================================================

/// Deletes the booking with the run credential.
///
/// # Invariants
/// - The primary handle is marked deleted only on a passing verdict.
pub struct DeleteBooking;

impl Scenario for DeleteBooking {
    fn descriptor(&self) -> ScenarioDescriptor {
        ScenarioDescriptor::new(
            "delete_booking",
            ORDINAL_DELETE_BOOKING,
            "Delete the booking with a valid token",
        )
    }

    fn execute(
        &self,
        ctx: &mut RunContext,
        client: &dyn ApiClient,
    ) -> Result<Verdict, ScenarioError> {
        let token = ctx.credentials.require_token()?.clone();
        let id = ctx.handles.require(HandleRole::Primary)?.id.clone();
        let request = ApiRequest::delete(booking_path(&id)).with_token(token);
        let response = client.send(&request)?;
        // The target answers a successful authorized delete with 201.
        let contract = ExpectationContract::status_only(201);
        let verdict = check_response(&response, &contract);
        if verdict.is_pass() {
            ctx.handles.mark_deleted(HandleRole::Primary)?;
        }
        Ok(verdict)
    }
}

// ============================================================================
// SECTION: Read After Delete
// ============================================================================

/// Verifies the deleted booking is gone.
pub struct ReadDeletedBooking;

impl Scenario for ReadDeletedBooking {
    fn descriptor(&self) -> ScenarioDescriptor {
        ScenarioDescriptor::new(
            "read_deleted_booking",
            ORDINAL_READ_DELETED_BOOKING,
            "Read the deleted booking",
        )
    }

    fn execute(
        &self,
        ctx: &mut RunContext,
        client: &dyn ApiClient,
    ) -> Result<Verdict, ScenarioError> {
        let id = ctx.handles.require(HandleRole::Primary)?.id.clone();
        let request = ApiRequest::get(booking_path(&id));
        let response = client.send(&request)?;
        let contract = ExpectationContract::status_only(404);
        Ok(check_response(&response, &contract))
    }
}
