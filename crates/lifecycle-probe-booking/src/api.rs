// crates/lifecycle-probe-booking/src/api.rs
// ============================================================================
// Module: Booking API Surface
// Description: Paths, payload builders, and body readers for the target API.
// Purpose: Keep the target's wire shapes in one place for every scenario.
// Dependencies: lifecycle-probe-core, serde_json
// ============================================================================

//! ## Overview
//! The booking target speaks a small fixed surface: an `/auth` endpoint that
//! trades credentials for a token, and a `/booking` collection keyed by
//! numeric identifiers. Payloads carry a fixed field set; the update
//! operation re-sends the full payload rather than a patch. Builders here
//! produce those bodies, and readers extract the two values scenarios
//! capture from responses: the token and the booking identifier.

// ============================================================================
// SECTION: Imports
// ============================================================================

use lifecycle_probe_core::AuthToken;
use lifecycle_probe_core::ResourceId;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Authentication endpoint path.
pub const AUTH_PATH: &str = "/auth";
/// Booking collection endpoint path.
pub const BOOKING_PATH: &str = "/booking";
/// First name carried by the canonical create payload.
pub const CREATED_FIRSTNAME: &str = "Atul";
/// Last name carried by the canonical create payload.
pub const CREATED_LASTNAME: &str = "Surve";
/// First name written by the authorized update.
pub const UPDATED_FIRSTNAME: &str = "Sam";
/// Last name written by the authorized update.
pub const UPDATED_LASTNAME: &str = "Shaw";

// ============================================================================
// SECTION: Payload Builders
// ============================================================================

/// Builds the credential payload for the authentication endpoint.
#[must_use]
pub fn auth_payload(username: &str, password: &str) -> Value {
    json!({
        "username": username,
        "password": password,
    })
}

/// Builds the full booking payload for the given guest name.
///
/// Every field except the name pair is fixed; the target treats the payload
/// as a complete document on both create and update.
#[must_use]
pub fn booking_payload(firstname: &str, lastname: &str) -> Value {
    json!({
        "firstname": firstname,
        "lastname": lastname,
        "totalprice": 500,
        "depositpaid": true,
        "bookingdates": {
            "checkin": "2025-08-01",
            "checkout": "2025-08-10",
        },
        "additionalneeds": "Breakfast",
    })
}

// ============================================================================
// SECTION: Paths
// ============================================================================

/// Renders the item path for one booking identifier.
#[must_use]
pub fn booking_path(id: &ResourceId) -> String {
    format!("{BOOKING_PATH}/{id}")
}

// ============================================================================
// SECTION: Body Readers
// ============================================================================

/// Extracts the token from an authentication response body.
#[must_use]
pub fn extract_token(body: Option<&Value>) -> Option<AuthToken> {
    body?.get("token")?.as_str().map(AuthToken::new)
}

/// Extracts the booking identifier from a create response body.
#[must_use]
pub fn extract_booking_id(body: Option<&Value>) -> Option<ResourceId> {
    body?.get("bookingid")?.as_i64().map(ResourceId::Numeric)
}
