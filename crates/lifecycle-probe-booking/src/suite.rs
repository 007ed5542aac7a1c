// crates/lifecycle-probe-booking/src/suite.rs
// ============================================================================
// Module: Booking Suite Assembly
// Description: The canonical execution order of the booking scenario set.
// Purpose: Declare every ordinal in one place and assemble the boxed suite.
// Dependencies: lifecycle-probe-core
// ============================================================================

//! ## Overview
//! The whole run order is declared here: eleven scenarios with fixed,
//! unique, 1-based ordinals. Token acquisition runs first because later
//! cases consume the credential; the primary booking lifecycle follows; the
//! adversarial cases close the run, reusing the credential acquired at the
//! start. The suite runner re-validates uniqueness at construction, so a
//! drifted ordinal here fails fast rather than reordering silently.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::num::NonZeroU32;

use lifecycle_probe_core::Ordinal;
use lifecycle_probe_core::Scenario;

use crate::adversarial::DeleteMissingBooking;
use crate::adversarial::DeleteWithInvalidToken;
use crate::adversarial::UpdateMissingBooking;
use crate::adversarial::UpdateWithInvalidToken;
use crate::auth::AuthenticateInvalid;
use crate::auth::AuthenticateValid;
use crate::lifecycle::CreateBooking;
use crate::lifecycle::DeleteBooking;
use crate::lifecycle::ReadBooking;
use crate::lifecycle::ReadDeletedBooking;
use crate::lifecycle::UpdateBooking;

// ============================================================================
// SECTION: Execution Order
// ============================================================================

/// Ordinal of the valid-credential authentication case.
pub(crate) const ORDINAL_AUTHENTICATE_VALID: Ordinal = fixed_ordinal(1);
/// Ordinal of the booking creation case.
pub(crate) const ORDINAL_CREATE_BOOKING: Ordinal = fixed_ordinal(2);
/// Ordinal of the created-booking read case.
pub(crate) const ORDINAL_READ_BOOKING: Ordinal = fixed_ordinal(3);
/// Ordinal of the authorized update case.
pub(crate) const ORDINAL_UPDATE_BOOKING: Ordinal = fixed_ordinal(4);
/// Ordinal of the authorized delete case.
pub(crate) const ORDINAL_DELETE_BOOKING: Ordinal = fixed_ordinal(5);
/// Ordinal of the deleted-booking read case.
pub(crate) const ORDINAL_READ_DELETED_BOOKING: Ordinal = fixed_ordinal(6);
/// Ordinal of the invalid-credential authentication case.
pub(crate) const ORDINAL_AUTHENTICATE_INVALID: Ordinal = fixed_ordinal(7);
/// Ordinal of the invalid-token update case.
pub(crate) const ORDINAL_UPDATE_WITH_INVALID_TOKEN: Ordinal = fixed_ordinal(8);
/// Ordinal of the invalid-token delete case.
pub(crate) const ORDINAL_DELETE_WITH_INVALID_TOKEN: Ordinal = fixed_ordinal(9);
/// Ordinal of the valid-token update against a missing booking.
pub(crate) const ORDINAL_UPDATE_MISSING_BOOKING: Ordinal = fixed_ordinal(10);
/// Ordinal of the valid-token delete against a missing booking.
pub(crate) const ORDINAL_DELETE_MISSING_BOOKING: Ordinal = fixed_ordinal(11);

/// Builds a fixed ordinal from a nonzero literal.
const fn fixed_ordinal(raw: u32) -> Ordinal {
    match NonZeroU32::new(raw) {
        Some(value) => Ordinal::new(value),
        None => unreachable!(),
    }
}

// ============================================================================
// SECTION: Assembly
// ============================================================================

/// Assembles the canonical booking suite in execution order.
///
/// The credentials are those presented by the valid-authentication case;
/// every other scenario carries its inputs as fixed values.
#[must_use]
pub fn suite(username: impl Into<String>, password: impl Into<String>) -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(AuthenticateValid::new(username, password)),
        Box::new(CreateBooking),
        Box::new(ReadBooking),
        Box::new(UpdateBooking),
        Box::new(DeleteBooking),
        Box::new(ReadDeletedBooking),
        Box::new(AuthenticateInvalid),
        Box::new(UpdateWithInvalidToken),
        Box::new(DeleteWithInvalidToken),
        Box::new(UpdateMissingBooking),
        Box::new(DeleteMissingBooking),
    ]
}
