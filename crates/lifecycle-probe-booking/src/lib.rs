// crates/lifecycle-probe-booking/src/lib.rs
// ============================================================================
// Module: Lifecycle Probe Booking
// Description: Canonical booking-API scenario set and payload builders.
// Purpose: Encode the ordered CRUD and authorization cases for the target API.
// Dependencies: lifecycle-probe-core, serde_json
// ============================================================================

//! ## Overview
//! This crate ships the canonical ordered scenario set for the booking
//! target: token acquisition, the create/read/update/delete lifecycle of one
//! booking, and the adversarial cases probing how the target orders its
//! authorization and existence checks. Scenarios are pure values over the
//! run context and client seam; assembly order lives in [`suite`].
//! Invariants:
//! - An invalid token yields a forbidden-class status whether or not the
//!   target resource exists; a valid token against a missing resource yields
//!   a distinct rejection status. The set asserts both arms.
//! - Scenarios write run state only on a passing verdict.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod adversarial;
pub mod api;
pub mod auth;
pub mod lifecycle;
pub mod suite;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use adversarial::DeleteMissingBooking;
pub use adversarial::DeleteWithInvalidToken;
pub use adversarial::UpdateMissingBooking;
pub use adversarial::UpdateWithInvalidToken;
pub use auth::AuthenticateInvalid;
pub use auth::AuthenticateValid;
pub use lifecycle::CreateBooking;
pub use lifecycle::DeleteBooking;
pub use lifecycle::ReadBooking;
pub use lifecycle::ReadDeletedBooking;
pub use lifecycle::UpdateBooking;
pub use suite::suite;
