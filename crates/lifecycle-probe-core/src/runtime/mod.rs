// crates/lifecycle-probe-core/src/runtime/mod.rs
// ============================================================================
// Module: Lifecycle Probe Runtime
// Description: Contract checking and sequential suite execution.
// Purpose: Evaluate scenarios against the system under test, in order.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement contract evaluation and the suite runner. Every
//! frontend drives runs through the same runner so ordering and
//! record-and-continue semantics hold everywhere.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod checker;
pub mod sequencer;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use checker::check_response;
pub use checker::resolve_field;
pub use sequencer::RunPhase;
pub use sequencer::SuiteError;
pub use sequencer::SuiteRunner;
