// crates/fieldsign-core/src/runtime/mod.rs
// ============================================================================
// Module: Fieldsign Runtime
// Description: Signing orchestration, audit sinks, clocks, and completion.
// Purpose: Wire validators and insertion into a host-facing entry point.
// Dependencies: crate::{core, insertion, interfaces, validation}
// ============================================================================

//! ## Overview
//! The runtime combines the pure validation and insertion layers with the
//! injected clock and audit sink. It never touches storage; hosts persist
//! the returned insertion themselves.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod audit;
pub mod clock;
pub mod completion;
pub mod signer;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use completion::is_field_unsigned_and_required;
pub use completion::is_required_field;
pub use completion::unsigned_required_fields;
pub use signer::FieldSigner;
pub use signer::SigningRequest;
