// crates/fieldsign-core/src/lib.rs
// ============================================================================
// Module: Fieldsign Core Library
// Description: Public API surface for envelope field signing.
// Purpose: Expose field types, validators, insertion, and the signer.
// Dependencies: crate::{core, insertion, interfaces, runtime, validation}
// ============================================================================

//! ## Overview
//! Fieldsign core validates the values recipients submit for document
//! fields (signatures, dates, text, numbers, choices) and produces the
//! canonical text recorded on each field. Every operation is a synchronous
//! function over in-memory values; the only collaborators are an injected
//! clock and audit sink.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod insertion;
pub mod interfaces;
pub mod runtime;
pub mod validation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use insertion::extract_field_insertion_values;
pub use insertion::from_checkbox_custom_text;
pub use insertion::from_radio_custom_text;
pub use insertion::is_base64_image;
pub use insertion::is_valid_email;
pub use insertion::to_checkbox_custom_text;
pub use insertion::to_radio_custom_text;
pub use interfaces::Clock;
pub use interfaces::SigningAuditEvent;
pub use interfaces::SigningAuditSink;
pub use interfaces::SigningOutcome;
pub use runtime::FieldSigner;
pub use runtime::FileAuditSink;
pub use runtime::FixedClock;
pub use runtime::NoopAuditSink;
pub use runtime::SigningRequest;
pub use runtime::StderrAuditSink;
pub use runtime::SystemClock;
pub use runtime::is_field_unsigned_and_required;
pub use runtime::is_required_field;
pub use runtime::unsigned_required_fields;
pub use validation::validate_field_value;
