// crates/fieldsign-core/src/runtime/completion.rs
// ============================================================================
// Module: Field Completion
// Description: Required-field checks over recorded field state.
// Purpose: Decide whether a recipient may complete signing.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Fields of the basic kinds (signatures, initials, name, email, date) are
//! always required. The advanced kinds (text, number, radio, checkbox,
//! dropdown) are required only when their metadata says so. A field whose
//! metadata cannot be decoded is treated as required so misconfiguration
//! never lets a document complete early.

use crate::core::field::Field;

/// Returns true when `field` must be filled before completion.
#[must_use]
pub fn is_required_field(field: &Field) -> bool {
    if !field.kind.is_advanced() {
        return true;
    }
    match field.meta() {
        Ok(meta) => meta.is_some_and(|meta| meta.common().is_required()),
        Err(_) => true,
    }
}

/// Returns true when `field` is required and has no recorded value.
#[must_use]
pub fn is_field_unsigned_and_required(field: &Field) -> bool {
    !field.inserted && is_required_field(field)
}

/// Returns the required fields that still lack a recorded value, in order.
#[must_use]
pub fn unsigned_required_fields(fields: &[Field]) -> Vec<&Field> {
    fields.iter().filter(|field| is_field_unsigned_and_required(field)).collect()
}
