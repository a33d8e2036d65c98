// crates/fieldsign-core/src/validation/radio.rs
// ============================================================================
// Module: Radio Field Validation
// Description: Bounds and required rules for radio fields.
// Purpose: Validate a selected radio index against its options.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! A radio selection is an index that must address a configured option.
//! Missing a selection only fails for required fields at final submission.

use crate::core::meta::RadioFieldMeta;

/// Validates a radio selection index.
#[must_use]
pub fn validate_radio_field(
    index: Option<usize>,
    meta: Option<&RadioFieldMeta>,
    is_final: bool,
) -> Vec<String> {
    let mut errors = Vec::new();
    let option_count = meta.and_then(|meta| meta.values.as_ref()).map_or(0, Vec::len);

    match index {
        None if is_final && meta.is_some_and(|meta| meta.common.is_required()) => {
            errors.push("Choosing an option is required".to_string());
        }
        Some(index) if index >= option_count => {
            errors.push("Selected option is out of range".to_string());
        }
        _ => {}
    }
    errors
}
