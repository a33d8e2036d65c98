// crates/fieldsign-core/src/validation/dropdown.rs
// ============================================================================
// Module: Dropdown Field Validation
// Description: Membership and required rules for dropdown fields.
// Purpose: Validate a selected dropdown value against its options.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! A dropdown selection must name one of the configured option values.

use crate::core::meta::DropdownFieldMeta;

/// Validates a dropdown selection.
///
/// Without configured options there is nothing to check membership against.
#[must_use]
pub fn validate_dropdown_field(
    value: Option<&str>,
    meta: Option<&DropdownFieldMeta>,
    is_final: bool,
) -> Vec<String> {
    let mut errors = Vec::new();
    let Some(meta) = meta else {
        return errors;
    };
    let value = value.filter(|value| !value.is_empty());

    if is_final && meta.common.is_required() && value.is_none() {
        errors.push("Choosing an option is required".to_string());
    }
    if let (Some(value), Some(options)) = (value, meta.values.as_deref())
        && !options.is_empty()
        && !options.iter().any(|option| option.value == value)
    {
        errors.push("Selected value must be one of the available options".to_string());
    }
    errors
}
