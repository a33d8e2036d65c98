// crates/fieldsign-core/src/validation/text.rs
// ============================================================================
// Module: Text Field Validation
// Description: Length, required, and read-only rules for text fields.
// Purpose: Validate free text against text field metadata.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Text values are checked for required presence, the character limit, and
//! read-only fields left empty.

use crate::core::meta::TextFieldMeta;

/// Validates a text value; an empty list means the value is acceptable.
///
/// Length is counted in Unicode scalar values, and a `characterLimit` of
/// zero or less disables the limit.
#[must_use]
pub fn validate_text_field(
    value: Option<&str>,
    meta: Option<&TextFieldMeta>,
    is_final: bool,
) -> Vec<String> {
    let mut errors = Vec::new();
    let Some(meta) = meta else {
        return errors;
    };
    let value = value.unwrap_or_default();

    if is_final && meta.common.is_required() && value.is_empty() {
        errors.push("Value is required".to_string());
    }
    if let Some(limit) = meta.character_limit.filter(|limit| *limit > 0) {
        let length = value.chars().count();
        if usize::try_from(limit).is_ok_and(|limit| length > limit) {
            errors.push(format!(
                "Value length ({length}) exceeds the character limit ({limit})"
            ));
        }
    }
    if meta.common.is_read_only() && value.is_empty() {
        errors.push("A read-only field must have text".to_string());
    }
    errors
}
