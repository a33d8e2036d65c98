// crates/fieldsign-core/src/validation/mod.rs
// ============================================================================
// Module: Fieldsign Validators
// Description: Per-kind validation of submitted field values.
// Purpose: Check submitted values against field metadata before insertion.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Each validator is a pure function from (value, metadata, final flag) to a
//! list of messages; an empty list means valid. The final flag separates
//! interactive validation (lenient) from the check run before a signature
//! is recorded (strict): required-but-empty only fails at final submission.
//! Missing metadata means no constraints beyond the kind's defaults.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod checkbox;
pub mod dropdown;
pub mod number;
pub mod radio;
pub mod text;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use checkbox::check_selection_count;
pub use checkbox::selected_option_count;
pub use checkbox::validate_checkbox_field;
pub use dropdown::validate_dropdown_field;
pub use number::NumberFormat;
pub use number::parse_number_value;
pub use number::validate_number_field;
pub use radio::validate_radio_field;
pub use text::validate_text_field;

use crate::core::meta::FieldMeta;
use crate::core::value::FieldValue;

// ============================================================================
// SECTION: Dispatch
// ============================================================================

/// Runs the validator matching the value's kind.
///
/// Kinds without configurable rules (signatures, name, initials, email,
/// date) are checked by the insertion step instead and yield no messages.
#[must_use]
pub fn validate_field_value(
    value: &FieldValue,
    meta: Option<&FieldMeta>,
    is_final: bool,
) -> Vec<String> {
    match value {
        FieldValue::Text(text) => {
            validate_text_field(text.as_deref(), meta.and_then(FieldMeta::as_text), is_final)
        }
        FieldValue::Number(number) => {
            validate_number_field(number.as_deref(), meta.and_then(FieldMeta::as_number), is_final)
        }
        FieldValue::Dropdown(selected) => validate_dropdown_field(
            selected.as_deref(),
            meta.and_then(FieldMeta::as_dropdown),
            is_final,
        ),
        FieldValue::Radio(index) => {
            validate_radio_field(*index, meta.and_then(FieldMeta::as_radio), is_final)
        }
        FieldValue::Checkbox(indices) => validate_checkbox_field(
            indices.as_deref(),
            meta.and_then(FieldMeta::as_checkbox),
            is_final,
        ),
        FieldValue::Signature(_)
        | FieldValue::FreeSignature(_)
        | FieldValue::Initials(_)
        | FieldValue::Name(_)
        | FieldValue::Email(_)
        | FieldValue::Date(_) => Vec::new(),
    }
}
