// crates/fieldsign-core/src/insertion/mod.rs
// ============================================================================
// Module: Fieldsign Insertion
// Description: Conversion of submitted values into recorded field text.
// Purpose: Produce the canonical `customText` and `inserted` flag per field.
// Dependencies: chrono, crate::core, crate::validation
// ============================================================================

//! ## Overview
//! Insertion is the authoritative step before a value is persisted: it
//! re-checks the value in final-submission mode and renders the text that is
//! burned into the signed document. Dispatch is an exhaustive match over
//! [`FieldValue`], so a new field kind cannot be added without handling it
//! here. The signing instant is passed in; this module never reads the
//! wall clock.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod custom_text;
pub mod date;
pub mod email;
pub mod signature;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use custom_text::from_checkbox_custom_text;
pub use custom_text::from_radio_custom_text;
pub use custom_text::to_checkbox_custom_text;
pub use custom_text::to_radio_custom_text;
pub use date::format_signing_date;
pub use date::is_renderable_date_format;
pub use date::parse_timezone;
pub use date::translate_date_format;
pub use email::is_valid_email;
pub use signature::is_base64_image;

// ============================================================================
// SECTION: Imports
// ============================================================================

use chrono::DateTime;
use chrono::Utc;

use crate::core::document::DocumentMeta;
use crate::core::error::FieldError;
use crate::core::field::Field;
use crate::core::field::FieldInsertion;
use crate::core::meta::CheckboxFieldMeta;
use crate::core::meta::FieldMeta;
use crate::core::meta::FieldOption;
use crate::core::value::FieldValue;
use crate::validation::check_selection_count;
use crate::validation::selected_option_count;
use crate::validation::validate_dropdown_field;
use crate::validation::validate_number_field;
use crate::validation::validate_text_field;

// ============================================================================
// SECTION: Messages
// ============================================================================

/// Email value failed the syntax check.
const INVALID_EMAIL: &str = "Invalid email";
/// Name or initials value was not supplied.
const VALUE_REQUIRED: &str = "Value is required";
/// Number value failed validation.
const INVALID_NUMBER: &str = "Invalid number";
/// Text value failed validation.
const INVALID_TEXT: &str = "Invalid text";
/// Radio index does not address an option.
const INVALID_RADIO: &str = "Invalid radio value";
/// Checkbox indices do not address options.
const INVALID_CHECKBOX: &str = "Invalid checkbox values";
/// Checkbox selection count violates the configured rule.
const CHECKBOX_LENGTH: &str = "Checkbox values failed length validation";
/// Dropdown value failed validation.
const INVALID_DROPDOWN: &str = "Invalid dropdown value";
/// Typed signature submitted while only drawn signatures are accepted.
const TYPED_SIGNATURE_DISABLED: &str =
    "Typed signatures are not allowed. Please draw your signature";

// ============================================================================
// SECTION: Extraction
// ============================================================================

/// Converts a submitted value into the text and flag recorded on `field`.
///
/// # Errors
///
/// Returns [`FieldError::TypeMismatch`] when the value was submitted for a
/// different kind, and [`FieldError::InvalidInput`] when the value or the
/// stored metadata is rejected.
pub fn extract_field_insertion_values(
    value: &FieldValue,
    field: &Field,
    document_meta: &DocumentMeta,
    now: DateTime<Utc>,
) -> Result<FieldInsertion, FieldError> {
    if value.kind() != field.kind {
        return Err(FieldError::TypeMismatch {
            expected: field.kind,
            received: value.kind(),
        });
    }
    let meta = field.meta()?;
    let meta = meta.as_ref();

    match value {
        FieldValue::Email(email) => match non_empty(email.as_deref()) {
            None => Ok(FieldInsertion::blank()),
            Some(email) if is_valid_email(email) => Ok(FieldInsertion::filled(email)),
            Some(_) => Err(FieldError::invalid_input(INVALID_EMAIL)),
        },
        FieldValue::Name(text) | FieldValue::Initials(text) => non_empty(text.as_deref())
            .map(FieldInsertion::filled)
            .ok_or_else(|| FieldError::invalid_input(VALUE_REQUIRED)),
        FieldValue::Date(marker) => {
            if !marker.unwrap_or(false) {
                return Ok(FieldInsertion::blank());
            }
            let formatted = format_signing_date(
                now,
                document_meta.date_format_or_default(),
                document_meta.timezone_or_default(),
            )?;
            Ok(FieldInsertion::filled(formatted))
        }
        FieldValue::Number(number) => {
            let Some(number) = non_empty(number.as_deref()) else {
                return Ok(FieldInsertion::blank());
            };
            let errors =
                validate_number_field(Some(number), meta.and_then(FieldMeta::as_number), true);
            if errors.is_empty() {
                Ok(FieldInsertion::filled(number))
            } else {
                Err(FieldError::invalid_input(INVALID_NUMBER))
            }
        }
        FieldValue::Text(text) => {
            let Some(text) = text.as_deref() else {
                return Ok(FieldInsertion::blank());
            };
            let errors = validate_text_field(Some(text), meta.and_then(FieldMeta::as_text), true);
            if errors.is_empty() {
                Ok(FieldInsertion::filled(text))
            } else {
                Err(FieldError::invalid_input(INVALID_TEXT))
            }
        }
        FieldValue::Radio(index) => {
            let Some(index) = *index else {
                return Ok(FieldInsertion::blank());
            };
            let options = meta
                .and_then(FieldMeta::as_radio)
                .and_then(|meta| meta.values.as_deref())
                .unwrap_or_default();
            to_radio_custom_text(options, index)
                .map(FieldInsertion::filled)
                .ok_or_else(|| FieldError::invalid_input(INVALID_RADIO))
        }
        FieldValue::Checkbox(indices) => {
            let indices = indices.as_deref().unwrap_or_default();
            if indices.is_empty() {
                return Ok(FieldInsertion::blank());
            }
            extract_checkbox(indices, meta.and_then(FieldMeta::as_checkbox))
        }
        FieldValue::Dropdown(selected) => {
            let Some(selected) = non_empty(selected.as_deref()) else {
                return Ok(FieldInsertion::blank());
            };
            let errors =
                validate_dropdown_field(Some(selected), meta.and_then(FieldMeta::as_dropdown), true);
            if errors.is_empty() {
                Ok(FieldInsertion::filled(selected))
            } else {
                Err(FieldError::invalid_input(INVALID_DROPDOWN))
            }
        }
        FieldValue::Signature(signature) | FieldValue::FreeSignature(signature) => {
            let Some(signature) = non_empty(signature.as_deref()) else {
                return Ok(FieldInsertion::blank());
            };
            if !is_base64_image(signature) && !document_meta.allows_typed_signatures() {
                return Err(FieldError::invalid_input(TYPED_SIGNATURE_DISABLED));
            }
            Ok(FieldInsertion {
                custom_text: String::new(),
                inserted: true,
            })
        }
    }
}

/// Encodes a non-empty checkbox selection and enforces its count rule.
fn extract_checkbox(
    indices: &[usize],
    meta: Option<&CheckboxFieldMeta>,
) -> Result<FieldInsertion, FieldError> {
    let options: &[FieldOption] =
        meta.and_then(|meta| meta.values.as_deref()).unwrap_or_default();
    let encoded = to_checkbox_custom_text(options, indices)
        .ok_or_else(|| FieldError::invalid_input(INVALID_CHECKBOX))?;
    if let Some((rule, length)) = meta.and_then(CheckboxFieldMeta::selection_rule)
        && check_selection_count(rule, length, selected_option_count(indices)).is_some()
    {
        return Err(FieldError::invalid_input(CHECKBOX_LENGTH));
    }
    Ok(FieldInsertion::filled(encoded))
}

/// Treats empty strings as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
