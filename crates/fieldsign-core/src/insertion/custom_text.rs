// crates/fieldsign-core/src/insertion/custom_text.rs
// ============================================================================
// Module: Choice Field Custom Text
// Description: Canonical text encodings for radio and checkbox selections.
// Purpose: Store selections as text that can be mapped back to options.
// Dependencies: serde_json, crate::core
// ============================================================================

//! ## Overview
//! Radio selections are stored as the selected option's value. Checkbox
//! selections are stored as a JSON array of the selected option values in
//! option order. Read-only rendering recovers the selection from the stored
//! text and the field's current options, which works as long as option
//! values are unique within the field.

use std::collections::BTreeSet;

use crate::core::meta::FieldOption;

// ============================================================================
// SECTION: Radio
// ============================================================================

/// Encodes a radio selection; `None` when the index is out of range.
#[must_use]
pub fn to_radio_custom_text(options: &[FieldOption], index: usize) -> Option<String> {
    options.get(index).map(|option| option.value.clone())
}

/// Recovers the selected radio index from stored text.
#[must_use]
pub fn from_radio_custom_text(text: &str, options: &[FieldOption]) -> Option<usize> {
    options.iter().position(|option| option.value == text)
}

// ============================================================================
// SECTION: Checkbox
// ============================================================================

/// Encodes a checkbox selection; `None` when any index is out of range.
///
/// Duplicate indices collapse and the output follows option order.
#[must_use]
pub fn to_checkbox_custom_text(options: &[FieldOption], indices: &[usize]) -> Option<String> {
    let selected: BTreeSet<usize> = indices.iter().copied().collect();
    let values = selected
        .into_iter()
        .map(|index| options.get(index).map(|option| option.value.as_str()))
        .collect::<Option<Vec<&str>>>()?;
    serde_json::to_string(&values).ok()
}

/// Recovers the sorted checkbox indices from stored text.
///
/// Returns `None` when the text is not a JSON string array or names a value
/// that is not among the options.
#[must_use]
pub fn from_checkbox_custom_text(text: &str, options: &[FieldOption]) -> Option<Vec<usize>> {
    let values: Vec<String> = serde_json::from_str(text).ok()?;
    let selected = values
        .iter()
        .map(|value| options.iter().position(|option| &option.value == value))
        .collect::<Option<BTreeSet<usize>>>()?;
    Some(selected.into_iter().collect())
}
