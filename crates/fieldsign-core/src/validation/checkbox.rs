// crates/fieldsign-core/src/validation/checkbox.rs
// ============================================================================
// Module: Checkbox Field Validation
// Description: Bounds and selection-count rules for checkbox fields.
// Purpose: Validate selected option indices against checkbox metadata.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Each selected index must address an existing option. When both a known
//! `validationRule` and a `validationLength` are configured, the number of
//! selected options must satisfy the rule. Unknown rule strings skip the
//! count check instead of failing, so stale configuration never blocks a
//! signer; [`crate::FieldMeta::configuration_errors`] reports them instead.
//! Repeated indices name the same option and are counted once.

use std::collections::BTreeSet;

use crate::core::meta::CheckboxFieldMeta;
use crate::core::meta::CheckboxValidationRule;
use crate::core::meta::ValidationLength;

/// Validates selected checkbox indices.
#[must_use]
pub fn validate_checkbox_field(
    indices: Option<&[usize]>,
    meta: Option<&CheckboxFieldMeta>,
    is_final: bool,
) -> Vec<String> {
    let mut errors = Vec::new();
    let indices = indices.unwrap_or_default();
    let option_count = meta.and_then(|meta| meta.values.as_ref()).map_or(0, Vec::len);

    if is_final && meta.is_some_and(|meta| meta.common.is_required()) && indices.is_empty() {
        errors.push("Selecting an option is required".to_string());
    }
    if indices.iter().any(|index| *index >= option_count) {
        errors.push("Selected option is out of range".to_string());
    }
    if !indices.is_empty()
        && let Some((rule, length)) = meta.and_then(CheckboxFieldMeta::selection_rule)
        && let Some(message) =
            check_selection_count(rule, length, selected_option_count(indices))
    {
        errors.push(message);
    }
    errors
}

/// Returns the number of distinct options addressed by `indices`.
#[must_use]
pub fn selected_option_count(indices: &[usize]) -> usize {
    indices.iter().collect::<BTreeSet<_>>().len()
}

/// Checks a selection count against a rule; returns the failure message.
///
/// A length whose shape does not fit the rule (a single count for `range`,
/// or a pair for the scalar rules) is treated as misconfigured and skipped.
#[must_use]
pub fn check_selection_count(
    rule: CheckboxValidationRule,
    length: ValidationLength,
    count: usize,
) -> Option<String> {
    let count = u64::try_from(count).unwrap_or(u64::MAX);
    let label = rule.label();
    match (rule, length) {
        (CheckboxValidationRule::AtLeast, ValidationLength::Count(bound)) if count < bound => {
            Some(format!("Select {label} {bound} options (selected {count})"))
        }
        (CheckboxValidationRule::AtMost, ValidationLength::Count(bound)) if count > bound => {
            Some(format!("Select {label} {bound} options (selected {count})"))
        }
        (CheckboxValidationRule::Exactly, ValidationLength::Count(bound)) if count != bound => {
            Some(format!("Select {label} {bound} options (selected {count})"))
        }
        (CheckboxValidationRule::Range, ValidationLength::Range(low, high))
            if count < low || count > high =>
        {
            Some(format!("Select {label} {low} and {high} options (selected {count})"))
        }
        _ => None,
    }
}
