// crates/fieldsign-core/src/insertion/email.rs
// ============================================================================
// Module: Email Syntax Check
// Description: Syntactic email validation for email fields.
// Purpose: Reject malformed addresses before they are burned into a document.
// Dependencies: regex
// ============================================================================

//! ## Overview
//! Email fields accept the addresses a typical web form would: a local part
//! of letters, digits, and `_ ' + - .` that neither starts with a dot nor
//! contains `..`, followed by dotted domain labels and an alphabetic
//! top-level domain of at least two letters.

use std::sync::LazyLock;

use regex::Regex;

/// Longest accepted address.
const MAX_EMAIL_LENGTH: usize = 254;

/// Local part, `@`, dotted domain labels, alphabetic top-level domain.
static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .ok()
});

/// Returns true for a syntactically valid email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH || value.starts_with('.') {
        return false;
    }
    let local_has_double_dot =
        value.split_once('@').is_some_and(|(local, _)| local.contains(".."));
    !local_has_double_dot
        && EMAIL_PATTERN.as_ref().is_some_and(|pattern| pattern.is_match(value))
}
