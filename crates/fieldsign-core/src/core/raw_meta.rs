// crates/fieldsign-core/src/core/raw_meta.rs
// ============================================================================
// Module: Fieldsign Raw Metadata Parsing
// Description: Lenient decoding of string-only metadata maps.
// Purpose: Turn PDF-extracted key/value strings into typed field metadata.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Metadata extracted from PDF placeholders arrives as string pairs only.
//! Boolean keys accept the literal `"true"`, numeric keys keep only finite
//! numbers (unparseable values are dropped), and every other key passes
//! through unchanged. The resulting object is then decoded with the same
//! rules as stored metadata.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Map;
use serde_json::Number;
use serde_json::Value;

use crate::core::error::FieldError;
use crate::core::kind::FieldKind;
use crate::core::meta::FieldMeta;

// ============================================================================
// SECTION: Key Classes
// ============================================================================

/// Keys decoded as booleans.
const BOOLEAN_KEYS: &[&str] = &["readOnly", "required"];
/// Keys decoded as finite numbers.
const NUMERIC_KEYS: &[&str] = &["fontSize", "maxValue", "minValue", "characterLimit"];

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a string-only metadata map into typed metadata for `kind`.
///
/// Signature kinds and empty maps yield `None`.
///
/// # Errors
///
/// Returns [`FieldError::InvalidInput`] when a passed-through value does not
/// fit the metadata shape of the kind.
pub fn parse_field_metadata(
    raw: &BTreeMap<String, String>,
    kind: FieldKind,
) -> Result<Option<FieldMeta>, FieldError> {
    if kind.is_signature() || raw.is_empty() {
        return Ok(None);
    }
    FieldMeta::from_json(kind, &Value::Object(raw_metadata_object(raw)))
}

/// Builds the JSON object for a raw metadata map.
#[must_use]
pub fn raw_metadata_object(raw: &BTreeMap<String, String>) -> Map<String, Value> {
    let mut object = Map::new();
    for (key, value) in raw {
        if BOOLEAN_KEYS.contains(&key.as_str()) {
            object.insert(key.clone(), Value::Bool(value == "true"));
        } else if NUMERIC_KEYS.contains(&key.as_str()) {
            if let Some(number) = parse_finite_number(value) {
                object.insert(key.clone(), Value::Number(number));
            }
        } else {
            object.insert(key.clone(), Value::String(value.clone()));
        }
    }
    object
}

/// Parses a finite number; integral values become JSON integers.
fn parse_finite_number(raw: &str) -> Option<Number> {
    let trimmed = raw.trim();
    if let Ok(integer) = trimmed.parse::<i64>() {
        return Some(Number::from(integer));
    }
    let float = trimmed.parse::<f64>().ok().filter(|value| value.is_finite())?;
    if float.fract() == 0.0
        && let Ok(integer) = format!("{float:.0}").parse::<i64>()
    {
        return Some(Number::from(integer));
    }
    Number::from_f64(float)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only assertions are permitted.")]

    use super::parse_finite_number;

    #[test]
    fn integral_strings_become_integers() {
        assert_eq!(parse_finite_number("12").unwrap().as_i64(), Some(12));
        assert_eq!(parse_finite_number("12.0").unwrap().as_i64(), Some(12));
        assert_eq!(parse_finite_number(" 7 ").unwrap().as_i64(), Some(7));
    }

    #[test]
    fn fractional_strings_stay_floats() {
        assert_eq!(parse_finite_number("1.5").unwrap().as_f64(), Some(1.5));
    }

    #[test]
    fn non_finite_and_garbage_are_dropped() {
        assert!(parse_finite_number("abc").is_none());
        assert!(parse_finite_number("NaN").is_none());
        assert!(parse_finite_number("inf").is_none());
        assert!(parse_finite_number("").is_none());
    }
}
