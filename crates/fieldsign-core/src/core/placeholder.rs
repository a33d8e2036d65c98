// crates/fieldsign-core/src/core/placeholder.rs
// ============================================================================
// Module: Fieldsign PDF Placeholders
// Description: Parsing of `{{KIND, rN, key=value}}` placeholders in PDF text.
// Purpose: Produce field kinds, recipients, and metadata from document text.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Authors can mark fields directly in a PDF with text placeholders such as
//! `{{text, r1, required=true, characterLimit=20}}`. The first entry is the
//! field kind, the second the one-based recipient (`r1`, `r2`, ...), and the
//! remaining entries are `key=value` metadata pairs decoded leniently by
//! [`parse_field_metadata`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::error::FieldError;
use crate::core::kind::FieldKind;
use crate::core::kind::parse_field_kind;
use crate::core::meta::FieldMeta;
use crate::core::raw_meta::parse_field_metadata;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Placeholder opening delimiter.
const OPEN: &str = "{{";
/// Placeholder closing delimiter.
const CLOSE: &str = "}}";
/// Upper bound on placeholder body length.
pub const MAX_PLACEHOLDER_LENGTH: usize = 1024;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Field described by a PDF placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderField {
    /// Field kind.
    pub kind: FieldKind,
    /// One-based recipient position.
    pub recipient_index: u32,
    /// Metadata pairs as written.
    pub raw_meta: BTreeMap<String, String>,
    /// Metadata decoded from `raw_meta`.
    pub meta: Option<FieldMeta>,
}

/// Placeholder located in a block of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderMatch {
    /// Byte offset of the opening delimiter.
    pub start: usize,
    /// Byte offset just past the closing delimiter.
    pub end: usize,
    /// Parsed placeholder.
    pub field: PlaceholderField,
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses one placeholder, with or without the surrounding braces.
///
/// # Errors
///
/// Returns [`FieldError::InvalidInput`] when the kind, recipient, or a
/// metadata pair is malformed.
pub fn parse_placeholder(text: &str) -> Result<PlaceholderField, FieldError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix(OPEN)
        .and_then(|rest| rest.strip_suffix(CLOSE))
        .unwrap_or(trimmed);
    if body.len() > MAX_PLACEHOLDER_LENGTH {
        return Err(FieldError::invalid_input("Placeholder exceeds maximum length"));
    }

    let mut parts = body.split(',').map(str::trim);
    let kind = match parts.next() {
        Some(raw) if !raw.is_empty() => parse_field_kind(raw)?,
        _ => return Err(FieldError::invalid_input("Placeholder is missing a field type")),
    };
    let recipient_index = match parts.next() {
        Some(raw) => parse_recipient(raw)?,
        None => return Err(FieldError::invalid_input("Placeholder is missing a recipient")),
    };

    let mut raw_meta = BTreeMap::new();
    for part in parts.filter(|part| !part.is_empty()) {
        let Some((key, value)) = part.split_once('=') else {
            return Err(FieldError::invalid_input(format!(
                "Invalid placeholder attribute: {part}"
            )));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(FieldError::invalid_input(format!(
                "Invalid placeholder attribute: {part}"
            )));
        }
        raw_meta.insert(key.to_string(), value.trim().to_string());
    }

    let meta = parse_field_metadata(&raw_meta, kind)?;
    Ok(PlaceholderField {
        kind,
        recipient_index,
        raw_meta,
        meta,
    })
}

/// Finds and parses every placeholder in `text`, in document order.
///
/// # Errors
///
/// Returns the first parse failure, or an error for an unterminated
/// placeholder.
pub fn find_placeholders(text: &str) -> Result<Vec<PlaceholderMatch>, FieldError> {
    let mut matches = Vec::new();
    let mut cursor = 0;
    while let Some(offset) = text[cursor ..].find(OPEN) {
        let start = cursor + offset;
        let body_start = start + OPEN.len();
        let Some(close) = text[body_start ..].find(CLOSE) else {
            return Err(FieldError::invalid_input("Unterminated placeholder"));
        };
        let end = body_start + close + CLOSE.len();
        let field = parse_placeholder(&text[start .. end])?;
        matches.push(PlaceholderMatch {
            start,
            end,
            field,
        });
        cursor = end;
    }
    Ok(matches)
}

/// Parses a recipient marker such as `r1` or `R2`.
fn parse_recipient(raw: &str) -> Result<u32, FieldError> {
    raw.strip_prefix(['r', 'R'])
        .and_then(|digits| digits.parse::<u32>().ok())
        .filter(|index| *index > 0)
        .ok_or_else(|| FieldError::invalid_input(format!("Invalid placeholder recipient: {raw}")))
}
