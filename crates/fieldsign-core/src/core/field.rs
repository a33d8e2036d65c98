// crates/fieldsign-core/src/core/field.rs
// ============================================================================
// Module: Fieldsign Field Records
// Description: Field placeholders placed on document pages.
// Purpose: Hold stored field state consumed and updated during signing.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`Field`] is created when a document is prepared; its kind never
//! changes afterwards. Signing reads the stored metadata and writes back
//! only `custom_text` and `inserted`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::error::FieldError;
use crate::core::kind::FieldKind;
use crate::core::meta::FieldMeta;

// ============================================================================
// SECTION: Identifiers
// ============================================================================

/// Field identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(u64);

impl FieldId {
    /// Creates a new field identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for FieldId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

/// Recipient identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipientId(u64);

impl RecipientId {
    /// Creates a new recipient identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for RecipientId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Insertion Result
// ============================================================================

/// Canonical value recorded for a field after signing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInsertion {
    /// Text burned into the signed document.
    pub custom_text: String,
    /// Whether a genuine value was recorded.
    pub inserted: bool,
}

impl FieldInsertion {
    /// Result for a field left blank.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            custom_text: String::new(),
            inserted: false,
        }
    }

    /// Result for a field filled with `custom_text`.
    pub fn filled(custom_text: impl Into<String>) -> Self {
        Self {
            custom_text: custom_text.into(),
            inserted: true,
        }
    }
}

// ============================================================================
// SECTION: Field
// ============================================================================

/// Field placed on a document page for one recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field identifier.
    pub id: FieldId,
    /// Recipient responsible for the field.
    pub recipient_id: RecipientId,
    /// Field kind.
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// One-based page number.
    #[serde(default = "first_page")]
    pub page: u32,
    /// Stored kind-specific metadata, untyped.
    #[serde(default)]
    pub field_meta: Value,
    /// Recorded canonical text.
    #[serde(default)]
    pub custom_text: String,
    /// Whether a genuine value has been recorded.
    #[serde(default)]
    pub inserted: bool,
}

/// Default page for fields without one.
const fn first_page() -> u32 {
    1
}

impl Field {
    /// Creates an unsigned field without metadata.
    #[must_use]
    pub const fn new(id: FieldId, recipient_id: RecipientId, kind: FieldKind) -> Self {
        Self {
            id,
            recipient_id,
            kind,
            page: 1,
            field_meta: Value::Null,
            custom_text: String::new(),
            inserted: false,
        }
    }

    /// Replaces the stored metadata.
    #[must_use]
    pub fn with_meta(mut self, field_meta: Value) -> Self {
        self.field_meta = field_meta;
        self
    }

    /// Decodes the stored metadata for this field's kind.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidInput`] when the stored blob does not
    /// match the kind.
    pub fn meta(&self) -> Result<Option<FieldMeta>, FieldError> {
        FieldMeta::from_json(self.kind, &self.field_meta)
    }

    /// Records a signing result on the field.
    pub fn apply_insertion(&mut self, insertion: FieldInsertion) {
        self.custom_text = insertion.custom_text;
        self.inserted = insertion.inserted;
    }
}
