// crates/fieldsign-core/src/core/kind.rs
// ============================================================================
// Module: Fieldsign Field Kinds
// Description: Closed registry of supported document field kinds.
// Purpose: Map raw kind identifiers onto a typed, exhaustively matched enum.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Field kinds select validation and formatting behavior. The enum is closed
//! so that every dispatch site is checked for exhaustiveness by the compiler.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::FieldError;

// ============================================================================
// SECTION: Field Kinds
// ============================================================================

/// Kind of a field placed on a document page.
///
/// # Invariants
/// - Serialized identifiers are stable and match the stored field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldKind {
    /// Drawn or typed signature.
    Signature,
    /// Free-form signature without a fixed recipient name.
    FreeSignature,
    /// Recipient initials.
    Initials,
    /// Recipient full name.
    Name,
    /// Recipient email address.
    Email,
    /// Server-generated signing date.
    Date,
    /// Free text input.
    Text,
    /// Numeric input.
    Number,
    /// Single choice among options.
    Radio,
    /// Multiple choice among options.
    Checkbox,
    /// Single choice from a dropdown list.
    Dropdown,
}

impl FieldKind {
    /// All field kinds in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Signature,
        Self::FreeSignature,
        Self::Initials,
        Self::Name,
        Self::Email,
        Self::Date,
        Self::Text,
        Self::Number,
        Self::Radio,
        Self::Checkbox,
        Self::Dropdown,
    ];

    /// Returns the stable identifier for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Signature => "SIGNATURE",
            Self::FreeSignature => "FREE_SIGNATURE",
            Self::Initials => "INITIALS",
            Self::Name => "NAME",
            Self::Email => "EMAIL",
            Self::Date => "DATE",
            Self::Text => "TEXT",
            Self::Number => "NUMBER",
            Self::Radio => "RADIO",
            Self::Checkbox => "CHECKBOX",
            Self::Dropdown => "DROPDOWN",
        }
    }

    /// Returns true for kinds whose completion depends on `required`.
    #[must_use]
    pub const fn is_advanced(self) -> bool {
        matches!(self, Self::Text | Self::Number | Self::Radio | Self::Checkbox | Self::Dropdown)
    }

    /// Returns true for the signature kinds.
    #[must_use]
    pub const fn is_signature(self) -> bool {
        matches!(self, Self::Signature | Self::FreeSignature)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FieldError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_field_kind(raw)
    }
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a raw kind identifier; trimmed and case-insensitive.
///
/// # Errors
///
/// Returns [`FieldError::InvalidInput`] naming the raw value when it is not
/// a known field kind.
pub fn parse_field_kind(raw: &str) -> Result<FieldKind, FieldError> {
    let normalized = raw.trim();
    FieldKind::ALL
        .into_iter()
        .find(|kind| kind.as_str().eq_ignore_ascii_case(normalized))
        .ok_or_else(|| FieldError::invalid_input(format!("Invalid field type: {raw}")))
}
