// crates/fieldsign-core/src/core/value.rs
// ============================================================================
// Module: Fieldsign Submitted Values
// Description: Recipient input submitted for a single field.
// Purpose: Represent per-kind signing input as a tagged union.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`FieldValue`] is built fresh for each signing request and never stored
//! directly. `None` payloads mean "no value"; only the derived insertion
//! text and flag are persisted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::kind::FieldKind;

// ============================================================================
// SECTION: Field Values
// ============================================================================

/// Value submitted by a recipient, keyed by field kind.
///
/// Wire form: `{ "type": "TEXT", "value": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldValue {
    /// Base64 image data URL or typed signature text.
    Signature(Option<String>),
    /// Base64 image data URL or typed signature text.
    FreeSignature(Option<String>),
    /// Initials text.
    Initials(Option<String>),
    /// Full name text.
    Name(Option<String>),
    /// Email address.
    Email(Option<String>),
    /// Presence marker; the date itself is generated at signing time.
    Date(Option<bool>),
    /// Free text; an empty string is a real value.
    Text(Option<String>),
    /// Numeric literal as entered.
    Number(Option<String>),
    /// Index into the field's options.
    Radio(Option<usize>),
    /// Indices into the field's options.
    Checkbox(Option<Vec<usize>>),
    /// Selected option value.
    Dropdown(Option<String>),
}

impl FieldValue {
    /// Returns the kind this value was submitted for.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Signature(_) => FieldKind::Signature,
            Self::FreeSignature(_) => FieldKind::FreeSignature,
            Self::Initials(_) => FieldKind::Initials,
            Self::Name(_) => FieldKind::Name,
            Self::Email(_) => FieldKind::Email,
            Self::Date(_) => FieldKind::Date,
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Radio(_) => FieldKind::Radio,
            Self::Checkbox(_) => FieldKind::Checkbox,
            Self::Dropdown(_) => FieldKind::Dropdown,
        }
    }

    /// Returns true when no value was supplied.
    ///
    /// A `false` date marker and an empty checkbox selection count as absent;
    /// an empty text string does not.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Signature(value)
            | Self::FreeSignature(value)
            | Self::Initials(value)
            | Self::Name(value)
            | Self::Email(value)
            | Self::Number(value)
            | Self::Dropdown(value) => value.as_deref().is_none_or(str::is_empty),
            Self::Text(value) => value.is_none(),
            Self::Date(marker) => !marker.unwrap_or(false),
            Self::Radio(index) => index.is_none(),
            Self::Checkbox(indices) => indices.as_ref().is_none_or(Vec::is_empty),
        }
    }

    /// Returns an absent value of the given kind.
    #[must_use]
    pub const fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Signature => Self::Signature(None),
            FieldKind::FreeSignature => Self::FreeSignature(None),
            FieldKind::Initials => Self::Initials(None),
            FieldKind::Name => Self::Name(None),
            FieldKind::Email => Self::Email(None),
            FieldKind::Date => Self::Date(None),
            FieldKind::Text => Self::Text(None),
            FieldKind::Number => Self::Number(None),
            FieldKind::Radio => Self::Radio(None),
            FieldKind::Checkbox => Self::Checkbox(None),
            FieldKind::Dropdown => Self::Dropdown(None),
        }
    }
}

// ============================================================================
// SECTION: Submission Mode
// ============================================================================

/// Whether a value is recorded as final or saved as an in-progress draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionMode {
    /// Final submission; required fields are enforced.
    #[default]
    Final,
    /// In-progress submission; absent values are recorded as blank.
    Draft,
}

impl SubmissionMode {
    /// Returns true for final submissions.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Final)
    }

    /// Returns a stable label for the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Final => "final",
            Self::Draft => "draft",
        }
    }
}
