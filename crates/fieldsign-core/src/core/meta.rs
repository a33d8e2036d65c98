// crates/fieldsign-core/src/core/meta.rs
// ============================================================================
// Module: Fieldsign Field Metadata
// Description: Typed, kind-specific field configuration.
// Purpose: Decode stored field metadata and report configuration defects.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Field metadata is stored as loosely typed JSON next to each field. This
//! module decodes it into one struct per field kind. Signature kinds carry
//! no metadata at all, and an empty blob means "no constraints".
//!
//! Decoding is tolerant of stale data: unknown keys are ignored, and an
//! unreadable `validationLength` or a fractional `characterLimit` decodes
//! to unset. Structural mismatches,
//! such as an options list that is not a list, are rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::FieldError;
use crate::core::kind::FieldKind;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Smallest font size accepted in field configuration.
pub const MIN_FONT_SIZE: f64 = 8.0;
/// Largest font size accepted in field configuration.
pub const MAX_FONT_SIZE: f64 = 96.0;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Selectable option for radio, checkbox, and dropdown fields.
///
/// # Invariants
/// - `value` is unique within the owning field (checked at configuration time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFieldOption", rename_all = "camelCase")]
pub struct FieldOption {
    /// Editor-assigned option identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Whether the option is pre-selected.
    pub checked: bool,
    /// Option value written into the signed document.
    pub value: String,
}

impl FieldOption {
    /// Creates an unchecked option with the given value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: None,
            checked: false,
            value: value.into(),
        }
    }
}

/// Wire forms accepted for an option: a bare string or an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFieldOption {
    /// Bare string option.
    Plain(String),
    /// Object option with optional id and checked flag.
    Object {
        /// Option identifier.
        #[serde(default)]
        id: Option<u64>,
        /// Pre-selected flag.
        #[serde(default)]
        checked: bool,
        /// Option value.
        value: String,
    },
}

impl From<RawFieldOption> for FieldOption {
    fn from(raw: RawFieldOption) -> Self {
        match raw {
            RawFieldOption::Plain(value) => Self::new(value),
            RawFieldOption::Object {
                id,
                checked,
                value,
            } => Self {
                id,
                checked,
                value,
            },
        }
    }
}

// ============================================================================
// SECTION: Checkbox Selection Rules
// ============================================================================

/// Comparison applied to the number of selected checkbox options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckboxValidationRule {
    /// At least N options selected.
    AtLeast,
    /// At most N options selected.
    AtMost,
    /// Exactly N options selected.
    Exactly,
    /// Between low and high options selected, inclusive.
    Range,
}

impl CheckboxValidationRule {
    /// Parses a stored rule string; returns `None` for unknown rules.
    ///
    /// Both the editor labels ("Select at least") and the sign forms (">=")
    /// are accepted, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        let normalized = normalized.strip_prefix("select ").unwrap_or(&normalized);
        match normalized {
            "at least" | ">=" => Some(Self::AtLeast),
            "at most" | "<=" => Some(Self::AtMost),
            "exactly" | "=" | "==" => Some(Self::Exactly),
            "range" | "between" => Some(Self::Range),
            _ => None,
        }
    }

    /// Returns a human-readable label for messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AtLeast => "at least",
            Self::AtMost => "at most",
            Self::Exactly => "exactly",
            Self::Range => "between",
        }
    }
}

/// Required selection count for a checkbox rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ValidationLength {
    /// Single bound used by the scalar rules.
    Count(u64),
    /// Inclusive `[low, high]` bounds used by the range rule.
    Range(u64, u64),
}

impl ValidationLength {
    /// Decodes a stored length from JSON; unreadable input yields `None`.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(_) => json_count(value).map(Self::Count),
            Value::Array(items) => match items.as_slice() {
                [low, high] => Some(Self::Range(json_count(low)?, json_count(high)?)),
                _ => None,
            },
            Value::String(text) => Self::parse_text(text),
            _ => None,
        }
    }

    /// Parses `"N"`, `"low-high"`, or `"low,high"`.
    fn parse_text(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some((low, high)) = text.split_once(['-', ',']) {
            return Some(Self::Range(low.trim().parse().ok()?, high.trim().parse().ok()?));
        }
        text.parse().ok().map(Self::Count)
    }
}

/// Reads a non-negative integral JSON number.
fn json_count(value: &Value) -> Option<u64> {
    if let Some(count) = value.as_u64() {
        return Some(count);
    }
    let float = value.as_f64()?;
    if float.is_finite() && float >= 0.0 && float.fract() == 0.0 {
        return format!("{float:.0}").parse().ok();
    }
    None
}

/// Lenient decoder for `validationLength`.
fn deserialize_validation_length<'de, D>(
    deserializer: D,
) -> Result<Option<ValidationLength>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(ValidationLength::from_json))
}

/// Decoder for integer attributes; a fractional number decodes to unset.
///
/// Non-numeric values are still a structural mismatch.
fn deserialize_integral_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::Number(_)) => Ok(json_integer(&value)),
        Some(_) => Err(<D::Error as de::Error>::custom("invalid type: expected a number")),
    }
}

/// Reads an integral JSON number, accepting floats with no fraction.
fn json_integer(value: &Value) -> Option<i64> {
    if let Some(integer) = value.as_i64() {
        return Some(integer);
    }
    let float = value.as_f64()?;
    if float.is_finite() && float.fract() == 0.0 {
        return format!("{float:.0}").parse().ok();
    }
    None
}

/// Accepts either a string or a number and keeps its textual form.
fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

// ============================================================================
// SECTION: Per-Kind Metadata
// ============================================================================

/// Attributes shared by every metadata shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonFieldMeta {
    /// Label shown in the signing UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder shown before a value is entered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Whether a value must be supplied before completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Whether the recipient may not change the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// Font size used when rendering the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl CommonFieldMeta {
    /// Returns true when the field is marked required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// Returns true when the field is marked read-only.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only.unwrap_or(false)
    }
}

/// Metadata for name, initials, email, and date fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicFieldMeta {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: CommonFieldMeta,
    /// Horizontal alignment of the rendered value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
}

/// Metadata for text fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextFieldMeta {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: CommonFieldMeta,
    /// Prefilled text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Maximum number of characters; values `<= 0` mean unlimited.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_integral_number"
    )]
    pub character_limit: Option<i64>,
    /// Horizontal alignment of the rendered value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
}

/// Metadata for number fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberFieldMeta {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: CommonFieldMeta,
    /// Display format the value must follow (e.g. `123,456,789.00`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
    /// Prefilled value.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_string_or_number"
    )]
    pub value: Option<String>,
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    /// Inclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    /// Horizontal alignment of the rendered value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
}

/// Metadata for radio fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RadioFieldMeta {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: CommonFieldMeta,
    /// Mutually exclusive options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<FieldOption>>,
    /// Layout direction of the options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

/// Metadata for checkbox fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckboxFieldMeta {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: CommonFieldMeta,
    /// Selectable options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<FieldOption>>,
    /// Stored selection-count rule, kept verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_rule: Option<String>,
    /// Selection count bound for the rule.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_validation_length"
    )]
    pub validation_length: Option<ValidationLength>,
    /// Layout direction of the options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

impl CheckboxFieldMeta {
    /// Returns the parsed selection rule when both rule and length are set.
    ///
    /// Unknown rule strings yield `None`, which disables the count check.
    #[must_use]
    pub fn selection_rule(&self) -> Option<(CheckboxValidationRule, ValidationLength)> {
        let rule = CheckboxValidationRule::parse(self.validation_rule.as_deref()?)?;
        Some((rule, self.validation_length?))
    }
}

/// Metadata for dropdown fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropdownFieldMeta {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: CommonFieldMeta,
    /// Allowed options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<FieldOption>>,
    /// Pre-selected option value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

// ============================================================================
// SECTION: Field Metadata
// ============================================================================

/// Typed metadata for one field, tagged by kind.
///
/// # Invariants
/// - The variant always matches the kind of the owning field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldMeta {
    /// Initials metadata.
    Initials(BasicFieldMeta),
    /// Name metadata.
    Name(BasicFieldMeta),
    /// Email metadata.
    Email(BasicFieldMeta),
    /// Date metadata.
    Date(BasicFieldMeta),
    /// Text metadata.
    Text(TextFieldMeta),
    /// Number metadata.
    Number(NumberFieldMeta),
    /// Radio metadata.
    Radio(RadioFieldMeta),
    /// Checkbox metadata.
    Checkbox(CheckboxFieldMeta),
    /// Dropdown metadata.
    Dropdown(DropdownFieldMeta),
}

impl FieldMeta {
    /// Decodes stored metadata for a field of the given kind.
    ///
    /// Signature kinds, `null`, and empty objects yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidInput`] when the blob does not match the
    /// shape required by the kind.
    pub fn from_json(kind: FieldKind, value: &Value) -> Result<Option<Self>, FieldError> {
        let is_empty = match value {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if is_empty {
            return Ok(None);
        }
        let meta = match kind {
            FieldKind::Signature | FieldKind::FreeSignature => return Ok(None),
            FieldKind::Initials => Self::Initials(decode(value)?),
            FieldKind::Name => Self::Name(decode(value)?),
            FieldKind::Email => Self::Email(decode(value)?),
            FieldKind::Date => Self::Date(decode(value)?),
            FieldKind::Text => Self::Text(decode(value)?),
            FieldKind::Number => Self::Number(decode(value)?),
            FieldKind::Radio => Self::Radio(decode(value)?),
            FieldKind::Checkbox => Self::Checkbox(decode(value)?),
            FieldKind::Dropdown => Self::Dropdown(decode(value)?),
        };
        Ok(Some(meta))
    }

    /// Returns the field kind this metadata belongs to.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
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

    /// Returns the shared attributes.
    #[must_use]
    pub const fn common(&self) -> &CommonFieldMeta {
        match self {
            Self::Initials(meta) | Self::Name(meta) | Self::Email(meta) | Self::Date(meta) => {
                &meta.common
            }
            Self::Text(meta) => &meta.common,
            Self::Number(meta) => &meta.common,
            Self::Radio(meta) => &meta.common,
            Self::Checkbox(meta) => &meta.common,
            Self::Dropdown(meta) => &meta.common,
        }
    }

    /// Returns text metadata when this is a text field.
    #[must_use]
    pub const fn as_text(&self) -> Option<&TextFieldMeta> {
        if let Self::Text(meta) = self { Some(meta) } else { None }
    }

    /// Returns number metadata when this is a number field.
    #[must_use]
    pub const fn as_number(&self) -> Option<&NumberFieldMeta> {
        if let Self::Number(meta) = self { Some(meta) } else { None }
    }

    /// Returns radio metadata when this is a radio field.
    #[must_use]
    pub const fn as_radio(&self) -> Option<&RadioFieldMeta> {
        if let Self::Radio(meta) = self { Some(meta) } else { None }
    }

    /// Returns checkbox metadata when this is a checkbox field.
    #[must_use]
    pub const fn as_checkbox(&self) -> Option<&CheckboxFieldMeta> {
        if let Self::Checkbox(meta) = self { Some(meta) } else { None }
    }

    /// Returns dropdown metadata when this is a dropdown field.
    #[must_use]
    pub const fn as_dropdown(&self) -> Option<&DropdownFieldMeta> {
        if let Self::Dropdown(meta) = self { Some(meta) } else { None }
    }

    /// Reports configuration defects without affecting signing.
    ///
    /// Intended for field placement time, so misconfigured fields are caught
    /// before a document is sent rather than while a recipient signs.
    #[must_use]
    pub fn configuration_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let common = self.common();
        if common.is_read_only() && common.is_required() {
            errors.push("A field cannot be both read-only and required".to_string());
        }
        if let Some(size) = common.font_size
            && !(MIN_FONT_SIZE ..= MAX_FONT_SIZE).contains(&size)
        {
            errors.push("Font size must be between 8 and 96".to_string());
        }
        match self {
            Self::Initials(_) | Self::Name(_) | Self::Email(_) | Self::Date(_) => {}
            Self::Text(meta) => {
                if common.is_read_only() && meta.text.as_deref().is_none_or(str::is_empty) {
                    errors.push("A read-only field must have text".to_string());
                }
            }
            Self::Number(meta) => {
                if let (Some(min), Some(max)) = (meta.min_value, meta.max_value)
                    && min > max
                {
                    errors.push("Minimum value cannot be greater than maximum value".to_string());
                }
            }
            Self::Radio(meta) => {
                option_errors(meta.values.as_deref(), true, &mut errors);
                let checked = meta.values.iter().flatten().filter(|option| option.checked).count();
                if checked > 1 {
                    errors.push("There cannot be more than one checked option".to_string());
                }
            }
            Self::Checkbox(meta) => {
                option_errors(meta.values.as_deref(), false, &mut errors);
                checkbox_rule_errors(meta, &mut errors);
            }
            Self::Dropdown(meta) => {
                option_errors(meta.values.as_deref(), true, &mut errors);
                if let Some(default) = meta.default_value.as_deref()
                    && !default.is_empty()
                    && !meta.values.iter().flatten().any(|option| option.value == default)
                {
                    errors.push("Default value must be one of the available options".to_string());
                }
            }
        }
        errors
    }
}

/// Decodes a metadata struct from JSON.
fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, FieldError> {
    T::deserialize(value)
        .map_err(|err| FieldError::invalid_input(format!("Invalid field metadata: {err}")))
}

/// Reports empty, blank, or duplicate option lists.
fn option_errors(options: Option<&[FieldOption]>, require_value: bool, errors: &mut Vec<String>) {
    let Some(options) = options else {
        errors.push("Field must have at least one option".to_string());
        return;
    };
    if options.is_empty() {
        errors.push("Field must have at least one option".to_string());
    }
    if require_value && options.iter().any(|option| option.value.is_empty()) {
        errors.push("Option value cannot be empty".to_string());
    }
    let unique: BTreeSet<&str> = options.iter().map(|option| option.value.as_str()).collect();
    if unique.len() != options.len() {
        errors.push("Duplicate values are not allowed".to_string());
    }
}

/// Reports inconsistent checkbox rule configuration.
fn checkbox_rule_errors(meta: &CheckboxFieldMeta, errors: &mut Vec<String>) {
    match (meta.validation_rule.as_deref(), meta.validation_length) {
        (None, None) => {}
        (Some(_), None) => {
            errors.push("You need to specify the number of options for validation".to_string());
        }
        (None, Some(_)) => errors.push("You need to specify the validation rule".to_string()),
        (Some(raw), Some(length)) => match (CheckboxValidationRule::parse(raw), length) {
            (None, _) => errors.push(format!("Unknown checkbox validation rule: {raw}")),
            (Some(CheckboxValidationRule::Range), ValidationLength::Count(_)) => {
                errors.push("A range rule needs a lower and an upper bound".to_string());
            }
            (Some(CheckboxValidationRule::Range), ValidationLength::Range(low, high)) => {
                if low > high {
                    errors.push("Range lower bound cannot exceed the upper bound".to_string());
                }
            }
            (Some(_), ValidationLength::Range(..)) => {
                errors.push("Only the range rule accepts a pair of bounds".to_string());
            }
            (Some(_), ValidationLength::Count(_)) => {}
        },
    }
}
