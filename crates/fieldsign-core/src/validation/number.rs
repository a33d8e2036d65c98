// crates/fieldsign-core/src/validation/number.rs
// ============================================================================
// Module: Number Field Validation
// Description: Format, range, and required rules for number fields.
// Purpose: Validate numeric literals with decimal-exact range checks.
// Dependencies: bigdecimal, regex, crate::core
// ============================================================================

//! ## Overview
//! Number values are entered as text. When the field selects a display
//! format the value must follow it (grouping separators included); without
//! a format the value must be a plain decimal literal. Range checks run on
//! `BigDecimal` so bounds such as `0.1` compare exactly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::str::FromStr;
use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use regex::Regex;

use crate::core::meta::NumberFieldMeta;

// ============================================================================
// SECTION: Formats
// ============================================================================

/// Supported number display formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Comma grouping, dot decimals: `123,456,789.00`.
    CommaGroupedDotDecimal,
    /// Dot grouping, comma decimals: `123.456.789,00`.
    DotGroupedCommaDecimal,
    /// Single comma group, dot decimals: `123456,789.00`.
    CommaSeparatedDotDecimal,
}

impl NumberFormat {
    /// Parses a stored format label; unknown labels yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "123,456,789.00" => Some(Self::CommaGroupedDotDecimal),
            "123.456.789,00" => Some(Self::DotGroupedCommaDecimal),
            "123456,789.00" => Some(Self::CommaSeparatedDotDecimal),
            _ => None,
        }
    }

    /// Returns the stored label for the format.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CommaGroupedDotDecimal => "123,456,789.00",
            Self::DotGroupedCommaDecimal => "123.456.789,00",
            Self::CommaSeparatedDotDecimal => "123456,789.00",
        }
    }

    /// Returns the pattern values in this format must match.
    fn pattern(self) -> &'static LazyLock<Option<Regex>> {
        match self {
            Self::CommaGroupedDotDecimal => &COMMA_GROUPED,
            Self::DotGroupedCommaDecimal => &DOT_GROUPED,
            Self::CommaSeparatedDotDecimal => &COMMA_SEPARATED,
        }
    }

    /// Rewrites a formatted value as a plain decimal literal.
    fn normalize(self, value: &str) -> String {
        match self {
            Self::CommaGroupedDotDecimal | Self::CommaSeparatedDotDecimal => value.replace(',', ""),
            Self::DotGroupedCommaDecimal => value.replace('.', "").replace(',', "."),
        }
    }
}

/// Comma-grouped values with up to two decimals.
static COMMA_GROUPED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:\d{1,3}(?:,\d{3})*|\d+)(?:\.\d{1,2})?$").ok());
/// Dot-grouped values with up to two comma decimals.
static DOT_GROUPED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:\d{1,3}(?:\.\d{3})*|\d+)(?:,\d{1,2})?$").ok());
/// Values with a single comma group and up to two decimals.
static COMMA_SEPARATED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d+(?:,\d{1,3}(?:\.\d{1,2})?)?$").ok());
/// Plain decimal literal.
static PLAIN_DECIMAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)$").ok());

/// Matches against a lazily compiled pattern; fails closed if it did not compile.
fn is_match(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|regex| regex.is_match(value))
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a number value, honoring the display format when one is set.
///
/// Returns `None` when the value does not follow the format or is not a
/// decimal literal.
#[must_use]
pub fn parse_number_value(value: &str, format: Option<NumberFormat>) -> Option<BigDecimal> {
    let value = value.trim();
    let plain = match format {
        Some(format) => {
            if !is_match(format.pattern(), value) {
                return None;
            }
            format.normalize(value)
        }
        None => {
            if !is_match(&PLAIN_DECIMAL, value) {
                return None;
            }
            pad_plain_decimal(value)
        }
    };
    BigDecimal::from_str(&plain).ok()
}

/// Adds the zero digits omitted around a bare decimal point (`.5`, `5.`).
fn pad_plain_decimal(value: &str) -> String {
    let (sign, digits) = match value.strip_prefix(['+', '-']) {
        Some(rest) => (&value[.. 1], rest),
        None => ("", value),
    };
    let mut padded = String::with_capacity(value.len() + 2);
    padded.push_str(sign);
    if digits.starts_with('.') {
        padded.push('0');
    }
    padded.push_str(digits.strip_suffix('.').unwrap_or(digits));
    padded
}

/// Converts a configured bound into a decimal.
fn decimal_bound(bound: f64) -> Option<BigDecimal> {
    if !bound.is_finite() {
        return None;
    }
    BigDecimal::from_str(&bound.to_string()).ok()
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates a number value against number field metadata.
///
/// Bounds are inclusive. An empty value is only an error when the field is
/// required at final submission or read-only.
#[must_use]
pub fn validate_number_field(
    value: Option<&str>,
    meta: Option<&NumberFieldMeta>,
    is_final: bool,
) -> Vec<String> {
    let mut errors = Vec::new();
    let value = value.unwrap_or_default();
    let required = meta.is_some_and(|meta| meta.common.is_required());
    let read_only = meta.is_some_and(|meta| meta.common.is_read_only());

    if value.trim().is_empty() {
        if is_final && required {
            errors.push("Value is required".to_string());
        }
        if read_only {
            errors.push("A read-only field must have a value".to_string());
        }
        return errors;
    }

    let format =
        meta.and_then(|meta| meta.number_format.as_deref()).and_then(NumberFormat::parse);
    let Some(number) = parse_number_value(value, format) else {
        match format {
            Some(format) => errors.push(format!(
                "Value {value} does not match the number format - {}",
                format.label()
            )),
            None => errors.push("Value is not a valid number".to_string()),
        }
        return errors;
    };

    if let Some(meta) = meta {
        if let Some(min) = meta.min_value
            && decimal_bound(min).is_some_and(|bound| number < bound)
        {
            errors.push(format!("Value {value} is less than the minimum value of {min}"));
        }
        if let Some(max) = meta.max_value
            && decimal_bound(max).is_some_and(|bound| number > bound)
        {
            errors.push(format!("Value {value} is greater than the maximum value of {max}"));
        }
    }
    errors
}

// ============================================================================
// SECTION: Tests
// ============================================================================
