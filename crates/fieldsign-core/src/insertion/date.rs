// crates/fieldsign-core/src/insertion/date.rs
// ============================================================================
// Module: Signing Date Formatting
// Description: Rendering of the signing instant in document date settings.
// Purpose: Produce the text burned into date fields at signing time.
// Dependencies: chrono, chrono-tz, crate::core
// ============================================================================

//! ## Overview
//! Document date formats are written with Luxon-style tokens (`yyyy-MM-dd
//! hh:mm a`). They are translated into a `chrono` strftime pattern once per
//! call and rendered in the document's IANA timezone. Text inside single
//! quotes is literal, `''` is an escaped quote, and letters that are not
//! tokens pass through unchanged.
//!
//! Security posture: format strings come from document settings; the
//! translated pattern is checked for parse errors before rendering.

// ============================================================================
// SECTION: Imports
// ============================================================================

use chrono::DateTime;
use chrono::Utc;
use chrono::format::Item;
use chrono::format::StrftimeItems;
use chrono_tz::Tz;

use crate::core::error::FieldError;

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Formats `now` in `timezone` using a Luxon-style `format`.
///
/// # Errors
///
/// Returns [`FieldError::InvalidInput`] when the timezone is not an IANA
/// name or the format cannot be rendered.
pub fn format_signing_date(
    now: DateTime<Utc>,
    format: &str,
    timezone: &str,
) -> Result<String, FieldError> {
    let zone = parse_timezone(timezone)?;
    let pattern = translate_date_format(format);
    let items: Vec<Item<'_>> = StrftimeItems::new(&pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(FieldError::invalid_input(format!("Invalid date format: {format}")));
    }
    Ok(now.with_timezone(&zone).format_with_items(items.iter()).to_string())
}

/// Parses an IANA timezone name.
///
/// # Errors
///
/// Returns [`FieldError::InvalidInput`] for unknown names.
pub fn parse_timezone(timezone: &str) -> Result<Tz, FieldError> {
    timezone
        .trim()
        .parse::<Tz>()
        .map_err(|_| FieldError::invalid_input(format!("Invalid timezone: {timezone}")))
}

/// Returns true when a date format renders without errors.
#[must_use]
pub fn is_renderable_date_format(format: &str) -> bool {
    let pattern = translate_date_format(format);
    !StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error))
}

// ============================================================================
// SECTION: Token Translation
// ============================================================================

/// Translates a Luxon-style format into a strftime pattern.
#[must_use]
pub fn translate_date_format(format: &str) -> String {
    let chars: Vec<char> = format.chars().collect();
    let mut pattern = String::with_capacity(format.len() * 2);
    let mut index = 0;
    while index < chars.len() {
        let ch = chars[index];
        if ch == '\'' {
            index = push_quoted(&chars, index + 1, &mut pattern);
            continue;
        }
        if ch.is_ascii_alphabetic() {
            let run = chars[index ..].iter().take_while(|next| **next == ch).count();
            match token(ch, run) {
                Some(directive) => pattern.push_str(directive),
                None => (0 .. run).for_each(|_| pattern.push(ch)),
            }
            index += run;
            continue;
        }
        push_literal(ch, &mut pattern);
        index += 1;
    }
    pattern
}

/// Copies a quoted literal starting after the opening quote; returns the
/// index just past the closing quote.
fn push_quoted(chars: &[char], mut index: usize, pattern: &mut String) -> usize {
    if chars.get(index) == Some(&'\'') {
        pattern.push('\'');
        return index + 1;
    }
    while let Some(ch) = chars.get(index) {
        index += 1;
        if *ch == '\'' {
            if chars.get(index) == Some(&'\'') {
                pattern.push('\'');
                index += 1;
                continue;
            }
            return index;
        }
        push_literal(*ch, pattern);
    }
    index
}

/// Appends a literal character, escaping strftime's `%`.
fn push_literal(ch: char, pattern: &mut String) {
    if ch == '%' {
        pattern.push_str("%%");
    } else {
        pattern.push(ch);
    }
}

/// Maps a run of `count` repeated `letter`s to a strftime specifier.
const fn token(letter: char, count: usize) -> Option<&'static str> {
    let directive = match (letter, count) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('L', 1) => "%-m",
        ('L', _) => "%m",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('E', 1) => "%u",
        ('E', 2 | 3) => "%a",
        ('E', _) => "%A",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('S', _) => "%3f",
        ('a', _) => "%p",
        ('Z', 1 | 2) | ('X', _) => "%:z",
        ('Z', 3) => "%z",
        ('Z', _) => "%Z",
        _ => return None,
    };
    Some(directive)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::translate_date_format;

    #[test]
    fn translates_default_format() {
        assert_eq!(translate_date_format("yyyy-MM-dd hh:mm a"), "%Y-%m-%d %I:%M %p");
    }

    #[test]
    fn quoted_text_and_percent_are_literal() {
        assert_eq!(translate_date_format("yyyy-MM-dd'T'HH:mm"), "%Y-%m-%dT%H:%M");
        assert_eq!(translate_date_format("'it''s' d%"), "it's %-d%%");
        assert_eq!(translate_date_format("''"), "'");
    }

    #[test]
    fn unknown_letters_pass_through() {
        assert_eq!(translate_date_format("d 'of' MMMM, yyyy QQ"), "%-d of %B, %Y QQ");
    }
}
