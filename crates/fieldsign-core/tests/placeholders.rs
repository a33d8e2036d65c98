// crates/fieldsign-core/tests/placeholders.rs
// ============================================================================
// Module: PDF Placeholder Tests
// Description: Parsing and scanning of `{{KIND, rN, key=value}}` markers.
// Purpose: Ensure placeholders yield kinds, recipients, and typed metadata.
// ============================================================================

//! ## Overview
//! Parsing and scanning of PDF placeholder markers.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use fieldsign_core::FieldError;
use fieldsign_core::FieldKind;
use fieldsign_core::find_placeholders;
use fieldsign_core::parse_placeholder;

#[test]
fn placeholder_parses_kind_recipient_and_metadata() {
    let placeholder =
        parse_placeholder("{{text, r2, required=true, characterLimit=20, label=Company}}").unwrap();
    assert_eq!(placeholder.kind, FieldKind::Text);
    assert_eq!(placeholder.recipient_index, 2);
    assert_eq!(placeholder.raw_meta.len(), 3);
    let meta = placeholder.meta.unwrap();
    let text = meta.as_text().unwrap();
    assert!(text.common.is_required());
    assert_eq!(text.character_limit, Some(20));
    assert_eq!(text.common.label.as_deref(), Some("Company"));
}

#[test]
fn signature_placeholders_carry_no_metadata() {
    let placeholder = parse_placeholder("{{SIGNATURE, R1, required=true}}").unwrap();
    assert_eq!(placeholder.kind, FieldKind::Signature);
    assert_eq!(placeholder.recipient_index, 1);
    assert!(placeholder.meta.is_none());
    assert_eq!(placeholder.raw_meta.get("required").map(String::as_str), Some("true"));
}

#[test]
fn malformed_placeholders_are_rejected() {
    assert_eq!(
        parse_placeholder("{{stamp, r1}}").unwrap_err(),
        FieldError::invalid_input("Invalid field type: stamp")
    );
    assert_eq!(
        parse_placeholder("{{name, r0}}").unwrap_err(),
        FieldError::invalid_input("Invalid placeholder recipient: r0")
    );
    assert_eq!(
        parse_placeholder("{{name}}").unwrap_err(),
        FieldError::invalid_input("Placeholder is missing a recipient")
    );
    assert_eq!(
        parse_placeholder("{{name, r1, required}}").unwrap_err(),
        FieldError::invalid_input("Invalid placeholder attribute: required")
    );
}

#[test]
fn scanning_returns_placeholders_with_offsets() {
    let text = "Sign here: {{signature, r1}} Date: {{date, r1}} Total {{number, r2, maxValue=10}}";
    let found = find_placeholders(text).unwrap();
    let kinds: Vec<FieldKind> = found.iter().map(|found| found.field.kind).collect();
    assert_eq!(kinds, vec![FieldKind::Signature, FieldKind::Date, FieldKind::Number]);
    assert_eq!(&text[found[0].start .. found[0].end], "{{signature, r1}}");
    assert_eq!(found[2].field.recipient_index, 2);
    assert_eq!(found[2].field.meta.as_ref().unwrap().as_number().unwrap().max_value, Some(10.0));
}

#[test]
fn unterminated_placeholder_is_rejected() {
    assert_eq!(
        find_placeholders("before {{text, r1 after").unwrap_err(),
        FieldError::invalid_input("Unterminated placeholder")
    );
    assert!(find_placeholders("no markers here").unwrap().is_empty());
}
