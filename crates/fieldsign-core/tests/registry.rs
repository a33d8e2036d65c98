// crates/fieldsign-core/tests/registry.rs
// ============================================================================
// Module: Field Registry Tests
// Description: Kind parsing, metadata decoding, and configuration checks.
// Purpose: Ensure field kinds and metadata decode strictly where required.
// ============================================================================

//! ## Overview
//! Covers `parse_field_kind`, typed metadata decoding from stored JSON and
//! from string maps, and the configuration-time checks on metadata.

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

use std::collections::BTreeMap;

use fieldsign_core::FieldError;
use fieldsign_core::FieldKind;
use fieldsign_core::FieldMeta;
use fieldsign_core::ValidationLength;
use fieldsign_core::parse_field_kind;
use fieldsign_core::parse_field_metadata;
use fieldsign_core::parse_placeholder;
use serde_json::json;

fn raw(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries.iter().map(|(key, value)| ((*key).to_string(), (*value).to_string())).collect()
}

// ============================================================================
// SECTION: Kind Parsing
// ============================================================================

#[test]
fn field_kinds_parse_case_insensitively() {
    assert_eq!(parse_field_kind("signature").unwrap(), FieldKind::Signature);
    assert_eq!(parse_field_kind("  Free_Signature ").unwrap(), FieldKind::FreeSignature);
    assert_eq!(parse_field_kind("DROPDOWN").unwrap(), FieldKind::Dropdown);
    for kind in FieldKind::ALL {
        assert_eq!(parse_field_kind(kind.as_str()).unwrap(), kind);
        assert_eq!(kind.as_str().parse::<FieldKind>().unwrap(), kind);
    }
}

#[test]
fn unknown_field_kind_names_the_input() {
    let err = parse_field_kind("stamp").unwrap_err();
    assert_eq!(err, FieldError::invalid_input("Invalid field type: stamp"));
    assert!(parse_field_kind("").is_err());
    assert!(parse_field_kind("free signature").is_err());
}

#[test]
fn advanced_kinds_are_the_configurable_ones() {
    let advanced: Vec<FieldKind> =
        FieldKind::ALL.into_iter().filter(|kind| kind.is_advanced()).collect();
    assert_eq!(
        advanced,
        vec![
            FieldKind::Text,
            FieldKind::Number,
            FieldKind::Radio,
            FieldKind::Checkbox,
            FieldKind::Dropdown
        ]
    );
}

// ============================================================================
// SECTION: Stored Metadata
// ============================================================================

#[test]
fn empty_and_signature_metadata_decode_to_none() {
    assert!(FieldMeta::from_json(FieldKind::Text, &json!(null)).unwrap().is_none());
    assert!(FieldMeta::from_json(FieldKind::Text, &json!({})).unwrap().is_none());
    let signature = json!({ "required": true });
    assert!(FieldMeta::from_json(FieldKind::Signature, &signature).unwrap().is_none());
}

#[test]
fn checkbox_metadata_decodes_options_and_rule() {
    let meta = FieldMeta::from_json(
        FieldKind::Checkbox,
        &json!({
            "type": "checkbox",
            "required": true,
            "values": [{ "id": 1, "checked": true, "value": "A" }, "B"],
            "validationRule": "Select at least",
            "validationLength": 2,
            "unknownKey": "ignored",
        }),
    )
    .unwrap()
    .unwrap();
    let checkbox = meta.as_checkbox().unwrap();
    assert!(checkbox.common.is_required());
    let values = checkbox.values.as_ref().unwrap();
    assert_eq!(values[0].id, Some(1));
    assert!(values[0].checked);
    assert_eq!(values[1].value, "B");
    assert!(!values[1].checked);
    assert_eq!(checkbox.validation_length, Some(ValidationLength::Count(2)));
    assert!(checkbox.selection_rule().is_some());
}

#[test]
fn validation_length_decodes_leniently() {
    let decode = |length: serde_json::Value| {
        let meta = FieldMeta::from_json(
            FieldKind::Checkbox,
            &json!({ "values": ["A"], "validationRule": "range", "validationLength": length }),
        )
        .unwrap()
        .unwrap();
        meta.as_checkbox().unwrap().validation_length
    };
    assert_eq!(decode(json!([1, 3])), Some(ValidationLength::Range(1, 3)));
    assert_eq!(decode(json!("2-4")), Some(ValidationLength::Range(2, 4)));
    assert_eq!(decode(json!("2,4")), Some(ValidationLength::Range(2, 4)));
    assert_eq!(decode(json!("3")), Some(ValidationLength::Count(3)));
    assert_eq!(decode(json!("many")), None);
    assert_eq!(decode(json!(-1)), None);
}

#[test]
fn structurally_wrong_metadata_is_rejected() {
    let err = FieldMeta::from_json(FieldKind::Text, &json!({ "characterLimit": "twenty" }))
        .unwrap_err();
    match err {
        FieldError::InvalidInput(message) => {
            assert!(message.starts_with("Invalid field metadata"), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(FieldMeta::from_json(FieldKind::Radio, &json!([1, 2])).is_err());
}

#[test]
fn number_value_accepts_string_or_number() {
    let meta = FieldMeta::from_json(FieldKind::Number, &json!({ "value": 42, "minValue": 0 }))
        .unwrap()
        .unwrap();
    let number = meta.as_number().unwrap();
    assert_eq!(number.value.as_deref(), Some("42"));
    assert_eq!(number.min_value, Some(0.0));
}

// ============================================================================
// SECTION: String Map Metadata
// ============================================================================

#[test]
fn string_map_metadata_parses_booleans_and_numbers() {
    let meta = parse_field_metadata(
        &raw(&[
            ("required", "true"),
            ("readOnly", "yes"),
            ("characterLimit", "20"),
            ("fontSize", "not-a-number"),
            ("label", "Company"),
        ]),
        FieldKind::Text,
    )
    .unwrap()
    .unwrap();
    let text = meta.as_text().unwrap();
    assert_eq!(text.common.required, Some(true));
    assert_eq!(text.common.read_only, Some(false));
    assert_eq!(text.character_limit, Some(20));
    assert_eq!(text.common.font_size, None);
    assert_eq!(text.common.label.as_deref(), Some("Company"));
}

#[test]
fn string_map_metadata_is_none_for_signatures_and_empty_maps() {
    let entries = raw(&[("required", "true")]);
    assert!(parse_field_metadata(&entries, FieldKind::Signature).unwrap().is_none());
    assert!(parse_field_metadata(&entries, FieldKind::FreeSignature).unwrap().is_none());
    assert!(parse_field_metadata(&BTreeMap::new(), FieldKind::Number).unwrap().is_none());
}

#[test]
fn string_map_numbers_keep_fractions() {
    let meta = parse_field_metadata(
        &raw(&[("minValue", "0.5"), ("maxValue", "1e2"), ("numberFormat", "123,456,789.00")]),
        FieldKind::Number,
    )
    .unwrap()
    .unwrap();
    let number = meta.as_number().unwrap();
    assert_eq!(number.min_value, Some(0.5));
    assert_eq!(number.max_value, Some(100.0));
    assert_eq!(number.number_format.as_deref(), Some("123,456,789.00"));
}

#[test]
fn string_map_fractional_character_limit_is_dropped() {
    let meta = parse_field_metadata(
        &raw(&[("characterLimit", "10.5"), ("required", "true")]),
        FieldKind::Text,
    )
    .unwrap()
    .unwrap();
    let text = meta.as_text().unwrap();
    assert_eq!(text.character_limit, None);
    assert!(text.common.is_required());

    let placeholder = parse_placeholder("{{TEXT, r1, characterLimit=10.5}}").unwrap();
    assert_eq!(placeholder.meta.unwrap().as_text().unwrap().character_limit, None);
}

#[test]
fn stored_character_limit_accepts_integral_floats() {
    let meta = FieldMeta::from_json(FieldKind::Text, &json!({ "characterLimit": 12.0 }))
        .unwrap()
        .unwrap();
    assert_eq!(meta.as_text().unwrap().character_limit, Some(12));
    let meta = FieldMeta::from_json(FieldKind::Text, &json!({ "characterLimit": 7.25 }))
        .unwrap()
        .unwrap();
    assert_eq!(meta.as_text().unwrap().character_limit, None);
}

// ============================================================================
// SECTION: Configuration Checks
// ============================================================================

fn configuration_errors(kind: FieldKind, meta: serde_json::Value) -> Vec<String> {
    FieldMeta::from_json(kind, &meta).unwrap().unwrap().configuration_errors()
}

#[test]
fn well_formed_metadata_has_no_configuration_errors() {
    let errors = configuration_errors(
        FieldKind::Checkbox,
        json!({ "values": ["A", "B", "C"], "validationRule": ">=", "validationLength": 1 }),
    );
    assert!(errors.is_empty(), "{errors:?}");
    let errors = configuration_errors(
        FieldKind::Dropdown,
        json!({ "values": ["A", "B"], "defaultValue": "B", "fontSize": 12 }),
    );
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn unknown_checkbox_rule_is_a_configuration_error() {
    let errors = configuration_errors(
        FieldKind::Checkbox,
        json!({ "values": ["A", "B"], "validationRule": "bogus-op", "validationLength": 1 }),
    );
    assert_eq!(errors, vec!["Unknown checkbox validation rule: bogus-op".to_string()]);
}

#[test]
fn option_lists_must_be_present_and_unique() {
    let errors = configuration_errors(FieldKind::Radio, json!({ "values": ["A", "A", ""] }));
    assert!(errors.contains(&"Duplicate values are not allowed".to_string()));
    assert!(errors.contains(&"Option value cannot be empty".to_string()));
    let errors = configuration_errors(FieldKind::Dropdown, json!({ "required": true }));
    assert!(errors.contains(&"Field must have at least one option".to_string()));
}

#[test]
fn conflicting_flags_and_bounds_are_reported() {
    let errors = configuration_errors(
        FieldKind::Number,
        json!({ "required": true, "readOnly": true, "minValue": 10, "maxValue": 1, "fontSize": 200 }),
    );
    assert!(errors.contains(&"A field cannot be both read-only and required".to_string()));
    assert!(errors.contains(&"Minimum value cannot be greater than maximum value".to_string()));
    assert!(errors.contains(&"Font size must be between 8 and 96".to_string()));
}

#[test]
fn range_rule_requires_ordered_pair() {
    let errors = configuration_errors(
        FieldKind::Checkbox,
        json!({ "values": ["A", "B"], "validationRule": "range", "validationLength": 2 }),
    );
    assert_eq!(errors, vec!["A range rule needs a lower and an upper bound".to_string()]);
    let errors = configuration_errors(
        FieldKind::Checkbox,
        json!({ "values": ["A", "B"], "validationRule": "range", "validationLength": [3, 1] }),
    );
    assert_eq!(errors, vec!["Range lower bound cannot exceed the upper bound".to_string()]);
}
