// crates/fieldsign-core/tests/properties.rs
// ============================================================================
// Module: Field Signing Property Tests
// Description: Property-based checks for encodings and extraction.
// Purpose: Ensure round-trips hold and hostile input never panics.
// ============================================================================

//! ## Overview
//! Uses proptest to check that radio and checkbox encodings round-trip for
//! every valid selection, that in-range values always insert, and that
//! arbitrary input to the parsers and the signer fails closed.

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

use std::collections::BTreeSet;

use fieldsign_core::DocumentMeta;
use fieldsign_core::FieldKind;
use fieldsign_core::FieldOption;
use fieldsign_core::FieldValue;
use fieldsign_core::extract_field_insertion_values;
use fieldsign_core::find_placeholders;
use fieldsign_core::from_checkbox_custom_text;
use fieldsign_core::from_radio_custom_text;
use fieldsign_core::insertion::format_signing_date;
use fieldsign_core::parse_field_kind;
use fieldsign_core::to_checkbox_custom_text;
use fieldsign_core::to_radio_custom_text;
use proptest::prelude::*;
use serde_json::json;

mod common;
use crate::common::field;
use crate::common::signing_instant;

/// Unique option values, including ones that look like JSON.
fn option_values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(".{0,12}", 1 .. 8).prop_map(|set| set.into_iter().collect())
}

fn to_options(values: &[String]) -> Vec<FieldOption> {
    values.iter().map(FieldOption::new).collect()
}

proptest! {
    #[test]
    fn radio_encoding_round_trips(values in option_values(), pick in any::<prop::sample::Index>()) {
        let options = to_options(&values);
        let index = pick.index(options.len());
        let encoded = to_radio_custom_text(&options, index).unwrap();
        prop_assert_eq!(from_radio_custom_text(&encoded, &options), Some(index));
    }

    #[test]
    fn checkbox_encoding_round_trips(
        values in option_values(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0 .. 10),
    ) {
        let options = to_options(&values);
        let indices: Vec<usize> = picks.iter().map(|pick| pick.index(options.len())).collect();
        let encoded = to_checkbox_custom_text(&options, &indices).unwrap();
        let expected: Vec<usize> = indices.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(from_checkbox_custom_text(&encoded, &options), Some(expected));
    }

    #[test]
    fn in_range_radio_and_checkbox_values_insert(
        values in prop::collection::btree_set("[a-z]{1,8}", 1 .. 6),
        pick in any::<prop::sample::Index>(),
    ) {
        let values: Vec<String> = values.into_iter().collect();
        let index = pick.index(values.len());
        let meta = json!({ "values": values });
        let now = signing_instant();
        let document_meta = DocumentMeta::default();

        let radio = field(FieldKind::Radio, meta.clone());
        let insertion =
            extract_field_insertion_values(&FieldValue::Radio(Some(index)), &radio, &document_meta, now)
                .unwrap();
        prop_assert!(insertion.inserted);
        prop_assert!(!insertion.custom_text.is_empty());

        let checkbox = field(FieldKind::Checkbox, meta.clone());
        let insertion = extract_field_insertion_values(
            &FieldValue::Checkbox(Some(vec![index])),
            &checkbox,
            &document_meta,
            now,
        )
        .unwrap();
        prop_assert!(insertion.inserted);

        let dropdown = field(FieldKind::Dropdown, meta);
        let insertion = extract_field_insertion_values(
            &FieldValue::Dropdown(Some(values[index].clone())),
            &dropdown,
            &document_meta,
            now,
        )
        .unwrap();
        prop_assert_eq!(insertion.custom_text, values[index].clone());
    }

    #[test]
    fn in_range_numbers_insert(value in -1_000_000i64 .. 1_000_000) {
        let number = field(
            FieldKind::Number,
            json!({ "minValue": -1_000_000, "maxValue": 1_000_000 }),
        );
        let text = value.to_string();
        let insertion = extract_field_insertion_values(
            &FieldValue::Number(Some(text.clone())),
            &number,
            &DocumentMeta::default(),
            signing_instant(),
        )
        .unwrap();
        prop_assert_eq!(insertion.custom_text, text);
        prop_assert!(insertion.inserted);
    }

    #[test]
    fn arbitrary_text_never_panics(input in ".{0,64}") {
        let _ = parse_field_kind(&input);
        let _ = find_placeholders(&input);
        let _ = format_signing_date(signing_instant(), &input, "Etc/UTC");
        let _ = format_signing_date(signing_instant(), "yyyy", &input);
        let number = field(FieldKind::Number, json!({ "numberFormat": "123,456,789.00" }));
        let _ = extract_field_insertion_values(
            &FieldValue::Number(Some(input.clone())),
            &number,
            &DocumentMeta::default(),
            signing_instant(),
        );
        let email = field(FieldKind::Email, serde_json::Value::Null);
        let _ = extract_field_insertion_values(
            &FieldValue::Email(Some(input)),
            &email,
            &DocumentMeta::default(),
            signing_instant(),
        );
    }

    #[test]
    fn arbitrary_custom_text_decodes_or_fails_closed(input in ".{0,64}") {
        let options = to_options(&["A".to_string(), "B".to_string()]);
        if let Some(indices) = from_checkbox_custom_text(&input, &options) {
            prop_assert!(indices.iter().all(|index| *index < options.len()));
        }
        if let Some(index) = from_radio_custom_text(&input, &options) {
            prop_assert!(index < options.len());
        }
    }
}
