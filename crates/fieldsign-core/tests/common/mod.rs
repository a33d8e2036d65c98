// crates/fieldsign-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Fixtures
// Description: Shared field, metadata, and clock fixtures for core tests.
// Purpose: Provide deterministic inputs for signing tests.
// Dependencies: fieldsign-core, chrono, serde_json
// ============================================================================

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use fieldsign_core::Field;
use fieldsign_core::FieldId;
use fieldsign_core::FieldKind;
use fieldsign_core::RecipientId;
use serde_json::Value;
use serde_json::json;

/// Fixed signing instant: 2026-03-14 15:09:26 UTC.
#[must_use]
pub fn signing_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).single().unwrap_or_default()
}

/// Builds a field for recipient 7 with the given metadata.
#[must_use]
pub fn field(kind: FieldKind, meta: Value) -> Field {
    Field::new(FieldId::new(1), RecipientId::new(7), kind).with_meta(meta)
}

/// Builds a JSON option list from plain values.
#[must_use]
pub fn options(values: &[&str]) -> Value {
    Value::Array(values.iter().map(|value| json!({ "value": value })).collect())
}

/// Five checkbox options `A` through `E` with a selection rule.
#[must_use]
pub fn checkbox_meta(rule: &str, length: Value) -> Value {
    json!({
        "type": "checkbox",
        "values": options(&["A", "B", "C", "D", "E"]),
        "validationRule": rule,
        "validationLength": length,
    })
}
