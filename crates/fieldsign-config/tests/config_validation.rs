// crates/fieldsign-config/tests/config_validation.rs
// ============================================================================
// Module: Config Validation Tests
// Description: Loading, defaults, and fail-closed validation of fieldsign.toml.
// Purpose: Ensure invalid deployment settings are rejected before signing.
// ============================================================================

//! ## Overview
//! Loading, defaults, and fail-closed validation of `fieldsign.toml`.

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

use std::fs;

use fieldsign_config::AuditSinkKind;
use fieldsign_config::ConfigError;
use fieldsign_config::SigningConfig;
use fieldsign_core::DEFAULT_DOCUMENT_DATE_FORMAT;
use fieldsign_core::DEFAULT_DOCUMENT_TIME_ZONE;
use fieldsign_core::SigningDefaults;

mod common;
use crate::common::config_from_toml;
use crate::common::write_config;

fn invalid_message(result: Result<SigningConfig, ConfigError>) -> String {
    match result {
        Err(ConfigError::Invalid(message)) => message,
        other => panic!("expected invalid config, got {other:?}"),
    }
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

#[test]
fn empty_config_uses_document_defaults() {
    let config = config_from_toml("").unwrap();
    config.validate().unwrap();
    assert_eq!(config.signing_defaults(), SigningDefaults::default());
    assert_eq!(config.defaults.date_format, DEFAULT_DOCUMENT_DATE_FORMAT);
    assert_eq!(config.defaults.timezone, DEFAULT_DOCUMENT_TIME_ZONE);
    assert_eq!(config.audit.sink, AuditSinkKind::None);
}

#[test]
fn loads_explicit_defaults_from_disk() {
    let (_dir, path) = write_config(
        r#"
[defaults]
date_format = "dd/MM/yyyy"
timezone = "Australia/Sydney"
typed_signature_enabled = false
"#,
    );
    let config = SigningConfig::load(Some(&path)).unwrap();
    let defaults = config.signing_defaults();
    assert_eq!(defaults.date_format, "dd/MM/yyyy");
    assert_eq!(defaults.timezone, "Australia/Sydney");
    assert!(!defaults.typed_signature_enabled);
}

// ============================================================================
// SECTION: Validation
// ============================================================================

#[test]
fn unknown_timezone_is_rejected() {
    let (_dir, path) = write_config("[defaults]\ntimezone = \"Nowhere/Special\"\n");
    let message = invalid_message(SigningConfig::load(Some(&path)));
    assert!(message.contains("defaults.timezone"), "{message}");
}

#[test]
fn blank_date_format_is_rejected() {
    let (_dir, path) = write_config("[defaults]\ndate_format = \"  \"\n");
    assert_eq!(
        invalid_message(SigningConfig::load(Some(&path))),
        "defaults.date_format must be non-empty"
    );
}

#[test]
fn file_sink_requires_a_path() {
    let (_dir, path) = write_config("[audit]\nsink = \"file\"\n");
    assert_eq!(
        invalid_message(SigningConfig::load(Some(&path))),
        "audit.path is required for the file sink"
    );
}

#[test]
fn unknown_keys_fail_to_parse() {
    let (_dir, path) = write_config("[defaults]\ndate_fmt = \"yyyy\"\n");
    assert!(matches!(SigningConfig::load(Some(&path)), Err(ConfigError::Parse(_))));
    let (_dir, path) = write_config("[audit]\nsink = \"syslog\"\n");
    assert!(matches!(SigningConfig::load(Some(&path)), Err(ConfigError::Parse(_))));
}

#[test]
fn oversized_and_non_utf8_files_are_rejected() {
    let (dir, _) = write_config("");
    let big = dir.path().join("big.toml");
    fs::write(&big, vec![b'#'; 1024 * 1024 + 1]).unwrap();
    assert_eq!(
        invalid_message(SigningConfig::load(Some(&big))),
        "config file exceeds size limit"
    );
    let binary = dir.path().join("binary.toml");
    fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();
    assert_eq!(invalid_message(SigningConfig::load(Some(&binary))), "config file must be utf-8");
}

#[test]
fn missing_file_is_an_io_error() {
    let (dir, _) = write_config("");
    let missing = dir.path().join("missing.toml");
    assert!(matches!(SigningConfig::load(Some(&missing)), Err(ConfigError::Io(_))));
}

// ============================================================================
// SECTION: Audit Sinks
// ============================================================================

#[test]
fn file_sink_opens_configured_path() {
    let (dir, _) = write_config("");
    let log = dir.path().join("audit.jsonl");
    let config = config_from_toml(&format!(
        "[audit]\nsink = \"file\"\npath = \"{}\"\n",
        log.display().to_string().replace('\\', "\\\\")
    ))
    .unwrap();
    config.validate().unwrap();
    assert!(config.audit_sink().is_ok());
    assert!(log.exists());
}

#[test]
fn stderr_and_none_sinks_build() {
    for sink in ["none", "stderr"] {
        let config = config_from_toml(&format!("[audit]\nsink = \"{sink}\"\n")).unwrap();
        config.validate().unwrap();
        assert!(config.audit_sink().is_ok());
    }
}
