// crates/fieldsign-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for fieldsign-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::fs;
use std::path::PathBuf;

use fieldsign_config::SigningConfig;
use tempfile::TempDir;

/// Parses a TOML string into a `SigningConfig` for tests.
pub fn config_from_toml(toml_str: &str) -> Result<SigningConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Writes `contents` to `fieldsign.toml` in a fresh temp dir.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
    let path = dir.path().join("fieldsign.toml");
    fs::write(&path, contents).unwrap_or_else(|err| panic!("write config: {err}"));
    (dir, path)
}
