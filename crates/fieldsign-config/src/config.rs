// crates/fieldsign-config/src/config.rs
// ============================================================================
// Module: Fieldsign Configuration
// Description: Configuration loading and validation for field signing.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: fieldsign-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The path comes from the caller, else the `FIELDSIGN_CONFIG` environment
//! variable, else `fieldsign.toml` in the working directory. Every section
//! has defaults, so an empty file is a valid configuration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use fieldsign_core::DEFAULT_DOCUMENT_DATE_FORMAT;
use fieldsign_core::DEFAULT_DOCUMENT_TIME_ZONE;
use fieldsign_core::FileAuditSink;
use fieldsign_core::NoopAuditSink;
use fieldsign_core::SigningAuditSink;
use fieldsign_core::SigningDefaults;
use fieldsign_core::StderrAuditSink;
use fieldsign_core::insertion::is_renderable_date_format;
use fieldsign_core::insertion::parse_timezone;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "fieldsign.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "FIELDSIGN_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a date format string.
pub(crate) const MAX_DATE_FORMAT_LENGTH: usize = 128;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Fieldsign deployment configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SigningConfig {
    /// Fallback document settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Audit logging configuration.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl SigningConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.defaults.validate()?;
        self.audit.validate()
    }

    /// Returns the signing defaults described by this configuration.
    #[must_use]
    pub fn signing_defaults(&self) -> SigningDefaults {
        SigningDefaults {
            date_format: self.defaults.date_format.trim().to_string(),
            timezone: self.defaults.timezone.trim().to_string(),
            typed_signature_enabled: self.defaults.typed_signature_enabled,
        }
    }

    /// Builds the configured audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the audit file cannot be opened and
    /// [`ConfigError::Invalid`] when a file sink has no path.
    pub fn audit_sink(&self) -> Result<Arc<dyn SigningAuditSink>, ConfigError> {
        match self.audit.sink {
            AuditSinkKind::None => Ok(Arc::new(NoopAuditSink)),
            AuditSinkKind::Stderr => Ok(Arc::new(StderrAuditSink)),
            AuditSinkKind::File => {
                let path = self.audit.path.as_deref().ok_or_else(|| {
                    ConfigError::Invalid("audit.path is required for the file sink".to_string())
                })?;
                let sink = FileAuditSink::new(Path::new(path.trim()))
                    .map_err(|err| ConfigError::Io(err.to_string()))?;
                Ok(Arc::new(sink))
            }
        }
    }
}

/// Fallback document settings applied when a document leaves them unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Date format with Luxon-style tokens.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// IANA timezone name.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Whether typed signatures are accepted.
    #[serde(default = "default_typed_signature_enabled")]
    pub typed_signature_enabled: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            timezone: default_timezone(),
            typed_signature_enabled: default_typed_signature_enabled(),
        }
    }
}

impl DefaultsConfig {
    /// Validates default document settings.
    fn validate(&self) -> Result<(), ConfigError> {
        let date_format = self.date_format.trim();
        if date_format.is_empty() {
            return Err(ConfigError::Invalid("defaults.date_format must be non-empty".to_string()));
        }
        if date_format.len() > MAX_DATE_FORMAT_LENGTH {
            return Err(ConfigError::Invalid("defaults.date_format exceeds max length".to_string()));
        }
        if !is_renderable_date_format(date_format) {
            return Err(ConfigError::Invalid(format!(
                "defaults.date_format is not a valid date format: {date_format}"
            )));
        }
        parse_timezone(&self.timezone).map_err(|err| {
            ConfigError::Invalid(format!("defaults.timezone is invalid: {err}"))
        })?;
        Ok(())
    }
}

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// Discard audit events.
    #[default]
    None,
    /// JSON lines on stderr.
    Stderr,
    /// JSON lines appended to `audit.path`.
    File,
}

/// Audit logging configuration for signing events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Sink receiving audit events.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Audit log path (JSON lines) for the file sink.
    #[serde(default)]
    pub path: Option<String>,
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("audit.path", path)?;
        }
        if self.sink == AuditSinkKind::File && self.path.is_none() {
            return Err(ConfigError::Invalid(
                "audit.path is required for the file sink".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} component too long")));
        }
    }
    Ok(())
}

/// Default date format.
fn default_date_format() -> String {
    DEFAULT_DOCUMENT_DATE_FORMAT.to_string()
}

/// Default timezone.
fn default_timezone() -> String {
    DEFAULT_DOCUMENT_TIME_ZONE.to_string()
}

/// Typed signatures are accepted unless disabled.
const fn default_typed_signature_enabled() -> bool {
    true
}
