// crates/fieldsign-core/src/core/document.rs
// ============================================================================
// Module: Fieldsign Document Meta
// Description: Document-level formatting preferences used during signing.
// Purpose: Carry date format, timezone, and signature policy to the formatter.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Document meta is read-only during signing and passed through unchanged
//! from the enclosing document or template. Unset values fall back to
//! [`SigningDefaults`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Date format used when a document does not specify one.
pub const DEFAULT_DOCUMENT_DATE_FORMAT: &str = "yyyy-MM-dd hh:mm a";
/// Timezone used when a document does not specify one.
pub const DEFAULT_DOCUMENT_TIME_ZONE: &str = "Etc/UTC";

/// Deployment-wide fallbacks applied to unset document meta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningDefaults {
    /// Fallback date format.
    pub date_format: String,
    /// Fallback IANA timezone.
    pub timezone: String,
    /// Fallback typed-signature policy.
    pub typed_signature_enabled: bool,
}

impl Default for SigningDefaults {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DOCUMENT_DATE_FORMAT.to_string(),
            timezone: DEFAULT_DOCUMENT_TIME_ZONE.to_string(),
            typed_signature_enabled: true,
        }
    }
}

// ============================================================================
// SECTION: Document Meta
// ============================================================================

/// Document formatting preferences relevant to field insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentMeta {
    /// IANA timezone for generated dates.
    pub timezone: Option<String>,
    /// Date format for generated dates.
    pub date_format: Option<String>,
    /// Whether typed (non-drawn) signatures are accepted.
    pub typed_signature_enabled: Option<bool>,
}

impl DocumentMeta {
    /// Returns a copy with unset values filled from `defaults`.
    #[must_use]
    pub fn with_defaults(&self, defaults: &SigningDefaults) -> Self {
        Self {
            timezone: self.timezone.clone().or_else(|| Some(defaults.timezone.clone())),
            date_format: self.date_format.clone().or_else(|| Some(defaults.date_format.clone())),
            typed_signature_enabled: self
                .typed_signature_enabled
                .or(Some(defaults.typed_signature_enabled)),
        }
    }

    /// Returns the effective timezone.
    #[must_use]
    pub fn timezone_or_default(&self) -> &str {
        self.timezone
            .as_deref()
            .filter(|timezone| !timezone.trim().is_empty())
            .unwrap_or(DEFAULT_DOCUMENT_TIME_ZONE)
    }

    /// Returns the effective date format.
    #[must_use]
    pub fn date_format_or_default(&self) -> &str {
        self.date_format
            .as_deref()
            .filter(|format| !format.trim().is_empty())
            .unwrap_or(DEFAULT_DOCUMENT_DATE_FORMAT)
    }

    /// Returns false only when typed signatures are explicitly disabled.
    #[must_use]
    pub fn allows_typed_signatures(&self) -> bool {
        self.typed_signature_enabled != Some(false)
    }
}
