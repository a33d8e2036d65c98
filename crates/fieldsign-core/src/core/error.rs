// crates/fieldsign-core/src/core/error.rs
// ============================================================================
// Module: Fieldsign Errors
// Description: Structured errors for field parsing, validation, and insertion.
// Purpose: Surface every signing-time failure as a single INVALID_BODY kind.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Every failure raised by the field pipeline is reported synchronously to
//! the caller as a [`FieldError`]. All variants share the `INVALID_BODY`
//! error code and differ only by message, which keeps the translation into
//! API responses trivial for the signing layer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::kind::FieldKind;

// ============================================================================
// SECTION: Error Codes
// ============================================================================

/// Stable error code exposed to API callers.
///
/// # Invariants
/// - Variants are stable for client compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The request body failed validation.
    InvalidBody,
}

impl ErrorCode {
    /// Returns a stable label for the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidBody => "INVALID_BODY",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Field parsing, validation, and insertion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Submitted input or stored configuration was rejected.
    #[error("{0}")]
    InvalidInput(String),
    /// Submitted value kind does not match the field kind.
    #[error("Field type mismatch: expected {expected}, received {received}")]
    TypeMismatch {
        /// Kind of the stored field.
        expected: FieldKind,
        /// Kind carried by the submitted value.
        received: FieldKind,
    },
}

impl FieldError {
    /// Creates an invalid input error with the provided message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput(_)
            | Self::TypeMismatch {
                ..
            } => ErrorCode::InvalidBody,
        }
    }

    /// Returns the serializable error body for API responses.
    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Serializable error payload returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
}
