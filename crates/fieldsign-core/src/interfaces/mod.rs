// crates/fieldsign-core/src/interfaces/mod.rs
// ============================================================================
// Module: Fieldsign Interfaces
// Description: Clock and audit contracts consumed by the signing runtime.
// Purpose: Keep time sources and audit routing outside the signing core.
// Dependencies: chrono, serde, crate::core
// ============================================================================

//! ## Overview
//! The signing pipeline is pure apart from two collaborators: the source of
//! the signing instant and the sink that records signing outcomes. Both are
//! injected through the traits below so hosts can supply deterministic
//! clocks in tests and route audit events to their own pipeline.
//!
//! Security posture: audit events carry identifiers and outcomes only;
//! submitted values never appear in them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::core::error::ErrorCode;
use crate::core::field::FieldId;
use crate::core::field::RecipientId;
use crate::core::kind::FieldKind;
use crate::core::value::SubmissionMode;

// ============================================================================
// SECTION: Clock
// ============================================================================

/// Source of the signing instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

// ============================================================================
// SECTION: Audit
// ============================================================================

/// Result classification for a signing attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SigningOutcome {
    /// A genuine value was recorded.
    Inserted,
    /// The field was recorded as blank.
    Blank,
    /// The submission was rejected.
    Rejected,
}

/// Audit event for one signing attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigningAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: i64,
    /// Field identifier.
    pub field_id: FieldId,
    /// Recipient responsible for the field.
    pub recipient_id: RecipientId,
    /// Stored field kind.
    pub kind: FieldKind,
    /// Submission mode.
    pub mode: SubmissionMode,
    /// Outcome classification.
    pub outcome: SigningOutcome,
    /// Whether a genuine value was recorded.
    pub inserted: bool,
    /// Error code when rejected.
    pub error_code: Option<ErrorCode>,
    /// Error message when rejected.
    pub error_message: Option<String>,
}

/// Audit sink for signing events.
pub trait SigningAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &SigningAuditEvent);
}
