// crates/fieldsign-core/src/runtime/signer.rs
// ============================================================================
// Module: Field Signer
// Description: Entry point that validates and records one submitted value.
// Purpose: Run validation then insertion and audit the outcome.
// Dependencies: serde, crate::{core, insertion, interfaces, validation}
// ============================================================================

//! ## Overview
//! [`FieldSigner`] is the single entry point used by signing hosts. For each
//! request it checks that the value kind matches the field, decodes the
//! stored metadata, runs the kind's validator, and then hands the value to
//! the insertion step with document meta completed from deployment
//! defaults. The first failure is returned; nothing is retried. Each
//! request emits exactly one audit event.
//!
//! Requests are independent. The signer holds no per-request state and can
//! be shared across threads.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::core::document::DocumentMeta;
use crate::core::document::SigningDefaults;
use crate::core::error::FieldError;
use crate::core::field::Field;
use crate::core::field::FieldInsertion;
use crate::core::value::FieldValue;
use crate::core::value::SubmissionMode;
use crate::insertion::extract_field_insertion_values;
use crate::interfaces::Clock;
use crate::interfaces::SigningAuditEvent;
use crate::interfaces::SigningAuditSink;
use crate::interfaces::SigningOutcome;
use crate::runtime::audit::NoopAuditSink;
use crate::runtime::clock::SystemClock;
use crate::validation::validate_field_value;

// ============================================================================
// SECTION: Requests
// ============================================================================

/// One submitted value together with the field it targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningRequest {
    /// Submitted value.
    pub field_value: FieldValue,
    /// Stored field record.
    pub field: Field,
    /// Document formatting preferences.
    #[serde(default)]
    pub document_meta: DocumentMeta,
    /// Final or draft submission.
    #[serde(default)]
    pub mode: SubmissionMode,
}

impl SigningRequest {
    /// Creates a final-submission request with empty document meta.
    #[must_use]
    pub fn new(field_value: FieldValue, field: Field) -> Self {
        Self {
            field_value,
            field,
            document_meta: DocumentMeta::default(),
            mode: SubmissionMode::Final,
        }
    }

    /// Sets the document meta.
    #[must_use]
    pub fn with_document_meta(mut self, document_meta: DocumentMeta) -> Self {
        self.document_meta = document_meta;
        self
    }

    /// Sets the submission mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: SubmissionMode) -> Self {
        self.mode = mode;
        self
    }
}

// ============================================================================
// SECTION: Signer
// ============================================================================

/// Validates submitted values and produces the text recorded on fields.
pub struct FieldSigner {
    /// Source of the signing instant.
    clock: Arc<dyn Clock>,
    /// Destination for signing audit events.
    audit: Arc<dyn SigningAuditSink>,
    /// Fallbacks for unset document meta.
    defaults: SigningDefaults,
}

impl Default for FieldSigner {
    fn default() -> Self {
        Self::new(SigningDefaults::default())
    }
}

impl FieldSigner {
    /// Creates a signer using the system clock and no auditing.
    #[must_use]
    pub fn new(defaults: SigningDefaults) -> Self {
        Self {
            clock: Arc::new(SystemClock),
            audit: Arc::new(NoopAuditSink),
            defaults,
        }
    }

    /// Replaces the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the audit sink.
    #[must_use]
    pub fn with_audit_sink(mut self, audit: Arc<dyn SigningAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Returns the configured defaults.
    #[must_use]
    pub const fn defaults(&self) -> &SigningDefaults {
        &self.defaults
    }

    /// Validates `request` and returns the insertion to record.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::TypeMismatch`] when the value kind differs from
    /// the field kind, and [`FieldError::InvalidInput`] carrying the first
    /// validation or insertion message otherwise.
    pub fn sign(&self, request: &SigningRequest) -> Result<FieldInsertion, FieldError> {
        let result = self.sign_request(request);
        self.record(request, &result);
        result
    }

    /// Signs independent requests and returns results in input order.
    #[must_use]
    pub fn sign_all(&self, requests: &[SigningRequest]) -> Vec<Result<FieldInsertion, FieldError>> {
        requests.iter().map(|request| self.sign(request)).collect()
    }

    /// Runs the validation and insertion steps for one request.
    fn sign_request(&self, request: &SigningRequest) -> Result<FieldInsertion, FieldError> {
        let SigningRequest {
            field_value,
            field,
            document_meta,
            mode,
        } = request;
        if field_value.kind() != field.kind {
            return Err(FieldError::TypeMismatch {
                expected: field.kind,
                received: field_value.kind(),
            });
        }
        let meta = field.meta()?;
        if !mode.is_final() && field_value.is_absent() {
            return Ok(FieldInsertion::blank());
        }
        if let Some(message) =
            validate_field_value(field_value, meta.as_ref(), mode.is_final()).into_iter().next()
        {
            return Err(FieldError::InvalidInput(message));
        }
        let document_meta = document_meta.with_defaults(&self.defaults);
        extract_field_insertion_values(field_value, field, &document_meta, self.clock.now())
    }

    /// Emits the audit event for one request.
    fn record(&self, request: &SigningRequest, result: &Result<FieldInsertion, FieldError>) {
        let (outcome, inserted, error) = match result {
            Ok(insertion) if insertion.inserted => (SigningOutcome::Inserted, true, None),
            Ok(_) => (SigningOutcome::Blank, false, None),
            Err(err) => (SigningOutcome::Rejected, false, Some(err)),
        };
        self.audit.record(&SigningAuditEvent {
            event: "field_signing",
            timestamp_ms: self.clock.now().timestamp_millis(),
            field_id: request.field.id,
            recipient_id: request.field.recipient_id,
            kind: request.field.kind,
            mode: request.mode,
            outcome,
            inserted,
            error_code: error.map(FieldError::code),
            error_message: error.map(ToString::to_string),
        });
    }
}
