// crates/fieldsign-core/src/runtime/audit.rs
// ============================================================================
// Module: Signing Audit Sinks
// Description: JSON-lines audit sinks for signing events.
// Purpose: Route signing outcomes to stderr, a file, or nowhere.
// Dependencies: serde_json, crate::interfaces
// ============================================================================

//! ## Overview
//! Sinks serialize each [`SigningAuditEvent`] as one JSON line. Write
//! failures are swallowed so auditing never changes a signing result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use crate::interfaces::SigningAuditEvent;
use crate::interfaces::SigningAuditSink;

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl SigningAuditSink for StderrAuditSink {
    fn record(&self, event: &SigningAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl SigningAuditSink for FileAuditSink {
    fn record(&self, event: &SigningAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl SigningAuditSink for NoopAuditSink {
    fn record(&self, _event: &SigningAuditEvent) {}
}
