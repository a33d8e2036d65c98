// crates/fieldsign-config/src/lib.rs
// ============================================================================
// Module: Fieldsign Config Library
// Description: Canonical config model and validation for fieldsign.toml.
// Purpose: Single source of truth for deployment signing defaults.
// Dependencies: fieldsign-core, serde, toml
// ============================================================================

//! ## Overview
//! `fieldsign-config` loads and validates the deployment configuration that
//! supplies fallback document settings and selects the audit sink. Loading
//! fails closed on oversized, non-UTF-8, or inconsistent files.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
