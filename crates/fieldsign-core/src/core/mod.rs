// crates/fieldsign-core/src/core/mod.rs
// ============================================================================
// Module: Fieldsign Core Types
// Description: Field kinds, metadata, submitted values, and document context.
// Purpose: Provide stable, serializable types for the field signing pipeline.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Core types define the field registry and every value that flows through
//! validation and insertion. They are the canonical source of truth for the
//! signing API surface.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod document;
pub mod error;
pub mod field;
pub mod kind;
pub mod meta;
pub mod placeholder;
pub mod raw_meta;
pub mod value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use document::DEFAULT_DOCUMENT_DATE_FORMAT;
pub use document::DEFAULT_DOCUMENT_TIME_ZONE;
pub use document::DocumentMeta;
pub use document::SigningDefaults;
pub use error::ErrorBody;
pub use error::ErrorCode;
pub use error::FieldError;
pub use field::Field;
pub use field::FieldId;
pub use field::FieldInsertion;
pub use field::RecipientId;
pub use kind::FieldKind;
pub use kind::parse_field_kind;
pub use meta::BasicFieldMeta;
pub use meta::CheckboxFieldMeta;
pub use meta::CheckboxValidationRule;
pub use meta::CommonFieldMeta;
pub use meta::DropdownFieldMeta;
pub use meta::FieldMeta;
pub use meta::FieldOption;
pub use meta::NumberFieldMeta;
pub use meta::RadioFieldMeta;
pub use meta::TextFieldMeta;
pub use meta::ValidationLength;
pub use placeholder::PlaceholderField;
pub use placeholder::PlaceholderMatch;
pub use placeholder::find_placeholders;
pub use placeholder::parse_placeholder;
pub use raw_meta::parse_field_metadata;
pub use value::FieldValue;
pub use value::SubmissionMode;
