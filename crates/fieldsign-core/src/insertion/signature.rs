// crates/fieldsign-core/src/insertion/signature.rs
// ============================================================================
// Module: Signature Image Detection
// Description: Detection of base64 image data URLs.
// Purpose: Distinguish drawn signatures from typed signature text.
// Dependencies: base64
// ============================================================================

//! ## Overview
//! A drawn signature arrives as a `data:image/<subtype>;base64,` URL; any
//! other text is a typed signature, which documents may refuse.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Data URL prefix shared by all image payloads.
const IMAGE_DATA_URL_PREFIX: &str = "data:image/";
/// Separator between the media type and the base64 payload.
const BASE64_MARKER: &str = ";base64,";

/// Returns true when `value` is a `data:image/<subtype>;base64,` URL whose
/// payload decodes as standard base64.
#[must_use]
pub fn is_base64_image(value: &str) -> bool {
    let Some(rest) = value.strip_prefix(IMAGE_DATA_URL_PREFIX) else {
        return false;
    };
    let Some((subtype, payload)) = rest.split_once(BASE64_MARKER) else {
        return false;
    };
    let subtype_ok = !subtype.is_empty()
        && subtype.chars().all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'));
    let payload = payload.trim();
    subtype_ok && !payload.is_empty() && BASE64.decode(payload).is_ok()
}
