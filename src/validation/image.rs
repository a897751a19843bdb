//! Photo attachment checks.
//!
//! Photos arrive as `data:image/<subtype>;base64,<payload>` URIs, the form a
//! browser file reader produces. They are stored as-is.

use base64::{engine::general_purpose, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ValidationError;

lazy_static! {
    static ref DATA_URI_PATTERN: Regex =
        Regex::new(r"^data:(image/[A-Za-z0-9.+-]+);base64,(.*)$").unwrap();
}

/// Parsed attachment metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub mime_type: String,
    pub decoded_len: usize,
}

/// Check that `uri` is a base64 image data URI of at most `max_bytes`
/// decoded bytes.
pub fn validate_image(uri: &str, max_bytes: usize) -> Result<ImageInfo, ValidationError> {
    let caps = DATA_URI_PATTERN
        .captures(uri)
        .ok_or_else(|| ValidationError::InvalidImage("not an image data URI".to_string()))?;

    let mime_type = caps[1].to_ascii_lowercase();
    let payload = &caps[2];
    if payload.is_empty() {
        return Err(ValidationError::InvalidImage("empty payload".to_string()));
    }

    // Reject before decoding anything that cannot fit.
    let estimated = payload.len() / 4 * 3;
    if estimated > max_bytes.saturating_add(3) {
        return Err(ValidationError::ImageTooLarge {
            size: estimated,
            limit: max_bytes,
        });
    }

    let decoded = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| ValidationError::InvalidImage(format!("bad base64: {}", e)))?;

    if decoded.len() > max_bytes {
        return Err(ValidationError::ImageTooLarge {
            size: decoded.len(),
            limit: max_bytes,
        });
    }

    Ok(ImageInfo {
        mime_type,
        decoded_len: decoded.len(),
    })
}
