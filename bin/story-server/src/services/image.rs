//! Best-effort decoding of user-supplied images.
//!
//! A bad image never fails the request: callers get `None` and carry on with
//! a text-only prompt.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use story_gemini::Part;
use thiserror::Error;
use tracing::{debug, warn};

/// A validated image ready to be attached as an inline-data part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl InlineImage {
    pub fn into_part(self) -> Part {
        Part::inline(self.mime_type, STANDARD.encode(&self.bytes))
    }
}

#[derive(Debug, Error)]
enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("unreadable image: {0}")]
    Image(#[from] image::ImageError),
}

/// Decode a raw base64 string or a `data:<mime>;base64,<payload>` URL.
///
/// Returns `None` (and logs a warning) when the payload is not valid base64
/// or not an image the server can parse.
pub fn decode_image(encoded: &str) -> Option<InlineImage> {
    match try_decode(encoded) {
        Ok(img) => {
            debug!(mime = img.mime_type, bytes = img.bytes.len(), "image attached");
            Some(img)
        }
        Err(e) => {
            warn!(error = %e, "image decode failed; continuing text-only");
            None
        }
    }
}

fn try_decode(encoded: &str) -> Result<InlineImage, DecodeError> {
    let payload = strip_data_url(encoded);
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;

    let format = image::guess_format(&bytes)?;
    // Full decode so truncated or corrupt files are rejected here rather than
    // by the provider.
    image::load_from_memory_with_format(&bytes, format)?;

    Ok(InlineImage {
        mime_type: format.to_mime_type(),
        bytes,
    })
}

fn strip_data_url(encoded: &str) -> &str {
    let trimmed = encoded.trim();
    match trimmed.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or(rest, |(_, payload)| payload),
        None => trimmed,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
